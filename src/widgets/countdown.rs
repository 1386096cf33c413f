use crate::codec::decode_value;
use crate::dashboard::DashboardContext;
use crate::registry::{Widget, WidgetDescriptor};
use crate::view::{FormControl, FormField, ViewFragment};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_target() -> String {
    // fresh countdowns start one week out
    (Utc::now() + Duration::days(7)).to_rfc3339()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountdownConfig {
    #[serde(default = "default_target")]
    pub target_date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            target_date: default_target(),
            title: String::new(),
            description: String::new(),
        }
    }
}

pub struct CountdownWidget {
    cfg: CountdownConfig,
}

impl CountdownWidget {
    pub fn new(cfg: CountdownConfig) -> Self {
        Self { cfg }
    }

    pub fn descriptor() -> WidgetDescriptor {
        WidgetDescriptor::new(
            "countdown",
            "Countdown",
            "Count down to a target date",
            CountdownWidget::new,
        )
        .with_config_form(config_form)
    }

    fn target(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.cfg.target_date)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}

impl Widget for CountdownWidget {
    fn render(&self, ctx: &DashboardContext<'_>) -> ViewFragment {
        let Some(target) = self.target() else {
            return ViewFragment::Placeholder("no target date".into());
        };

        let mut items = Vec::new();
        if !self.cfg.title.is_empty() {
            items.push(ViewFragment::Heading(self.cfg.title.clone()));
        }
        if !self.cfg.description.is_empty() {
            items.push(ViewFragment::Text(self.cfg.description.clone()));
        }

        let remaining = target - ctx.now;
        if remaining <= Duration::zero() {
            items.push(ViewFragment::Text("Expired".into()));
        } else {
            items.push(ViewFragment::Row(vec![
                stat("days", remaining.num_days()),
                stat("hours", remaining.num_hours() % 24),
                stat("minutes", remaining.num_minutes() % 60),
                stat("seconds", remaining.num_seconds() % 60),
            ]));
        }
        ViewFragment::Column(items)
    }
}

fn stat(label: &str, value: i64) -> ViewFragment {
    ViewFragment::Stat {
        label: label.to_string(),
        value: value.to_string(),
    }
}

fn config_form(config: &Value) -> ViewFragment {
    let cfg: CountdownConfig = decode_value(config);
    ViewFragment::Column(vec![
        ViewFragment::Field(FormField::new(
            "targetDate",
            "Target date",
            FormControl::DateTime {
                value: cfg.target_date,
            },
        )),
        ViewFragment::Field(FormField::new(
            "title",
            "Title",
            FormControl::Text { value: cfg.title },
        )),
        ViewFragment::Field(FormField::new(
            "description",
            "Description",
            FormControl::Text {
                value: cfg.description,
            },
        )),
    ])
}
