use crate::codec::decode_value;
use crate::dashboard::DashboardContext;
use crate::data::ViewKind;
use crate::registry::{SizeHints, Widget, WidgetDescriptor};
use crate::view::{FormControl, FormField, ViewFragment};
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarConfig {
    #[serde(default)]
    pub view_id: String,
    #[serde(default = "default_true")]
    pub show_controls: bool,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            view_id: String::new(),
            show_controls: true,
        }
    }
}

pub struct CalendarWidget {
    cfg: CalendarConfig,
}

impl CalendarWidget {
    pub fn new(cfg: CalendarConfig) -> Self {
        Self { cfg }
    }

    pub fn descriptor() -> WidgetDescriptor {
        WidgetDescriptor::new(
            "calendar",
            "Calendar",
            "Show a calendar view of dated notes",
            CalendarWidget::new,
        )
        .with_config_form(config_form)
        // the month grid only lays out sensibly at exactly 2x6 cells
        .with_size(SizeHints::fixed(2, 6))
    }
}

impl Widget for CalendarWidget {
    fn render(&self, ctx: &DashboardContext<'_>) -> ViewFragment {
        if self.cfg.view_id.is_empty() {
            return ViewFragment::Placeholder("no view selected".into());
        }
        let Some(view) = ctx.data.view(&self.cfg.view_id) else {
            return ViewFragment::Placeholder("view not found".into());
        };
        if view.kind != ViewKind::Calendar {
            return ViewFragment::Placeholder(format!("{} is not a calendar view", view.name));
        }
        let mut items = vec![
            ViewFragment::Heading(view.name.clone()),
            ViewFragment::Text(ctx.now.format("%B %Y").to_string()),
        ];
        if self.cfg.show_controls {
            items.push(ViewFragment::Text("previous · today · next".into()));
        }
        ViewFragment::Column(items)
    }
}

fn config_form(config: &Value) -> ViewFragment {
    let cfg: CalendarConfig = decode_value(config);
    ViewFragment::Column(vec![
        ViewFragment::Field(FormField::new(
            "viewId",
            "Calendar view",
            FormControl::Text { value: cfg.view_id },
        )),
        ViewFragment::Field(FormField::new(
            "showControls",
            "Show controls",
            FormControl::Toggle {
                value: cfg.show_controls,
            },
        )),
    ])
}
