use crate::codec::decode_value;
use crate::dashboard::DashboardContext;
use crate::registry::{Widget, WidgetDescriptor};
use crate::view::{FormControl, FormField, ViewFragment};
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_true() -> bool {
    true
}

/// Embeds a saved view (kanban, calendar, map, flow) by reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewConfig {
    #[serde(default)]
    pub view_id: String,
    #[serde(default = "default_true")]
    pub show_controls: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            view_id: String::new(),
            show_controls: true,
        }
    }
}

pub struct ViewWidget {
    cfg: ViewConfig,
}

impl ViewWidget {
    pub fn new(cfg: ViewConfig) -> Self {
        Self { cfg }
    }

    pub fn descriptor() -> WidgetDescriptor {
        WidgetDescriptor::new("view", "View", "Embed a saved view", ViewWidget::new)
            .with_config_form(config_form)
    }
}

impl Widget for ViewWidget {
    fn render(&self, ctx: &DashboardContext<'_>) -> ViewFragment {
        if self.cfg.view_id.is_empty() {
            return ViewFragment::Placeholder("no view selected".into());
        }
        let Some(view) = ctx.data.view(&self.cfg.view_id) else {
            return ViewFragment::Placeholder("view not found".into());
        };
        let mut items = vec![
            ViewFragment::Heading(view.name.clone()),
            ViewFragment::Stat {
                label: "view".into(),
                value: view.kind.as_str().into(),
            },
        ];
        if self.cfg.show_controls {
            items.push(ViewFragment::Text("filter · sort · group".into()));
        }
        ViewFragment::Column(items)
    }
}

fn config_form(config: &Value) -> ViewFragment {
    let cfg: ViewConfig = decode_value(config);
    ViewFragment::Column(vec![
        ViewFragment::Field(FormField::new(
            "viewId",
            "View",
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
