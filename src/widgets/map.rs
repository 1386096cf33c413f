use crate::codec::decode_value;
use crate::dashboard::DashboardContext;
use crate::data::ViewKind;
use crate::registry::{Widget, WidgetDescriptor};
use crate::view::{FormControl, FormField, ViewFragment};
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    #[serde(default)]
    pub view_id: String,
    #[serde(default = "default_true")]
    pub show_controls: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f64>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            view_id: String::new(),
            show_controls: true,
            zoom: None,
        }
    }
}

pub struct MapWidget {
    cfg: MapConfig,
}

impl MapWidget {
    pub fn new(cfg: MapConfig) -> Self {
        Self { cfg }
    }

    pub fn descriptor() -> WidgetDescriptor {
        WidgetDescriptor::new(
            "map",
            "Map",
            "Show a map view of located notes",
            MapWidget::new,
        )
        .with_config_form(config_form)
    }
}

impl Widget for MapWidget {
    fn render(&self, ctx: &DashboardContext<'_>) -> ViewFragment {
        if self.cfg.view_id.is_empty() {
            return ViewFragment::Placeholder("no view selected".into());
        }
        let Some(view) = ctx.data.view(&self.cfg.view_id) else {
            return ViewFragment::Placeholder("view not found".into());
        };
        if view.kind != ViewKind::Map {
            return ViewFragment::Placeholder(format!("{} is not a map view", view.name));
        }
        let mut items = vec![ViewFragment::Heading(view.name.clone())];
        if let Some(zoom) = self.cfg.zoom {
            items.push(ViewFragment::Stat {
                label: "zoom".into(),
                value: format!("{zoom:.0}"),
            });
        }
        if self.cfg.show_controls {
            items.push(ViewFragment::Text("zoom in · zoom out · locate".into()));
        }
        ViewFragment::Column(items)
    }
}

fn config_form(config: &Value) -> ViewFragment {
    let cfg: MapConfig = decode_value(config);
    ViewFragment::Column(vec![
        ViewFragment::Field(FormField::new(
            "viewId",
            "Map view",
            FormControl::Text { value: cfg.view_id },
        )),
        ViewFragment::Field(FormField::new(
            "showControls",
            "Show controls",
            FormControl::Toggle {
                value: cfg.show_controls,
            },
        )),
        ViewFragment::Field(FormField::new(
            "zoom",
            "Zoom",
            FormControl::Number {
                value: cfg.zoom.unwrap_or(12.0),
                min: Some(1.0),
                max: Some(20.0),
            },
        )),
    ])
}
