use crate::codec::decode_value;
use crate::dashboard::DashboardContext;
use crate::registry::{Widget, WidgetDescriptor};
use crate::view::{FormControl, FormField, ViewFragment};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Groups other widgets one level deep. Opening a folder composes the
/// dashboard again with this widget's id as the parent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

pub struct FolderWidget {
    cfg: FolderConfig,
}

impl FolderWidget {
    pub fn new(cfg: FolderConfig) -> Self {
        Self { cfg }
    }

    pub fn descriptor() -> WidgetDescriptor {
        WidgetDescriptor::new(
            "folder",
            "Folder",
            "Group widgets into an openable folder",
            FolderWidget::new,
        )
        .with_config_form(config_form)
    }
}

impl Widget for FolderWidget {
    fn render(&self, _ctx: &DashboardContext<'_>) -> ViewFragment {
        let name = if self.cfg.name.is_empty() {
            "Folder"
        } else {
            self.cfg.name.as_str()
        };
        let label = match &self.cfg.icon {
            Some(icon) => format!("{icon} {name}"),
            None => name.to_string(),
        };
        ViewFragment::Heading(label)
    }
}

fn config_form(config: &Value) -> ViewFragment {
    let cfg: FolderConfig = decode_value(config);
    ViewFragment::Column(vec![
        ViewFragment::Field(FormField::new(
            "name",
            "Name",
            FormControl::Text { value: cfg.name },
        )),
        ViewFragment::Field(FormField::new(
            "icon",
            "Icon",
            FormControl::Text {
                value: cfg.icon.unwrap_or_default(),
            },
        )),
    ])
}
