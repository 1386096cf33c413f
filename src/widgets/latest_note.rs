use super::note_shared::{note_body, NoteSortKey};
use crate::codec::decode_value;
use crate::dashboard::DashboardContext;
use crate::registry::{Widget, WidgetDescriptor};
use crate::view::{FormControl, FormField, ViewFragment};
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_true() -> bool {
    true
}

/// Shows whichever note was most recently created (or updated).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestNoteConfig {
    #[serde(default = "default_true")]
    pub show_metadata: bool,
    #[serde(default)]
    pub sort_by: NoteSortKey,
}

impl Default for LatestNoteConfig {
    fn default() -> Self {
        Self {
            show_metadata: true,
            sort_by: NoteSortKey::CreatedAt,
        }
    }
}

pub struct LatestNoteWidget {
    cfg: LatestNoteConfig,
}

impl LatestNoteWidget {
    pub fn new(cfg: LatestNoteConfig) -> Self {
        Self { cfg }
    }

    pub fn descriptor() -> WidgetDescriptor {
        WidgetDescriptor::new(
            "latest_note",
            "Latest note",
            "Display the most recent note",
            LatestNoteWidget::new,
        )
        .with_config_form(config_form)
    }
}

impl Widget for LatestNoteWidget {
    fn render(&self, ctx: &DashboardContext<'_>) -> ViewFragment {
        let latest = ctx
            .data
            .notes
            .iter()
            .max_by_key(|n| self.cfg.sort_by.timestamp(n));
        match latest {
            Some(note) => note_body(note, self.cfg.show_metadata),
            None => ViewFragment::Placeholder("no notes yet".into()),
        }
    }
}

fn config_form(config: &Value) -> ViewFragment {
    let cfg: LatestNoteConfig = decode_value(config);
    ViewFragment::Column(vec![
        ViewFragment::Field(FormField::new(
            "showMetadata",
            "Show metadata",
            FormControl::Toggle {
                value: cfg.show_metadata,
            },
        )),
        ViewFragment::Field(FormField::new(
            "sortBy",
            "Sort by",
            FormControl::Select {
                value: cfg.sort_by.as_str().to_string(),
                options: NoteSortKey::options(),
            },
        )),
    ])
}
