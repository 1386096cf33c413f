use super::note_shared::note_body;
use crate::codec::decode_value;
use crate::dashboard::DashboardContext;
use crate::registry::{Widget, WidgetDescriptor};
use crate::view::{FormControl, FormField, ViewFragment};
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_true() -> bool {
    true
}

/// Pins one note's complete content to the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteConfig {
    #[serde(default)]
    pub note_id: String,
    #[serde(default = "default_true")]
    pub show_metadata: bool,
}

impl Default for NoteConfig {
    fn default() -> Self {
        Self {
            note_id: String::new(),
            show_metadata: true,
        }
    }
}

pub struct NoteWidget {
    cfg: NoteConfig,
}

impl NoteWidget {
    pub fn new(cfg: NoteConfig) -> Self {
        Self { cfg }
    }

    pub fn descriptor() -> WidgetDescriptor {
        WidgetDescriptor::new(
            "note",
            "Note",
            "Display a single note's complete content",
            NoteWidget::new,
        )
        .with_config_form(config_form)
    }
}

impl Widget for NoteWidget {
    fn render(&self, ctx: &DashboardContext<'_>) -> ViewFragment {
        if self.cfg.note_id.is_empty() {
            return ViewFragment::Placeholder("no note selected".into());
        }
        match ctx.data.note(&self.cfg.note_id) {
            Some(note) => note_body(note, self.cfg.show_metadata),
            None => ViewFragment::Placeholder("note not found".into()),
        }
    }
}

fn config_form(config: &Value) -> ViewFragment {
    let cfg: NoteConfig = decode_value(config);
    ViewFragment::Column(vec![
        ViewFragment::Field(FormField::new(
            "noteId",
            "Note",
            FormControl::Text { value: cfg.note_id },
        )),
        ViewFragment::Field(FormField::new(
            "showMetadata",
            "Show metadata",
            FormControl::Toggle {
                value: cfg.show_metadata,
            },
        )),
    ])
}
