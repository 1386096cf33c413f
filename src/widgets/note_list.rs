use super::note_shared::{note_line, NoteSortKey, SortOrder};
use crate::codec::decode_value;
use crate::dashboard::DashboardContext;
use crate::data::NoteEntry;
use crate::registry::{Widget, WidgetDescriptor};
use crate::view::{FormControl, FormField, ViewFragment};
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_limit() -> usize {
    5
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteListConfig {
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub sort_by: NoteSortKey,
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl Default for NoteListConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            sort_by: NoteSortKey::CreatedAt,
            sort_order: SortOrder::Desc,
        }
    }
}

pub struct NoteListWidget {
    cfg: NoteListConfig,
}

impl NoteListWidget {
    pub fn new(cfg: NoteListConfig) -> Self {
        Self { cfg }
    }

    pub fn descriptor() -> WidgetDescriptor {
        WidgetDescriptor::new(
            "note_list",
            "Note list",
            "List notes sorted by age",
            NoteListWidget::new,
        )
        .with_config_form(config_form)
    }

    fn sorted<'a>(&self, notes: &'a [NoteEntry]) -> Vec<&'a NoteEntry> {
        let mut sorted: Vec<&NoteEntry> = notes.iter().collect();
        sorted.sort_by_key(|n| self.cfg.sort_by.timestamp(n));
        if self.cfg.sort_order == SortOrder::Desc {
            sorted.reverse();
        }
        sorted.truncate(self.cfg.limit.max(1));
        sorted
    }
}

impl Widget for NoteListWidget {
    fn render(&self, ctx: &DashboardContext<'_>) -> ViewFragment {
        if ctx.data.notes.is_empty() {
            return ViewFragment::Placeholder("no notes yet".into());
        }
        let mut items = vec![ViewFragment::Heading("Notes".into())];
        for note in self.sorted(&ctx.data.notes) {
            items.push(note_line(note, self.cfg.sort_by.timestamp(note)));
        }
        ViewFragment::Column(items)
    }
}

fn config_form(config: &Value) -> ViewFragment {
    let cfg: NoteListConfig = decode_value(config);
    ViewFragment::Column(vec![
        ViewFragment::Field(FormField::new(
            "limit",
            "Notes to show",
            FormControl::Number {
                value: cfg.limit as f64,
                min: Some(1.0),
                max: Some(50.0),
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
        ViewFragment::Field(FormField::new(
            "sortOrder",
            "Order",
            FormControl::Select {
                value: match cfg.sort_order {
                    SortOrder::Asc => "asc".to_string(),
                    SortOrder::Desc => "desc".to_string(),
                },
                options: vec!["asc".to_string(), "desc".to_string()],
            },
        )),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn note(id: &str, day: u32) -> NoteEntry {
        let ts = Utc.with_ymd_and_hms(2026, 1, day, 0, 0, 0).unwrap();
        NoteEntry {
            id: id.into(),
            title: id.into(),
            content: String::new(),
            tags: Vec::new(),
            visibility: Default::default(),
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn newest_first_and_limited() {
        let notes = vec![note("a", 1), note("b", 3), note("c", 2)];
        let widget = NoteListWidget::new(NoteListConfig {
            limit: 2,
            ..NoteListConfig::default()
        });
        let sorted = widget.sorted(&notes);
        let ids: Vec<&str> = sorted.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[test]
    fn ascending_order_flips_the_list() {
        let notes = vec![note("a", 1), note("b", 3)];
        let widget = NoteListWidget::new(NoteListConfig {
            sort_order: SortOrder::Asc,
            ..NoteListConfig::default()
        });
        let ids: Vec<&str> = widget.sorted(&notes).iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
