use crate::codec::decode_value;
use crate::dashboard::DashboardContext;
use crate::data::Visibility;
use crate::registry::{Widget, WidgetDescriptor};
use crate::view::{FormControl, FormField, ViewFragment};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatType {
    NoteCount,
    RecentNotes,
    NoteByVisibility,
}

impl Default for StatType {
    fn default() -> Self {
        StatType::NoteCount
    }
}

impl StatType {
    fn as_str(&self) -> &'static str {
        match self {
            StatType::NoteCount => "note_count",
            StatType::RecentNotes => "recent_notes",
            StatType::NoteByVisibility => "note_by_visibility",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsConfig {
    #[serde(default)]
    pub stat_type: StatType,
}

pub struct StatsWidget {
    cfg: StatsConfig,
}

impl StatsWidget {
    pub fn new(cfg: StatsConfig) -> Self {
        Self { cfg }
    }

    pub fn descriptor() -> WidgetDescriptor {
        WidgetDescriptor::new(
            "stats",
            "Stats",
            "Workspace statistics at a glance",
            StatsWidget::new,
        )
        .with_config_form(config_form)
    }
}

impl Widget for StatsWidget {
    fn render(&self, ctx: &DashboardContext<'_>) -> ViewFragment {
        let notes = &ctx.data.notes;
        match self.cfg.stat_type {
            StatType::NoteCount => stat("Total notes", notes.len()),
            StatType::RecentNotes => {
                let cutoff = ctx.now - Duration::days(7);
                let recent = notes.iter().filter(|n| n.created_at > cutoff).count();
                stat("Notes this week", recent)
            }
            StatType::NoteByVisibility => {
                let count = |v: Visibility| notes.iter().filter(|n| n.visibility == v).count();
                ViewFragment::Row(vec![
                    stat("Public", count(Visibility::Public)),
                    stat("Workspace", count(Visibility::Workspace)),
                    stat("Private", count(Visibility::Private)),
                ])
            }
        }
    }
}

fn stat(label: &str, value: usize) -> ViewFragment {
    ViewFragment::Stat {
        label: label.to_string(),
        value: value.to_string(),
    }
}

fn config_form(config: &Value) -> ViewFragment {
    let cfg: StatsConfig = decode_value(config);
    ViewFragment::Column(vec![ViewFragment::Field(FormField::new(
        "statType",
        "Statistic",
        FormControl::Select {
            value: cfg.stat_type.as_str().to_string(),
            options: vec![
                "note_count".to_string(),
                "recent_notes".to_string(),
                "note_by_visibility".to_string(),
            ],
        },
    ))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{NoteEntry, WorkspaceSnapshot};
    use chrono::{TimeZone, Utc};

    fn note(id: &str, day: u32, visibility: Visibility) -> NoteEntry {
        let ts = Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap();
        NoteEntry {
            id: id.into(),
            title: id.into(),
            content: String::new(),
            tags: Vec::new(),
            visibility,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn recent_notes_only_counts_the_last_week() {
        let data = WorkspaceSnapshot {
            notes: vec![
                note("old", 1, Visibility::Private),
                note("fresh", 14, Visibility::Private),
            ],
            ..WorkspaceSnapshot::default()
        };
        let now = Utc.with_ymd_and_hms(2026, 3, 15, 0, 0, 0).unwrap();
        let ctx = DashboardContext::at(&data, now);
        let widget = StatsWidget::new(StatsConfig {
            stat_type: StatType::RecentNotes,
        });
        assert_eq!(
            widget.render(&ctx),
            ViewFragment::Stat {
                label: "Notes this week".into(),
                value: "1".into()
            }
        );
    }

    #[test]
    fn visibility_breakdown_counts_each_bucket() {
        let data = WorkspaceSnapshot {
            notes: vec![
                note("a", 1, Visibility::Public),
                note("b", 2, Visibility::Public),
                note("c", 3, Visibility::Private),
            ],
            ..WorkspaceSnapshot::default()
        };
        let ctx = DashboardContext::at(&data, Utc::now());
        let widget = StatsWidget::new(StatsConfig {
            stat_type: StatType::NoteByVisibility,
        });
        let ViewFragment::Row(cells) = widget.render(&ctx) else {
            panic!("expected a row of stats");
        };
        assert_eq!(cells.len(), 3);
        assert_eq!(
            cells[0],
            ViewFragment::Stat {
                label: "Public".into(),
                value: "2".into()
            }
        );
    }
}
