//! Helpers shared by the note-displaying widgets.

use crate::data::NoteEntry;
use crate::view::ViewFragment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteSortKey {
    CreatedAt,
    UpdatedAt,
}

impl Default for NoteSortKey {
    fn default() -> Self {
        NoteSortKey::CreatedAt
    }
}

impl NoteSortKey {
    pub fn timestamp(&self, note: &NoteEntry) -> DateTime<Utc> {
        match self {
            NoteSortKey::CreatedAt => note.created_at,
            NoteSortKey::UpdatedAt => note.updated_at,
        }
    }

    pub fn options() -> Vec<String> {
        vec!["created_at".to_string(), "updated_at".to_string()]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NoteSortKey::CreatedAt => "created_at",
            NoteSortKey::UpdatedAt => "updated_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Desc
    }
}

/// Full note body: heading, content, optional metadata line.
pub fn note_body(note: &NoteEntry, show_metadata: bool) -> ViewFragment {
    let mut items = vec![
        ViewFragment::Heading(note.title.clone()),
        ViewFragment::Text(note.content.clone()),
    ];
    if show_metadata {
        items.push(ViewFragment::Text(format!(
            "created {} · updated {}",
            note.created_at.format("%Y-%m-%d"),
            note.updated_at.format("%Y-%m-%d"),
        )));
    }
    ViewFragment::Column(items)
}

/// One-line listing entry for a note.
pub fn note_line(note: &NoteEntry, timestamp: DateTime<Utc>) -> ViewFragment {
    ViewFragment::Row(vec![
        ViewFragment::Text(note.title.clone()),
        ViewFragment::Text(timestamp.format("%Y-%m-%d").to_string()),
    ])
}
