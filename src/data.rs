//! In-memory snapshot of workspace content the dashboard renders against.
//! The backing service owns the data; widgets only ever see this read-only
//! view, refreshed by whatever front end drives the dashboard.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Private,
    Workspace,
    Public,
}

impl Default for Visibility {
    fn default() -> Self {
        Visibility::Private
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteEntry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub visibility: Visibility,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    #[serde(default)]
    pub size_bytes: u64,
    pub uploaded_at: DateTime<Utc>,
}

/// Saved view over notes (kanban, calendar, map, flow). Only the reference
/// is rendered here; view internals live elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewEntry {
    pub id: String,
    pub name: String,
    pub kind: ViewKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Kanban,
    Calendar,
    Map,
    Flow,
}

impl ViewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::Kanban => "kanban",
            ViewKind::Calendar => "calendar",
            ViewKind::Map => "map",
            ViewKind::Flow => "flow",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceSnapshot {
    #[serde(default)]
    pub notes: Vec<NoteEntry>,
    #[serde(default)]
    pub files: Vec<FileEntry>,
    #[serde(default)]
    pub views: Vec<ViewEntry>,
    #[serde(default)]
    pub templates: Vec<TemplateEntry>,
}

impl WorkspaceSnapshot {
    /// Load a snapshot from disk. A missing or empty file is an empty
    /// workspace, not an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn note(&self, id: &str) -> Option<&NoteEntry> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn view(&self, id: &str) -> Option<&ViewEntry> {
        self.views.iter().find(|v| v.id == id)
    }

    pub fn template(&self, id: &str) -> Option<&TemplateEntry> {
        self.templates.iter().find(|t| t.id == id)
    }
}
