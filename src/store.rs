use crate::instance::WidgetInstance;
use anyhow::{bail, Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Selection criteria for [`WidgetStore::list`]. `page_size == 0` disables
/// pagination.
#[derive(Debug, Clone, Default)]
pub struct WidgetFilter {
    pub workspace_id: Option<String>,
    pub kind: Option<String>,
    /// Case-insensitive substring match over kind and serialized config.
    pub query: Option<String>,
    pub page_size: usize,
    pub page_number: usize,
}

impl WidgetFilter {
    pub fn workspace(workspace_id: &str) -> Self {
        Self {
            workspace_id: Some(workspace_id.to_string()),
            ..Self::default()
        }
    }

    fn matches(&self, instance: &WidgetInstance) -> bool {
        if let Some(ws) = &self.workspace_id {
            if &instance.workspace_id != ws {
                return false;
            }
        }
        if let Some(kind) = &self.kind {
            if &instance.kind != kind {
                return false;
            }
        }
        if let Some(query) = &self.query {
            let q = query.to_lowercase();
            if !instance.kind.to_lowercase().contains(&q)
                && !instance.config.to_lowercase().contains(&q)
            {
                return false;
            }
        }
        true
    }
}

/// Fields that may change on an existing instance. `None` leaves the stored
/// value alone.
#[derive(Debug, Clone, Default)]
pub struct WidgetUpdate {
    pub config: Option<String>,
    pub position: Option<String>,
    pub parent_id: Option<Option<String>>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    widgets: Vec<WidgetInstance>,
}

/// JSON-file-backed collection of widget instances. Every mutation persists
/// the whole file; last write wins, which matches how the dashboard edits
/// widgets one at a time.
pub struct WidgetStore {
    path: PathBuf,
    widgets: Vec<WidgetInstance>,
}

impl WidgetStore {
    /// Open a store, creating an empty one if the file does not exist yet.
    /// A file that exists but fails to parse is an error: silently starting
    /// over would drop user data on the next save.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        let widgets = if content.trim().is_empty() {
            Vec::new()
        } else {
            let file: StoreFile = serde_json::from_str(&content)
                .with_context(|| format!("reading widget store {}", path.display()))?;
            file.widgets
        };
        Ok(Self { path, widgets })
    }

    /// Open the conventional `widgets.json` under a data directory.
    pub fn open_in(dir: impl AsRef<Path>) -> Result<Self> {
        Self::open(dir.as_ref().join("widgets.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = StoreFile {
            widgets: self.widgets.clone(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("writing widget store {}", self.path.display()))?;
        Ok(())
    }

    pub fn create(
        &mut self,
        workspace_id: &str,
        kind: &str,
        config: String,
        position: String,
        parent_id: Option<String>,
    ) -> Result<WidgetInstance> {
        if kind.is_empty() {
            bail!("widget type must not be empty");
        }
        let now = Utc::now();
        let instance = WidgetInstance {
            id: Uuid::new_v4().to_string(),
            workspace_id: workspace_id.to_string(),
            kind: kind.to_string(),
            config,
            position,
            parent_id,
            created_at: now,
            updated_at: now,
        };
        self.widgets.push(instance.clone());
        self.save()?;
        Ok(instance)
    }

    pub fn get(&self, id: &str) -> Option<&WidgetInstance> {
        self.widgets.iter().find(|w| w.id == id)
    }

    pub fn update(&mut self, id: &str, update: WidgetUpdate) -> Result<WidgetInstance> {
        let Some(instance) = self.widgets.iter_mut().find(|w| w.id == id) else {
            bail!("no widget with id {id}");
        };
        if let Some(config) = update.config {
            instance.config = config;
        }
        if let Some(position) = update.position {
            instance.position = position;
        }
        if let Some(parent_id) = update.parent_id {
            instance.parent_id = parent_id;
        }
        instance.updated_at = Utc::now();
        let updated = instance.clone();
        self.save()?;
        Ok(updated)
    }

    /// Remove an instance and, since nesting is single-level, any widgets
    /// parented to it. Returns the number of removed instances; zero means
    /// the id was unknown.
    pub fn delete(&mut self, id: &str) -> Result<usize> {
        let before = self.widgets.len();
        self.widgets
            .retain(|w| w.id != id && w.parent_id.as_deref() != Some(id));
        let removed = before - self.widgets.len();
        if removed > 0 {
            self.save()?;
        }
        Ok(removed)
    }

    pub fn list(&self, filter: &WidgetFilter) -> Vec<&WidgetInstance> {
        let matched = self.widgets.iter().filter(|w| filter.matches(w));
        if filter.page_size == 0 {
            return matched.collect();
        }
        matched
            .skip(filter.page_number.saturating_mul(filter.page_size))
            .take(filter.page_size)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}
