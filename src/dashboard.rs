use crate::codec::decode_config_value;
use crate::data::WorkspaceSnapshot;
use crate::instance::{WidgetInstance, WidgetPosition};
use crate::layout::{clamp_position, sort_reading_order, DEFAULT_GRID_COLS};
use crate::registry::{Widget, WidgetRegistry};
use crate::store::{WidgetFilter, WidgetStore, WidgetUpdate};
use crate::view::ViewFragment;
use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Read-only state shared with widgets at render time.
pub struct DashboardContext<'a> {
    pub data: &'a WorkspaceSnapshot,
    /// Render-time clock, injected so time-dependent widgets stay
    /// deterministic under test.
    pub now: DateTime<Utc>,
}

impl<'a> DashboardContext<'a> {
    pub fn new(data: &'a WorkspaceSnapshot) -> Self {
        Self {
            data,
            now: Utc::now(),
        }
    }

    pub fn at(data: &'a WorkspaceSnapshot, now: DateTime<Utc>) -> Self {
        Self { data, now }
    }
}

/// One rendered dashboard cell, ready for a front end to place and draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardTile {
    pub id: String,
    pub kind: String,
    pub title: String,
    pub position: WidgetPosition,
    pub fragment: ViewFragment,
}

/// Composes persisted widget instances with the registry into rendered
/// tiles, and funnels every mutation (add, edit, move, delete) back through
/// the store.
pub struct Dashboard {
    registry: WidgetRegistry,
    store: WidgetStore,
    grid_cols: u32,
}

impl Dashboard {
    pub fn new(registry: WidgetRegistry, store: WidgetStore) -> Self {
        Self {
            registry,
            store,
            grid_cols: DEFAULT_GRID_COLS,
        }
    }

    pub fn with_grid_cols(mut self, grid_cols: u32) -> Self {
        self.grid_cols = grid_cols.max(1);
        self
    }

    pub fn registry(&self) -> &WidgetRegistry {
        &self.registry
    }

    pub fn store(&self) -> &WidgetStore {
        &self.store
    }

    /// Render every widget of a workspace, root level or inside one folder.
    /// Unknown kinds render as inert placeholders; a dashboard never fails
    /// to compose because of what the store contains.
    pub fn compose(
        &self,
        workspace_id: &str,
        parent: Option<&str>,
        ctx: &DashboardContext<'_>,
    ) -> Vec<DashboardTile> {
        let filter = WidgetFilter::workspace(workspace_id);
        let mut placed: Vec<(WidgetPosition, &WidgetInstance)> = self
            .store
            .list(&filter)
            .into_iter()
            .filter(|w| w.parent_id.as_deref() == parent)
            .map(|w| {
                let hints = self
                    .registry
                    .get(&w.kind)
                    .map(|d| d.size())
                    .unwrap_or_default();
                (clamp_position(w.position(), hints, self.grid_cols), w)
            })
            .collect();
        sort_reading_order(&mut placed);

        placed
            .into_iter()
            .map(|(position, instance)| self.render_tile(instance, position, ctx))
            .collect()
    }

    fn render_tile(
        &self,
        instance: &WidgetInstance,
        position: WidgetPosition,
        ctx: &DashboardContext<'_>,
    ) -> DashboardTile {
        let (title, fragment) = match self.registry.get(&instance.kind) {
            Some(descriptor) => {
                let config = decode_config_value(&instance.config, &descriptor.default_config());
                let widget = descriptor.create(&config);
                (descriptor.label().to_string(), widget.render(ctx))
            }
            None => {
                tracing::warn!(kind = %instance.kind, id = %instance.id, "unknown widget type");
                (
                    instance.kind.clone(),
                    ViewFragment::Placeholder(format!("unknown widget type: {}", instance.kind)),
                )
            }
        };
        DashboardTile {
            id: instance.id.clone(),
            kind: instance.kind.clone(),
            title,
            position,
            fragment,
        }
    }

    /// Place a new widget. With no explicit config the descriptor's defaults
    /// are used, which is the whole creation step for widgets without a
    /// config form.
    pub fn add_widget(
        &mut self,
        workspace_id: &str,
        kind: &str,
        config: Option<Value>,
        parent_id: Option<String>,
    ) -> Result<WidgetInstance> {
        let Some(descriptor) = self.registry.get(kind) else {
            bail!("unknown widget type: {kind}");
        };
        let config = config.unwrap_or_else(|| descriptor.default_config());
        let position = clamp_position(WidgetPosition::default(), descriptor.size(), self.grid_cols);
        self.store.create(
            workspace_id,
            kind,
            serde_json::to_string(&config)?,
            position.encode(),
            parent_id,
        )
    }

    /// Materialize the generic edit dialog for one instance: the
    /// descriptor's form applied to the stored config backfilled with
    /// defaults. `None` when the widget is unknown or has no form.
    pub fn config_form(&self, id: &str) -> Option<ViewFragment> {
        let instance = self.store.get(id)?;
        let descriptor = self.registry.get(&instance.kind)?;
        let config = decode_config_value(&instance.config, &descriptor.default_config());
        descriptor.config_form(&config)
    }

    /// Apply edited form fields to a widget's config and persist. Unknown
    /// keys are merged as-is; the decode contract drops them again if the
    /// shape never learns them.
    pub fn update_widget_config(
        &mut self,
        id: &str,
        changes: &[(String, Value)],
    ) -> Result<WidgetInstance> {
        let Some(instance) = self.store.get(id) else {
            bail!("no widget with id {id}");
        };
        let defaults = self
            .registry
            .default_config(&instance.kind)
            .unwrap_or_else(|| Value::Object(Default::default()));
        let mut config = decode_config_value(&instance.config, &defaults);
        if let Some(map) = config.as_object_mut() {
            for (key, value) in changes {
                map.insert(key.clone(), value.clone());
            }
        }
        self.store.update(
            id,
            WidgetUpdate {
                config: Some(serde_json::to_string(&config)?),
                ..WidgetUpdate::default()
            },
        )
    }

    /// Persist a drag/resize, clamped to the widget's size hints.
    pub fn move_widget(&mut self, id: &str, position: WidgetPosition) -> Result<WidgetInstance> {
        let Some(instance) = self.store.get(id) else {
            bail!("no widget with id {id}");
        };
        let hints = self
            .registry
            .get(&instance.kind)
            .map(|d| d.size())
            .unwrap_or_default();
        let clamped = clamp_position(position, hints, self.grid_cols);
        self.store.update(
            id,
            WidgetUpdate {
                position: Some(clamped.encode()),
                ..WidgetUpdate::default()
            },
        )
    }

    /// Delete a widget (and its folder children). Returns false when the id
    /// was already gone.
    pub fn remove_widget(&mut self, id: &str) -> Result<bool> {
        Ok(self.store.delete(id)? > 0)
    }
}
