use crate::codec::{decode_value, default_value};
use crate::dashboard::DashboardContext;
use crate::view::ViewFragment;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use indexmap::IndexMap;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Widget behavior behind a descriptor. Rendering is a pure function of the
/// configuration the widget was built from and the workspace snapshot.
pub trait Widget: Send {
    fn render(&self, ctx: &DashboardContext<'_>) -> ViewFragment;
}

/// Produces an editable form fragment for the given configuration value.
/// Edits come back as `(key, value)` pairs merged into the stored config, so
/// the dialog that hosts the form needs no per-widget knowledge.
pub type ConfigFormFn = fn(&Value) -> ViewFragment;

/// Grid-cell bounds used as layout hints. Absent bounds mean unconstrained;
/// the dashboard falls back to a 4x4 placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeHints {
    pub min_width: Option<u32>,
    pub max_width: Option<u32>,
    pub min_height: Option<u32>,
    pub max_height: Option<u32>,
}

impl SizeHints {
    pub fn fixed(width: u32, height: u32) -> Self {
        Self {
            min_width: Some(width),
            max_width: Some(width),
            min_height: Some(height),
            max_height: Some(height),
        }
    }
}

/// Everything the dashboard needs to know about one widget kind: identity,
/// display metadata, defaults, and the build/form capabilities. Immutable
/// once registered.
#[derive(Clone)]
pub struct WidgetDescriptor {
    kind: String,
    label: String,
    description: String,
    ctor: Arc<dyn Fn(&Value) -> Box<dyn Widget> + Send + Sync>,
    default_config: Arc<dyn Fn() -> Value + Send + Sync>,
    config_form: Option<ConfigFormFn>,
    size: SizeHints,
}

impl WidgetDescriptor {
    pub fn new<T, C>(kind: &str, label: &str, description: &str, build: fn(C) -> T) -> Self
    where
        T: Widget + 'static,
        C: DeserializeOwned + Serialize + Default + 'static,
    {
        Self {
            kind: kind.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            ctor: Arc::new(move |value| Box::new(build(decode_value::<C>(value)))),
            default_config: Arc::new(default_value::<C>),
            config_form: None,
            size: SizeHints::default(),
        }
    }

    pub fn with_config_form(mut self, form: ConfigFormFn) -> Self {
        self.config_form = Some(form);
        self
    }

    pub fn with_size(mut self, size: SizeHints) -> Self {
        self.size = size;
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn default_config(&self) -> Value {
        (self.default_config)()
    }

    pub fn size(&self) -> SizeHints {
        self.size
    }

    /// Widgets without a config form are created as-is when picked; there is
    /// nothing for the user to fill in.
    pub fn has_config_form(&self) -> bool {
        self.config_form.is_some()
    }

    pub fn config_form(&self, config: &Value) -> Option<ViewFragment> {
        self.config_form.map(|form| form(config))
    }

    /// Build the widget from a configuration value. Decoding is defensive:
    /// missing or mismatched fields fall back to the shape's defaults.
    pub fn create(&self, config: &Value) -> Box<dyn Widget> {
        (self.ctor)(config)
    }
}

impl std::fmt::Debug for WidgetDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetDescriptor")
            .field("kind", &self.kind)
            .field("label", &self.label)
            .field("has_config_form", &self.config_form.is_some())
            .field("size", &self.size)
            .finish()
    }
}

/// Catalog of widget kinds available to a dashboard. Constructed once at
/// startup and passed by reference to whatever needs it; single ownership
/// plus `&self` reads is the entire concurrency story.
#[derive(Clone, Default)]
pub struct WidgetRegistry {
    map: IndexMap<String, WidgetDescriptor>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the descriptor under its kind. Replacement is
    /// expected during hot-reload style re-registration and is not an error.
    pub fn register(&mut self, descriptor: WidgetDescriptor) {
        let kind = descriptor.kind().to_string();
        if kind.is_empty() {
            tracing::warn!("ignoring widget descriptor with an empty kind");
            return;
        }
        if self.map.contains_key(&kind) {
            tracing::warn!(kind = %kind, "widget kind already registered, overwriting");
        }
        self.map.insert(kind, descriptor);
    }

    pub fn get(&self, kind: &str) -> Option<&WidgetDescriptor> {
        self.map.get(kind)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.map.contains_key(kind)
    }

    /// All descriptors, in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &WidgetDescriptor> {
        self.map.values()
    }

    /// All registered kinds, in registration order.
    pub fn kinds(&self) -> Vec<&str> {
        self.map.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn default_config(&self, kind: &str) -> Option<Value> {
        self.map.get(kind).map(|d| d.default_config())
    }

    pub fn create(&self, kind: &str, config: &Value) -> Option<Box<dyn Widget>> {
        self.map.get(kind).map(|d| d.create(config))
    }

    /// Fuzzy-match descriptors against a picker query, best match first.
    /// An empty query returns everything in registration order.
    pub fn search(&self, query: &str) -> Vec<&WidgetDescriptor> {
        let query = query.trim();
        if query.is_empty() {
            return self.descriptors().collect();
        }
        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, &WidgetDescriptor)> = self
            .map
            .values()
            .filter_map(|d| {
                let score = matcher
                    .fuzzy_match(d.label(), query)
                    .max(matcher.fuzzy_match(d.kind(), query))?;
                Some((score, d))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, d)| d).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct DummyConfig {
        label: Option<String>,
    }

    struct DummyWidget;

    impl Widget for DummyWidget {
        fn render(&self, _ctx: &DashboardContext<'_>) -> ViewFragment {
            ViewFragment::Empty
        }
    }

    fn dummy(kind: &str) -> WidgetDescriptor {
        WidgetDescriptor::new(kind, kind, "", |_: DummyConfig| DummyWidget)
    }

    #[test]
    fn descriptor_reports_config_form() {
        let plain = dummy("a");
        let with_form = dummy("b").with_config_form(|_| ViewFragment::Empty);
        assert!(!plain.has_config_form());
        assert!(with_form.has_config_form());
    }

    #[test]
    fn empty_kind_is_rejected() {
        let mut reg = WidgetRegistry::new();
        reg.register(dummy(""));
        assert!(reg.is_empty());
    }

    #[test]
    fn search_matches_label_and_kind() {
        let mut reg = WidgetRegistry::new();
        reg.register(WidgetDescriptor::new(
            "note_list",
            "Note list",
            "",
            |_: DummyConfig| DummyWidget,
        ));
        reg.register(WidgetDescriptor::new(
            "countdown",
            "Countdown",
            "",
            |_: DummyConfig| DummyWidget,
        ));
        let hits = reg.search("count");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind(), "countdown");
        assert_eq!(reg.search("").len(), 2);
    }
}
