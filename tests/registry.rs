use noteboard::view::ViewFragment;
use noteboard::{DashboardContext, Widget, WidgetDescriptor, WidgetRegistry};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Default, Serialize, Deserialize)]
struct EmptyConfig {}

struct Probe;

impl Widget for Probe {
    fn render(&self, _ctx: &DashboardContext<'_>) -> ViewFragment {
        ViewFragment::Empty
    }
}

fn probe(kind: &str, label: &str) -> WidgetDescriptor {
    WidgetDescriptor::new(kind, label, "probe widget", |_: EmptyConfig| Probe)
}

#[test]
fn reregistration_overwrites_and_keeps_one_entry() {
    let mut registry = WidgetRegistry::new();
    registry.register(probe("x", "first"));
    registry.register(probe("x", "second"));

    assert_eq!(registry.get("x").unwrap().label(), "second");
    let kinds = registry.kinds();
    assert_eq!(kinds.iter().filter(|k| **k == "x").count(), 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn lookups_of_unregistered_kinds_are_absent_not_fatal() {
    let registry = WidgetRegistry::new();
    for missing in ["", "nonexistent", "NOTE", "note list", "🦀"] {
        assert!(registry.get(missing).is_none());
        assert!(!registry.contains(missing));
    }
}

#[test]
fn enumeration_matches_registered_set_in_order() {
    let mut registry = WidgetRegistry::new();
    registry.register(probe("c", "C"));
    registry.register(probe("a", "A"));
    registry.register(probe("b", "B"));

    assert_eq!(registry.kinds(), vec!["c", "a", "b"]);
    let labels: Vec<&str> = registry.descriptors().map(|d| d.label()).collect();
    assert_eq!(labels, vec!["C", "A", "B"]);
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatsProbeConfig {
    stat_type: String,
}

impl Default for StatsProbeConfig {
    fn default() -> Self {
        Self {
            stat_type: "note_count".into(),
        }
    }
}

#[test]
fn register_lookup_enumerate_end_to_end() {
    let mut registry = WidgetRegistry::new();
    registry.register(WidgetDescriptor::new(
        "stats",
        "Stats",
        "",
        |_: StatsProbeConfig| Probe,
    ));

    let descriptor = registry.get("stats").expect("registered");
    assert_eq!(descriptor.kind(), "stats");
    assert_eq!(
        descriptor.default_config(),
        json!({"statType": "note_count"})
    );
    assert!(registry.get("nonexistent").is_none());
    assert_eq!(registry.descriptors().count(), 1);
}

#[test]
fn create_falls_back_to_defaults_for_any_config() {
    let mut registry = WidgetRegistry::new();
    registry.register(probe("p", "P"));

    assert!(registry.create("p", &json!(null)).is_some());
    assert!(registry.create("p", &json!({"junk": [1, 2, 3]})).is_some());
    assert!(registry.create("missing", &json!({})).is_none());
}
