use noteboard::codec::{decode_config, decode_config_value, encode_config};
use noteboard::widgets::{NoteListConfig, NoteSortKey, SortOrder, ToolbarConfig};
use serde_json::json;

#[test]
fn decode_merges_partial_config_over_defaults() {
    let defaults = json!({"a": 1, "b": 2});
    assert_eq!(
        decode_config_value(r#"{"b": 99}"#, &defaults),
        json!({"a": 1, "b": 99})
    );
}

#[test]
fn decode_of_garbage_is_the_defaults_unchanged() {
    let defaults = json!({"a": 1, "b": 2});
    assert_eq!(decode_config_value("", &defaults), defaults);
    assert_eq!(decode_config_value("{\"b\": 99", &defaults), defaults);
    assert_eq!(decode_config_value("[]", &defaults), defaults);
    assert_eq!(decode_config_value("42", &defaults), defaults);
}

#[test]
fn unknown_fields_survive_an_untyped_merge() {
    let defaults = json!({"limit": 5});
    let merged = decode_config_value(r#"{"limit": 9, "futureField": true}"#, &defaults);
    assert_eq!(merged, json!({"limit": 9, "futureField": true}));
}

#[test]
fn typed_round_trip_preserves_every_field() {
    let cfg = NoteListConfig {
        limit: 12,
        sort_by: NoteSortKey::UpdatedAt,
        sort_order: SortOrder::Asc,
    };
    let raw = encode_config(&cfg);
    let back: NoteListConfig = decode_config(&raw);
    assert_eq!(back.limit, 12);
    assert_eq!(back.sort_by, NoteSortKey::UpdatedAt);
    assert_eq!(back.sort_order, SortOrder::Asc);
}

#[test]
fn encoding_emits_only_camel_case_shape_fields() {
    let raw = encode_config(&NoteListConfig::default());
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["limit", "sortBy", "sortOrder"]);
}

#[test]
fn configs_written_by_an_older_shape_still_decode() {
    // sortOrder did not always exist; a stored config without it gets the
    // default while the stored fields are kept
    let cfg: NoteListConfig = decode_config(r#"{"limit": 3, "sortBy": "updated_at"}"#);
    assert_eq!(cfg.limit, 3);
    assert_eq!(cfg.sort_by, NoteSortKey::UpdatedAt);
    assert_eq!(cfg.sort_order, SortOrder::Desc);
}

#[test]
fn mismatched_fields_degrade_individually() {
    let cfg: NoteListConfig = decode_config(r#"{"limit": "lots", "sortBy": "updated_at"}"#);
    assert_eq!(cfg.limit, 5);
    assert_eq!(cfg.sort_by, NoteSortKey::UpdatedAt);
}

#[test]
fn nested_toolbar_decodes_with_partial_flags() {
    let toolbar: ToolbarConfig = decode_config(r#"{"showTable": false}"#);
    assert!(!toolbar.show_table);
    assert!(toolbar.show_bold);
    assert!(toolbar.show_link);
}
