//! Translation between the opaque persisted string form of widget
//! configuration and the typed shapes widgets work with.
//!
//! Decoding is total: any input, including truncated or mismatched JSON,
//! yields a usable configuration. Fields that fail to parse degrade to the
//! shape's defaults one at a time, so configs written by older builds keep
//! rendering after a shape gains fields. Decode failures are data-quality
//! events, logged and absorbed here, never surfaced to the render path.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};

/// Shallow-merge `updates` over `base`. Non-object updates replace the base
/// wholesale.
pub fn merge_json(base: &Value, updates: &Value) -> Value {
    match (base, updates) {
        (Value::Object(a), Value::Object(b)) => {
            let mut merged = a.clone();
            for (k, v) in b {
                merged.insert(k.clone(), v.clone());
            }
            Value::Object(merged)
        }
        _ => updates.clone(),
    }
}

/// Serialize a config shape's defaults to JSON.
pub fn default_value<C: Serialize + Default>() -> Value {
    serde_json::to_value(C::default()).unwrap_or_else(|_| json!({}))
}

/// Decode an already-parsed JSON value into `C`, backfilling missing fields
/// from `C::default()` and dropping fields that do not validate.
pub fn decode_value<C: DeserializeOwned + Serialize + Default>(raw: &Value) -> C {
    let defaults = default_value::<C>();

    let fields = match raw {
        Value::Object(map) => map,
        _ => {
            if !raw.is_null() {
                tracing::warn!("config is not an object, using defaults");
            }
            return C::default();
        }
    };

    // Fast path: the stored config merged over defaults deserializes whole.
    let candidate = merge_json(&defaults, raw);
    if let Ok(cfg) = serde_json::from_value::<C>(candidate) {
        return cfg;
    }

    // Salvage pass: keep each stored field only if the shape still accepts
    // the accumulated result with it applied.
    let mut accepted = match defaults {
        Value::Object(_) => defaults,
        _ => return C::default(),
    };
    for (key, value) in fields {
        let mut trial = accepted.clone();
        if let Some(map) = trial.as_object_mut() {
            map.insert(key.clone(), value.clone());
        }
        if serde_json::from_value::<C>(trial.clone()).is_ok() {
            accepted = trial;
        } else {
            tracing::warn!(field = %key, "dropping config field that does not match its shape");
        }
    }
    serde_json::from_value(accepted).unwrap_or_default()
}

/// Decode a persisted config string into `C`. Total over all inputs.
pub fn decode_config<C: DeserializeOwned + Serialize + Default>(raw: &str) -> C {
    decode_value(&parse_lenient(raw))
}

/// Untyped variant of [`decode_config`]: merge whatever parses over the
/// supplied defaults. Used where the shape is only known to the descriptor.
pub fn decode_config_value(raw: &str, defaults: &Value) -> Value {
    let parsed = parse_lenient(raw);
    match parsed {
        Value::Object(_) => merge_json(defaults, &parsed),
        _ => defaults.clone(),
    }
}

/// Serialize a config back to its persisted string form. Lossless for every
/// field the shape defines; emits nothing else.
pub fn encode_config<C: Serialize>(config: &C) -> String {
    serde_json::to_string(config).unwrap_or_else(|_| "{}".to_string())
}

fn parse_lenient(raw: &str) -> Value {
    if raw.trim().is_empty() {
        return Value::Null;
    }
    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %err, "malformed persisted config, using defaults");
            Value::Null
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Sample {
        #[serde(default = "default_a")]
        a: i64,
        #[serde(default = "default_b")]
        b: i64,
    }

    fn default_a() -> i64 {
        1
    }

    fn default_b() -> i64 {
        2
    }

    impl Default for Sample {
        fn default() -> Self {
            Self { a: 1, b: 2 }
        }
    }

    #[test]
    fn partial_config_backfills_defaults() {
        let cfg: Sample = decode_config(r#"{"b": 99}"#);
        assert_eq!(cfg, Sample { a: 1, b: 99 });
    }

    #[test]
    fn empty_and_invalid_inputs_yield_defaults() {
        assert_eq!(decode_config::<Sample>(""), Sample::default());
        assert_eq!(decode_config::<Sample>("not json"), Sample::default());
        assert_eq!(decode_config::<Sample>("[1,2]"), Sample::default());
    }

    #[test]
    fn mismatched_field_is_dropped_not_fatal() {
        let cfg: Sample = decode_config(r#"{"a": "oops", "b": 7}"#);
        assert_eq!(cfg, Sample { a: 1, b: 7 });
    }

    #[test]
    fn merge_json_preserves_unknown_fields() {
        let base = json!({"known": 1, "extra": {"keep": true}});
        let updates = json!({"known": 2});
        let merged = merge_json(&base, &updates);
        assert_eq!(merged["known"], json!(2));
        assert_eq!(merged["extra"], json!({"keep": true}));
    }

    #[test]
    fn round_trip_is_lossless() {
        let cfg = Sample { a: 5, b: -3 };
        let decoded: Sample = decode_config(&encode_config(&cfg));
        assert_eq!(decoded, cfg);
    }
}
