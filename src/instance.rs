use crate::codec::{decode_config, encode_config};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_span() -> u32 {
    4
}

/// Grid placement of one widget, persisted as an opaque JSON string on the
/// instance. Cell units match the dashboard grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetPosition {
    #[serde(default)]
    pub x: u32,
    #[serde(default)]
    pub y: u32,
    #[serde(default = "default_span")]
    pub width: u32,
    #[serde(default = "default_span")]
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_height: Option<u32>,
}

impl Default for WidgetPosition {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: default_span(),
            height: default_span(),
            max_width: None,
            max_height: None,
        }
    }
}

impl WidgetPosition {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            max_width: None,
            max_height: None,
        }
    }

    /// Decode a persisted position string. Malformed input falls back to the
    /// default 4x4 placement at the origin.
    pub fn decode(raw: &str) -> Self {
        decode_config(raw)
    }

    pub fn encode(&self) -> String {
        encode_config(self)
    }
}

/// One placed widget on a dashboard. Owned by the store; `config` and
/// `position` stay serialized until a descriptor decodes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetInstance {
    pub id: String,
    pub workspace_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub config: String,
    #[serde(default)]
    pub position: String,
    /// Parent folder widget, if any. Nesting is single-level by construction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WidgetInstance {
    pub fn position(&self) -> WidgetPosition {
        WidgetPosition::decode(&self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_decode_falls_back_to_four_by_four() {
        let pos = WidgetPosition::decode("");
        assert_eq!(pos, WidgetPosition::new(0, 0, 4, 4));
        let pos = WidgetPosition::decode("{broken");
        assert_eq!(pos.width, 4);
        assert_eq!(pos.height, 4);
    }

    #[test]
    fn position_decode_keeps_partial_fields() {
        let pos = WidgetPosition::decode(r#"{"x": 2, "width": 6}"#);
        assert_eq!(pos.x, 2);
        assert_eq!(pos.y, 0);
        assert_eq!(pos.width, 6);
        assert_eq!(pos.height, 4);
    }

    #[test]
    fn position_round_trips() {
        let pos = WidgetPosition {
            x: 1,
            y: 2,
            width: 3,
            height: 4,
            max_width: Some(8),
            max_height: None,
        };
        assert_eq!(WidgetPosition::decode(&pos.encode()), pos);
    }

    #[test]
    fn instance_wire_shape_uses_type_key() {
        let json = r#"{
            "id": "w1",
            "workspace_id": "ws1",
            "type": "stats",
            "config": "{}",
            "position": "",
            "created_at": "2026-01-01T00:00:00Z",
            "updated_at": "2026-01-01T00:00:00Z"
        }"#;
        let inst: WidgetInstance = serde_json::from_str(json).unwrap();
        assert_eq!(inst.kind, "stats");
        assert_eq!(inst.parent_id, None);
        assert_eq!(inst.position().width, 4);
    }
}
