//! Lenient request input: any content type, any JSON shape, any id text.
//!
//! Record routes never reject a request up front. A body that is not a JSON
//! object reads as empty, and an id that is not a valid row id matches no row.

use axum::body::Bytes;
use campus_core::domain::RecordId;
use serde_json::{Map, Value};

/// Top-level JSON object of `body`, or an empty map for anything else.
pub fn json_fields(body: &Bytes) -> Map<String, Value> {
    match serde_json::from_slice(body) {
        Ok(Value::Object(fields)) => fields,
        _ => Map::new(),
    }
}

/// Field as text. Scalars are stringified, `null` and absent fields are `None`.
pub fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// `None` for text that cannot name a row (non-numeric or out of range).
pub fn parse_record_id(raw: &str) -> Option<RecordId> {
    raw.parse().ok()
}
