//! Payload Normalization
//!
//! Turns an arbitrary decoded feed payload into a well-formed record list.

use serde_json::Value;

use crate::domain::entities::CallRecord;
use crate::domain::errors::PayloadError;

/// Key under which the feed may wrap its record array.
const COLLECTION_KEY: &str = "data";

/// Extract call records from a decoded payload, leniently.
///
/// Accepts a bare array or an object wrapping one under `data`. Any other
/// shape yields an empty list, and individual elements that are not objects
/// fall back to an all-default record. Shape problems are logged, never
/// raised.
pub fn extract_records(payload: &Value) -> Vec<CallRecord> {
    match collection(payload) {
        Some(items) => items.iter().map(normalize_record).collect(),
        None => {
            tracing::warn!(
                shape = json_type_name(payload),
                "unrecognized feed payload shape, treating as empty"
            );
            Vec::new()
        }
    }
}

/// Strict variant of [`extract_records`]: report the exact shape violation
/// instead of degrading to an empty list.
pub fn try_extract_records(payload: &Value) -> Result<Vec<CallRecord>, PayloadError> {
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(map) => match map.get(COLLECTION_KEY) {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(PayloadError::MissingCollection {
                    key: COLLECTION_KEY,
                })
            }
        },
        other => {
            return Err(PayloadError::UnsupportedShape {
                found: json_type_name(other),
            })
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if item.is_object() {
                Ok(normalize_record(item))
            } else {
                Err(PayloadError::NotAnObject {
                    index,
                    found: json_type_name(item),
                })
            }
        })
        .collect()
}

fn collection(payload: &Value) -> Option<&Vec<Value>> {
    match payload {
        Value::Array(items) => Some(items),
        Value::Object(map) => match map.get(COLLECTION_KEY) {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        },
        _ => None,
    }
}

/// Decode one record, defaulting every missing or mistyped field.
fn normalize_record(item: &Value) -> CallRecord {
    serde_json::from_value(item.clone()).unwrap_or_default()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
