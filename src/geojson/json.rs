//! Optional-get accessors over `serde_json::Value`. A missing key and a value
//! of the wrong JSON type both read as `None`.

use serde_json::{Map, Value};


pub fn opt_object<'a>(value: &'a Value, key: &str) -> Option<&'a Map<String, Value>> {
    value.get(key)?.as_object()
}

pub fn opt_array<'a>(value: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    value.get(key)?.as_array()
}

pub fn opt_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key)?.as_str()
}

/// Strings are taken verbatim, everything else as compact JSON text.
pub fn to_property_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
