//! Recursive JSON value tree for tool payloads.
//!
//! Tool inputs and outputs are arbitrary JSON shipped by the agent. They are
//! modeled as an explicit sum type so consumers traverse them with structural
//! matching instead of runtime type tests, and so a transform can rebuild the
//! exact shape it was given.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An arbitrary JSON value carried inside a transcript entry.
///
/// `Number` wraps [`serde_json::Number`] so integer/float fidelity survives a
/// deserialize/transform/serialize round trip. Object keys are kept in a
/// `BTreeMap`; key order is not significant in the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Array(Vec<JsonValue>),
    Object(BTreeMap<String, JsonValue>),
}

impl JsonValue {
    /// Returns the string slice if this is a `String` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the element list if this is an `Array` value.
    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the key/value map if this is an `Object` value.
    pub fn as_object(&self) -> Option<&BTreeMap<String, JsonValue>> {
        match self {
            JsonValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }
}

impl Default for JsonValue {
    fn default() -> Self {
        JsonValue::Null
    }
}

impl From<&str> for JsonValue {
    fn from(s: &str) -> Self {
        JsonValue::String(s.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(s: String) -> Self {
        JsonValue::String(s)
    }
}

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        JsonValue::Bool(b)
    }
}

impl From<i64> for JsonValue {
    fn from(n: i64) -> Self {
        JsonValue::Number(serde_json::Number::from(n))
    }
}
