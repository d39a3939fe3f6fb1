//! # Dynamic Value Tree
//!
//! The untyped input that decoders run against: a tree of numbers, strings,
//! booleans, `null`, `absent`, arrays, and string-keyed objects.
//!
//! This is deliberately not `serde_json::Value`. The decoding semantics
//! distinguish three states for an object member — present with a value,
//! present with *no* value (`Absent`), and missing entirely — and JSON's
//! value model collapses the first two. `Absent` is a first-class tree node
//! here; the conversion from `serde_json::Value` never produces it, but
//! hand-built trees and object entries may carry it.
//!
//! ## Number Model
//!
//! Numbers are `f64`, matching the dynamic-language number model this tree
//! mirrors. Conversion from `serde_json` integers is lossy above 2^53.
//!
//! ## Immutability
//!
//! Decoders receive `&Value` and construct fresh outputs. The input tree is
//! never mutated on any decode path.

use std::collections::BTreeMap;
use std::fmt;

/// A dynamic value of unknown shape, as produced by parsing JSON text or by
/// building a tree by hand.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The JSON `null` value.
    Null,
    /// No value at all: a key bound to nothing. Distinct from `Null`.
    Absent,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(f64),
    /// A string.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// A string-keyed mapping. Key order is not significant.
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Returns true for `Value::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for `Value::Absent`.
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// The boolean payload, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The numeric payload, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The element slice, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The key/value map, if this is an object.
    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Member lookup on an object. Returns `None` for missing keys and for
    /// non-object values alike.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }
}

/// Conversion at the input boundary: any parsed JSON document becomes a
/// decodable tree. Never produces `Absent`.
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, entry)| (key, Value::from(entry)))
                    .collect(),
            ),
        }
    }
}

/// Conversion at the rendering/interop boundary. `Absent` and non-finite
/// numbers serialize as `null`, the closest JSON can come.
impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null | Value::Absent => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(key, entry)| (key.clone(), serde_json::Value::from(entry)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        serde_json::Value::from(&value)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Object(map)
    }
}

macro_rules! value_from_number {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }
        )+
    };
}

value_from_number!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64);

/// Compact JSON text of the value, used verbatim inside failure messages.
/// A top-level `Absent` renders as the word `nothing`; nested `Absent`
/// entries follow the serialization rule and appear as `null`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => f.write_str("nothing"),
            other => {
                let json = serde_json::Value::from(other);
                match serde_json::to_string(&json) {
                    Ok(text) => f.write_str(&text),
                    Err(_) => f.write_str("<unprintable>"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_covers_every_variant() {
        let parsed = Value::from(json!({
            "null": null,
            "flag": true,
            "count": 3,
            "name": "descry",
            "items": [1, "two"],
            "inner": {"x": 0}
        }));

        assert!(parsed.get("null").unwrap().is_null());
        assert_eq!(parsed.get("flag").unwrap().as_bool(), Some(true));
        assert_eq!(parsed.get("count").unwrap().as_f64(), Some(3.0));
        assert_eq!(parsed.get("name").unwrap().as_str(), Some("descry"));
        assert_eq!(parsed.get("items").unwrap().as_array().unwrap().len(), 2);
        assert_eq!(
            parsed.get("inner").unwrap().get("x").unwrap().as_f64(),
            Some(0.0)
        );
    }

    #[test]
    fn test_from_json_never_produces_absent() {
        let parsed = Value::from(json!({"x": null, "y": [null]}));
        assert!(parsed.get("x").unwrap().is_null());
        assert!(!parsed.get("x").unwrap().is_absent());
        assert_eq!(parsed.get("y").unwrap().as_array().unwrap()[0], Value::Null);
    }

    #[test]
    fn test_null_and_absent_are_distinct() {
        assert_ne!(Value::Null, Value::Absent);
        assert!(Value::Absent.is_absent());
        assert!(!Value::Absent.is_null());
    }

    #[test]
    fn test_display_is_compact_json() {
        let value = Value::from(json!({"b": [1, "x"], "a": true}));
        assert_eq!(value.to_string(), r#"{"a":true,"b":[1.0,"x"]}"#);
        assert_eq!(Value::from("str").to_string(), r#""str""#);
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn test_display_absent_renders_as_nothing() {
        assert_eq!(Value::Absent.to_string(), "nothing");
    }

    #[test]
    fn test_nested_absent_serializes_as_null() {
        let mut map = BTreeMap::new();
        map.insert("x".to_owned(), Value::Absent);
        let json = serde_json::Value::from(Value::Object(map));
        assert_eq!(json, json!({"x": null}));
    }

    #[test]
    fn test_non_finite_number_serializes_as_null() {
        let json = serde_json::Value::from(Value::Number(f64::NAN));
        assert_eq!(json, json!(null));
    }

    #[test]
    fn test_get_on_non_object_is_none() {
        assert!(Value::Null.get("x").is_none());
        assert!(Value::from(vec![Value::Null]).get("0").is_none());
    }

    #[test]
    fn test_leaf_conversions() {
        assert_eq!(Value::from(1i32), Value::Number(1.0));
        assert_eq!(Value::from(1u64), Value::Number(1.0));
        assert_eq!(Value::from(1.5f64), Value::Number(1.5));
        assert_eq!(Value::from(()), Value::Null);
        assert_eq!(Value::from("s"), Value::String("s".to_owned()));
    }
}
