//! # Failure Reasons
//!
//! The structured description of why a decode failed. A `Reason` mirrors the
//! shape of the input being validated — field names, array indices, and
//! alternation branches nest the same way the input does — so the exact
//! failure location can be reconstructed without string parsing.
//!
//! ## Invariant
//!
//! Every combinator that delegates to a sub-decoder wraps the sub-decoder's
//! failure in the locating variant for its position (`ArrayAt`, `FieldType`,
//! `MissingField`). No reason is summarized, truncated, or dropped on the way
//! out; `OneOf` carries one reason per attempted branch, in attempt order.
//!
//! ## Renderings
//!
//! A `Reason` is plain data and callers are expected to match on it. Three
//! renderings exist, none privileged: `Display` (a compact one-line message
//! that still spells out the path, for `std::error::Error` integration),
//! [`Reason::to_json_string`] (the machine form: the value serialized
//! directly, internally tagged), and the indented tree form provided by the
//! `descry-render` crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value::Value;

/// Outcome of a decode call. `Err` carries the structured failure cause.
pub type DecodeResult<T> = Result<T, Reason>;

/// Why a decode failed, structured to mirror the input's nesting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reason {
    /// Leaf failure with a human-readable message. Produced by primitives,
    /// by the tuple/array shape checks, and by malformed input text.
    #[error("{message}")]
    Fail {
        /// What went wrong, e.g. `Expected a number, got "42" instead`.
        message: String,
    },

    /// Every branch of an alternation failed; one reason per branch, in
    /// attempt order.
    #[error("none of {} alternatives matched", .reasons.len())]
    OneOf {
        /// The failure of each attempted alternative.
        reasons: Vec<Reason>,
    },

    /// The element at `index` failed to decode.
    #[serde(rename = "ARRAY")]
    #[error("invalid element at index {index}: {reason}")]
    ArrayAt {
        /// Zero-based position of the failing element.
        index: usize,
        /// Why that element failed.
        reason: Box<Reason>,
    },

    /// A required field with no default was absent from the input.
    #[error("missing required field `{field}`")]
    MissingField {
        /// The declared field name.
        field: String,
    },

    /// The value present at `field` failed its field decoder.
    #[error("invalid value for field `{field}`: {reason}")]
    FieldType {
        /// The field name, declared or (for dicts) taken from the input.
        field: String,
        /// Why the field's value failed.
        reason: Box<Reason>,
    },
}

impl Reason {
    /// Leaf failure.
    pub fn fail(message: impl Into<String>) -> Self {
        Reason::Fail {
            message: message.into(),
        }
    }

    /// Leaf failure for a kind mismatch, with the offending input rendered
    /// into the message: `Expected <kind>, got <input> instead`.
    pub fn expected(kind: &str, got: &Value) -> Self {
        Reason::fail(format!("Expected {kind}, got {got} instead"))
    }

    /// All-branches-failed alternation failure.
    pub fn one_of(reasons: Vec<Reason>) -> Self {
        Reason::OneOf { reasons }
    }

    /// Element failure located at an array/tuple index.
    pub fn at_index(index: usize, reason: Reason) -> Self {
        Reason::ArrayAt {
            index,
            reason: Box::new(reason),
        }
    }

    /// Required-field-absent failure.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Reason::MissingField {
            field: field.into(),
        }
    }

    /// Field-value failure located at a field name.
    pub fn for_field(field: impl Into<String>, reason: Reason) -> Self {
        Reason::FieldType {
            field: field.into(),
            reason: Box::new(reason),
        }
    }

    /// The machine-oriented rendering: this value serialized directly as
    /// JSON, with a `type` discriminant per variant. Falls back to the
    /// `Display` form if serialization ever fails (it has no failing path
    /// for this type; the fallback keeps the signature honest).
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_spells_out_the_path() {
        let reason = Reason::for_field(
            "points",
            Reason::at_index(2, Reason::fail("Expected a number, got \"x\" instead")),
        );
        assert_eq!(
            reason.to_string(),
            "invalid value for field `points`: invalid element at index 2: \
             Expected a number, got \"x\" instead"
        );
    }

    #[test]
    fn test_display_missing_field() {
        assert_eq!(
            Reason::missing_field("id").to_string(),
            "missing required field `id`"
        );
    }

    #[test]
    fn test_display_one_of_counts_branches() {
        let reason = Reason::one_of(vec![Reason::fail("a"), Reason::fail("b")]);
        assert_eq!(reason.to_string(), "none of 2 alternatives matched");
    }

    #[test]
    fn test_machine_form_is_internally_tagged() {
        let reason = Reason::at_index(4, Reason::fail("err"));
        let json: serde_json::Value = serde_json::from_str(&reason.to_json_string()).unwrap();
        assert_eq!(json["type"], "ARRAY");
        assert_eq!(json["index"], 4);
        assert_eq!(json["reason"]["type"], "FAIL");
        assert_eq!(json["reason"]["message"], "err");
    }

    #[test]
    fn test_machine_form_tag_vocabulary() {
        let cases = [
            (Reason::fail("m"), "FAIL"),
            (Reason::one_of(vec![]), "ONE_OF"),
            (Reason::at_index(0, Reason::fail("m")), "ARRAY"),
            (Reason::missing_field("f"), "MISSING_FIELD"),
            (Reason::for_field("f", Reason::fail("m")), "FIELD_TYPE"),
        ];
        for (reason, tag) in cases {
            let json: serde_json::Value =
                serde_json::from_str(&reason.to_json_string()).unwrap();
            assert_eq!(json["type"], tag, "wrong tag for {reason:?}");
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let reason = Reason::one_of(vec![
            Reason::fail("Expected a string, got 1.0 instead"),
            Reason::for_field("x", Reason::missing_field("y")),
        ]);
        let text = serde_json::to_string(&reason).unwrap();
        let back: Reason = serde_json::from_str(&text).unwrap();
        assert_eq!(back, reason);
    }
}
