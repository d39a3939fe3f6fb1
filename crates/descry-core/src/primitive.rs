//! # Primitive Decoders
//!
//! Leaf decoders: each checks the runtime kind of the input and either
//! succeeds with the value unchanged or fails with a kind-mismatch message
//! that renders the offending input. Decoders are values; these constructor
//! functions mint fresh instances.

use crate::decoder::Decoder;
use crate::reason::Reason;
use crate::value::Value;

/// Decodes a number.
pub fn number() -> Decoder<f64> {
    Decoder::from_fn(|value| match value {
        Value::Number(n) => Ok(*n),
        other => Err(Reason::expected("a number", other)),
    })
}

/// Decodes a string.
pub fn string() -> Decoder<String> {
    Decoder::from_fn(|value| match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(Reason::expected("a string", other)),
    })
}

/// Decodes a boolean.
pub fn boolean() -> Decoder<bool> {
    Decoder::from_fn(|value| match value {
        Value::Bool(b) => Ok(*b),
        other => Err(Reason::expected("a boolean", other)),
    })
}

/// Decodes the value `null`. Rejects `Absent` — a key bound to nothing is
/// not the same as a key bound to `null`.
pub fn null() -> Decoder<()> {
    Decoder::from_fn(|value| match value {
        Value::Null => Ok(()),
        other => Err(Reason::expected("null", other)),
    })
}

/// Decodes the no-value state [`Value::Absent`]. Rejects `null`.
pub fn absent() -> Decoder<()> {
    Decoder::from_fn(|value| match value {
        Value::Absent => Ok(()),
        other => Err(Reason::expected("nothing", other)),
    })
}

/// Leaves the value as it is without making any assumption about its kind.
/// Never fails. Useful for deferring interpretation of part of a tree.
pub fn unknown() -> Decoder<Value> {
    Decoder::from_fn(|value| Ok(value.clone()))
}

/// Decodes an exact literal value and nothing else. The building block for
/// enum tags, combined with `one_of`:
///
/// `exactly("NONE")` accepts the string `"NONE"` and rejects everything
/// else, rendering the expected literal as JSON in the failure message.
pub fn exactly<T>(literal: T) -> Decoder<T>
where
    T: Into<Value> + Clone + Send + Sync + 'static,
{
    let expected: Value = literal.clone().into();
    Decoder::from_fn(move |value| {
        if *value == expected {
            Ok(literal.clone())
        } else {
            Err(Reason::expected(&expected.to_string(), value))
        }
    })
}

/// A decoder that always succeeds with the given value, ignoring the input.
/// The unit of `and_then` composition.
pub fn succeed<T>(value: T) -> Decoder<T>
where
    T: Clone + Send + Sync + 'static,
{
    Decoder::from_fn(move |_| Ok(value.clone()))
}

/// A decoder that always fails with the given message, ignoring the input.
/// Useful as the fall-through arm of data-dependent dispatch.
pub fn fail<T: 'static>(message: impl Into<String>) -> Decoder<T> {
    let message = message.into();
    Decoder::from_fn(move |_| Err(Reason::fail(message.clone())))
}
