//! # Decoder Core
//!
//! The single abstraction everything else builds on: a [`Decoder<T>`] is a
//! pure function from an untyped [`Value`] to a [`DecodeResult<T>`]. Every
//! combinator in this crate constructs one through [`Decoder::from_fn`] and
//! composes by value — there is no inheritance and no shared mutable state.
//!
//! ## Thread Safety
//!
//! The decode closure is held behind `Arc<dyn Fn + Send + Sync>`, so a
//! `Decoder<T>` is `Send + Sync` and `Clone` is a pointer copy. One decoder
//! instance may be invoked concurrently from any number of threads; a decode
//! call writes nothing outside its own stack.
//!
//! ## Failure Discipline
//!
//! Failure flows as data ([`Reason`]) through `Result`, never as unwinding.
//! The one sanctioned panic in the crate is [`Decoder::decode_or_panic`],
//! and only by explicit caller request.

use std::sync::Arc;

use crate::reason::{DecodeResult, Reason};
use crate::value::Value;

/// A reusable validation-and-transformation rule producing values of type
/// `T`. `T` is the output type, not necessarily the input's shape.
pub struct Decoder<T> {
    run: Arc<dyn Fn(&Value) -> DecodeResult<T> + Send + Sync>,
}

impl<T> Clone for Decoder<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

/// The decode function is opaque; there is nothing more to show.
impl<T> std::fmt::Debug for Decoder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Decoder").finish_non_exhaustive()
    }
}

impl<T: 'static> Decoder<T> {
    /// Wrap a decode function. This is the sole constructor; primitives and
    /// combinators alike are built from it.
    pub fn from_fn(run: impl Fn(&Value) -> DecodeResult<T> + Send + Sync + 'static) -> Self {
        Self { run: Arc::new(run) }
    }

    /// Run the decoder against a value. The primitive operation: every other
    /// entry point is defined in terms of this one.
    pub fn decode(&self, value: &Value) -> DecodeResult<T> {
        (self.run)(value)
    }

    /// Run the decoder against an already-parsed JSON document.
    pub fn decode_json(&self, value: &serde_json::Value) -> DecodeResult<T> {
        self.decode(&Value::from(value.clone()))
    }

    /// Parse `text` as JSON, then decode the resulting tree. A syntax error
    /// is reported as an ordinary [`Reason::Fail`] carrying the parser's
    /// message; this method never panics.
    pub fn decode_str(&self, text: &str) -> DecodeResult<T> {
        match serde_json::from_str::<serde_json::Value>(text) {
            Ok(parsed) => self.decode(&Value::from(parsed)),
            Err(err) => Err(Reason::fail(err.to_string())),
        }
    }

    /// Run the decoder and return the decoded value directly.
    ///
    /// For call sites that have already validated their preconditions and
    /// treat a decode failure as a programming error. Prefer [`Decoder::decode`]
    /// everywhere else.
    ///
    /// # Panics
    ///
    /// Panics on decode failure; the panic message is the machine-oriented
    /// JSON rendering of the failure reason.
    pub fn decode_or_panic(&self, value: &Value) -> T {
        match self.decode(value) {
            Ok(decoded) => decoded,
            Err(reason) => panic!("{}", reason.to_json_string()),
        }
    }

    /// Apply a total function to the decoded value. `f` must not panic; if
    /// the transformation can fail, use [`Decoder::and_then`] with a failing
    /// decoder instead.
    pub fn map<U: 'static>(&self, f: impl Fn(T) -> U + Send + Sync + 'static) -> Decoder<U> {
        let run = Arc::clone(&self.run);
        Decoder::from_fn(move |value| run(value).map(&f))
    }

    /// Data-dependent re-validation. On success, `f` builds a second decoder
    /// from the decoded value, and that decoder is re-run **against the
    /// original input value** — not against the first decoder's output. This
    /// is what makes tag dispatch work: decode the tag field, then pick a
    /// decoder for the whole record and run it over the same record. On
    /// failure, short-circuits with the first failure unchanged.
    pub fn and_then<U: 'static>(
        &self,
        f: impl Fn(T) -> Decoder<U> + Send + Sync + 'static,
    ) -> Decoder<U> {
        let run = Arc::clone(&self.run);
        Decoder::from_fn(move |value| {
            let first = run(value)?;
            f(first).decode(value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{fail, number, string, succeed};
    use serde_json::json;

    #[test]
    fn test_map_transforms_success() {
        let dec = number().map(|n| (n as i64).to_string());
        assert_eq!(dec.decode(&Value::from(42)), Ok("42".to_owned()));
    }

    #[test]
    fn test_map_passes_failure_through_unchanged() {
        let plain = number().decode(&Value::from("str")).unwrap_err();
        let mapped = number().map(|n| n + 1.0).decode(&Value::from("str")).unwrap_err();
        assert_eq!(mapped, plain);
    }

    #[test]
    fn test_and_then_reruns_against_original_input() {
        // The first decoder throws away the string and yields its length;
        // the second still sees the original string value.
        let dec = string()
            .map(|s| s.len())
            .and_then(|len| if len > 0 { string() } else { fail("empty") });
        assert_eq!(dec.decode(&Value::from("hi")), Ok("hi".to_owned()));
    }

    #[test]
    fn test_and_then_short_circuits_on_first_failure() {
        let dec = number().and_then(|_| succeed("unreachable"));
        let reason = dec.decode(&Value::Null).unwrap_err();
        assert_eq!(
            reason,
            Reason::fail("Expected a number, got null instead")
        );
    }

    #[test]
    fn test_and_then_failing_second_decoder() {
        let dec = number().and_then(|n| {
            if n >= 0.0 {
                succeed(n)
            } else {
                fail("negative")
            }
        });
        assert_eq!(dec.decode(&Value::from(1)), Ok(1.0));
        assert_eq!(
            dec.decode(&Value::from(-1)).unwrap_err(),
            Reason::fail("negative")
        );
    }

    #[test]
    fn test_decode_str_parses_then_decodes() {
        assert_eq!(number().decode_str("42"), Ok(42.0));
        assert_eq!(string().decode_str(r#""42""#), Ok("42".to_owned()));
    }

    #[test]
    fn test_decode_str_wraps_parse_errors_as_fail() {
        let reason = number().decode_str("{not json").unwrap_err();
        match reason {
            Reason::Fail { message } => assert!(!message.is_empty()),
            other => panic!("expected Fail, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_str_type_mismatch_after_parse() {
        let reason = number().decode_str(r#""42""#).unwrap_err();
        assert_eq!(
            reason,
            Reason::fail("Expected a number, got \"42\" instead")
        );
    }

    #[test]
    fn test_decode_json_boundary() {
        assert_eq!(number().decode_json(&json!(7)), Ok(7.0));
        assert!(number().decode_json(&json!("7")).is_err());
    }

    #[test]
    fn test_decode_or_panic_returns_value() {
        assert_eq!(number().decode_or_panic(&Value::from(3)), 3.0);
    }

    #[test]
    #[should_panic(expected = "\"type\":\"FAIL\"")]
    fn test_decode_or_panic_panics_with_machine_form() {
        number().decode_or_panic(&Value::Null);
    }

    #[test]
    fn test_decoder_is_reusable_and_cloneable() {
        let dec = number();
        let other = dec.clone();
        assert_eq!(dec.decode(&Value::from(1)), Ok(1.0));
        assert_eq!(other.decode(&Value::from(2)), Ok(2.0));
        assert_eq!(dec.decode(&Value::from(3)), Ok(3.0));
    }

    #[test]
    fn test_decoder_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}
        assert_send_sync(&number());
        assert_send_sync(&string().map(|s| s.len()));
    }
}
