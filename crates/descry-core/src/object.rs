//! # Record Decoding
//!
//! Decoders for fixed-key records. A field is declared by pairing a decoder
//! with a [`FieldMode`] — required, required-with-default, or optional — and
//! an [`ObjectDecoder`] carries its declaration-ordered field-spec mapping
//! alongside the decode function, so schemas compose by transforming that
//! mapping (`merge`, `pick`, `omit`) instead of re-declaring every field.
//!
//! ## Field Semantics
//!
//! Presence is decided per declared key, in declaration order:
//!
//! - present → the field decoder runs on the value; an entry holding
//!   [`Value::Absent`] counts as present, so a bound-to-nothing key fails an
//!   ordinary field decoder rather than triggering the absent-key handling;
//! - absent + `Default(v)` → `v` is placed in the output verbatim, with no
//!   decoding — substitution counts as the field being present with exactly
//!   the default value;
//! - absent + `Required` → the decode fails with the missing-field reason;
//! - absent + `Optional` → the key is omitted from the output entirely.
//!
//! Input keys that were never declared pass through to the output unchanged;
//! the decoder is not a whitelist filter. That is what keeps `merge`/`pick`/
//! `omit` predictable: undeclared data survives recomposition.

use std::collections::BTreeMap;

use crate::decoder::Decoder;
use crate::reason::{DecodeResult, Reason};
use crate::value::Value;

/// How a decoder behaves as an object member. Immutable data, attached to a
/// decoder by the field-spec accessors on [`Decoder`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldMode {
    /// The key must be present; absence fails the decode.
    Required,
    /// The key may be absent; if so, this value is substituted verbatim
    /// (never decoded — it is trusted as already the right shape).
    Default(Value),
    /// The key may be absent; if so, it is omitted from the output.
    Optional,
}

/// A field declaration: a mode plus the decoder to run when the key is
/// present.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    mode: FieldMode,
    decoder: Decoder<Value>,
}

impl FieldSpec {
    /// The field's presence mode.
    pub fn mode(&self) -> &FieldMode {
        &self.mode
    }

    /// The decoder run against a present value.
    pub fn decoder(&self) -> &Decoder<Value> {
        &self.decoder
    }
}

/// Field-spec accessors: how any decoder becomes an object member. These are
/// pure — they neither decode nor change the decoder they are called on.
impl<T: Into<Value> + 'static> Decoder<T> {
    /// Declare a mandatory field.
    pub fn required(&self) -> FieldSpec {
        FieldSpec {
            mode: FieldMode::Required,
            decoder: self.map(|decoded| decoded.into()),
        }
    }

    /// Declare a field that may be absent; an absent key is simply left out
    /// of the output. A present value of the wrong shape still fails.
    pub fn optional(&self) -> FieldSpec {
        FieldSpec {
            mode: FieldMode::Optional,
            decoder: self.map(|decoded| decoded.into()),
        }
    }

    /// Declare a mandatory field with a fallback: an absent key yields the
    /// fallback value instead of failing. The fallback is substituted as-is,
    /// without being decoded.
    pub fn default_to(&self, value: impl Into<Value>) -> FieldSpec {
        FieldSpec {
            mode: FieldMode::Default(value.into()),
            decoder: self.map(|decoded| decoded.into()),
        }
    }
}

/// A declaration-ordered `key → FieldSpec` mapping. Order is load-bearing:
/// fields decode (and short-circuit) in declaration order, and composed
/// schemas keep the base declaration's order.
#[derive(Debug, Clone, Default)]
pub struct Fields {
    entries: Vec<(String, FieldSpec)>,
}

impl Fields {
    /// An empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a declaration. Replacing keeps the key's original
    /// position; a new key appends at the end.
    pub fn insert(&mut self, key: impl Into<String>, spec: FieldSpec) {
        let key = key.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = spec,
            None => self.entries.push((key, spec)),
        }
    }

    /// Look up a declaration by key.
    pub fn get(&self, key: &str) -> Option<&FieldSpec> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, spec)| spec)
    }

    /// The declared keys, in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// The declarations, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.entries.iter().map(|(key, spec)| (key.as_str(), spec))
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Combine two mappings: every declaration of `other` is laid over this
    /// one, with `other` winning on key collisions.
    pub fn merge(&self, other: &Fields) -> Fields {
        let mut merged = self.clone();
        for (key, spec) in other.iter() {
            merged.insert(key, spec.clone());
        }
        merged
    }

    /// Keep only the named keys, in this mapping's declaration order.
    /// Unknown names are ignored.
    pub fn pick(&self, keys: &[&str]) -> Fields {
        Fields {
            entries: self
                .entries
                .iter()
                .filter(|(key, _)| keys.contains(&key.as_str()))
                .cloned()
                .collect(),
        }
    }

    /// Drop the named keys, keeping everything else in declaration order.
    pub fn omit(&self, keys: &[&str]) -> Fields {
        Fields {
            entries: self
                .entries
                .iter()
                .filter(|(key, _)| !keys.contains(&key.as_str()))
                .cloned()
                .collect(),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, FieldSpec)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, FieldSpec)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (key, spec) in iter {
            fields.insert(key, spec);
        }
        fields
    }
}

impl IntoIterator for Fields {
    type Item = (String, FieldSpec);
    type IntoIter = std::vec::IntoIter<(String, FieldSpec)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// A record decoder that also carries its field-spec mapping, so derived
/// schemas can be built from it without re-declaring every field.
#[derive(Debug, Clone)]
pub struct ObjectDecoder {
    decoder: Decoder<Value>,
    fields: Fields,
}

/// Decodes a fixed-key record from the given field declarations.
///
/// Accepts anything that iterates into a [`Fields`] mapping — a literal
/// array of `(key, spec)` pairs, or a `Fields` value recomposed from other
/// object decoders. Declaration order is preserved.
pub fn object<K, I>(fields: I) -> ObjectDecoder
where
    K: Into<String>,
    I: IntoIterator<Item = (K, FieldSpec)>,
{
    ObjectDecoder::from_fields(fields.into_iter().collect())
}

impl ObjectDecoder {
    /// Build an object decoder from an explicit field-spec mapping.
    pub fn from_fields(fields: Fields) -> Self {
        let decoder = build_decoder(fields.clone());
        Self { decoder, fields }
    }

    /// The field-spec mapping this decoder was built from.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// The plain decoder view, for handing to combinators that take a
    /// [`Decoder<Value>`].
    pub fn as_decoder(&self) -> &Decoder<Value> {
        &self.decoder
    }

    /// Run the decoder against a value.
    pub fn decode(&self, value: &Value) -> DecodeResult<Value> {
        self.decoder.decode(value)
    }

    /// Run the decoder against an already-parsed JSON document.
    pub fn decode_json(&self, value: &serde_json::Value) -> DecodeResult<Value> {
        self.decoder.decode_json(value)
    }

    /// Parse `text` as JSON, then decode the resulting tree.
    pub fn decode_str(&self, text: &str) -> DecodeResult<Value> {
        self.decoder.decode_str(text)
    }

    /// Run the decoder and return the decoded record directly.
    ///
    /// # Panics
    ///
    /// Panics on decode failure, like [`Decoder::decode_or_panic`].
    pub fn decode_or_panic(&self, value: &Value) -> Value {
        self.decoder.decode_or_panic(value)
    }

    /// A record decoder accepting this record's fields plus `other`'s, with
    /// `other`'s declarations winning on key collisions.
    pub fn merge(&self, other: &ObjectDecoder) -> ObjectDecoder {
        ObjectDecoder::from_fields(self.fields.merge(&other.fields))
    }

    /// A record decoder over just the named fields of this one.
    pub fn pick(&self, keys: &[&str]) -> ObjectDecoder {
        ObjectDecoder::from_fields(self.fields.pick(keys))
    }

    /// A record decoder over this one's fields minus the named ones.
    pub fn omit(&self, keys: &[&str]) -> ObjectDecoder {
        ObjectDecoder::from_fields(self.fields.omit(keys))
    }

    /// Declare this record as a mandatory field of an enclosing record.
    pub fn required(&self) -> FieldSpec {
        self.decoder.required()
    }

    /// Declare this record as an optional field of an enclosing record.
    pub fn optional(&self) -> FieldSpec {
        self.decoder.optional()
    }

    /// Declare this record as a field with a fallback record value.
    pub fn default_to(&self, value: impl Into<Value>) -> FieldSpec {
        self.decoder.default_to(value)
    }
}

impl From<ObjectDecoder> for Decoder<Value> {
    fn from(object: ObjectDecoder) -> Self {
        object.decoder
    }
}

fn build_decoder(fields: Fields) -> Decoder<Value> {
    Decoder::from_fn(move |value| {
        let map = match value {
            Value::Object(map) => map,
            other => return Err(Reason::expected("an object", other)),
        };

        let mut decoded = BTreeMap::new();
        for (name, spec) in fields.iter() {
            match map.get(name) {
                Some(present) => match spec.decoder().decode(present) {
                    Ok(entry) => {
                        decoded.insert(name.to_owned(), entry);
                    }
                    Err(reason) => return Err(Reason::for_field(name, reason)),
                },
                None => match spec.mode() {
                    FieldMode::Required => return Err(Reason::missing_field(name)),
                    FieldMode::Default(fallback) => {
                        decoded.insert(name.to_owned(), fallback.clone());
                    }
                    FieldMode::Optional => {}
                },
            }
        }

        // Undeclared keys survive unchanged.
        for (name, passthrough) in map {
            if fields.get(name).is_none() {
                decoded.insert(name.clone(), passthrough.clone());
            }
        }

        Ok(Value::Object(decoded))
    })
}
