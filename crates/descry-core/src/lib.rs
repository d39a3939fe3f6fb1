//! # descry-core — Decoder Combinators for Dynamic Values
//!
//! Runtime validation and decoding of values of unknown shape, typically
//! parsed from JSON: a [`Decoder<T>`] verifies that an untyped [`Value`]
//! conforms to an expected shape and produces a typed, structurally-verified
//! copy — or a [`Reason`], a structured description of exactly where and why
//! the value does not conform.
//!
//! ## Key Design Principles
//!
//! 1. **One behavioral contract.** Every decoder, whatever it produces, is a
//!    pure function from `&Value` to `Result<T, Reason>`. Combinators are
//!    free functions over that contract, not subclasses; composition is by
//!    value, each combinator returning a new decoder wrapping its inputs.
//!
//! 2. **Failures are data.** A failed decode returns a [`Reason`] whose
//!    nesting mirrors the input's — field names, array indices, and
//!    alternation branches — so callers can pattern-match the exact failure
//!    location. Nothing in the library unwinds except the explicitly
//!    requested [`Decoder::decode_or_panic`].
//!
//! 3. **Field modes are tagged data.** Required / default / optional
//!    behavior lives in a [`FieldMode`] value attached alongside a decoder,
//!    and an [`ObjectDecoder`] exposes its whole field-spec mapping so
//!    schemas compose by data transformation (`merge`, `pick`, `omit`).
//!
//! 4. **Inputs are never mutated.** Decoders borrow the input tree and build
//!    fresh outputs; defaults and mapped elements are materialized in a new
//!    tree.
//!
//! ## Thread Safety
//!
//! `Decoder<T>` is `Send + Sync` and cheap to clone; decoders are
//! constructed once (typically at startup) and may be invoked concurrently
//! from any number of threads, since a decode call holds no shared mutable
//! state.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests, except the single
//!   documented panicking entry point, `decode_or_panic`.
//! - Public data types derive `Debug` and `Clone`; `Reason` additionally
//!   implements `Serialize`/`Deserialize` as the machine-readable boundary.

pub mod collection;
pub mod decoder;
pub mod lazy;
pub mod object;
pub mod one_of;
pub mod primitive;
pub mod reason;
pub mod value;

// Re-export primary types and constructors for ergonomic imports.
pub use collection::{array, dict, tuple1, tuple2, tuple3, tuple4, tuple5, tuple6, tuple7, tuple8};
pub use decoder::Decoder;
pub use lazy::lazy;
pub use object::{object, FieldMode, FieldSpec, Fields, ObjectDecoder};
pub use one_of::one_of;
pub use primitive::{absent, boolean, exactly, fail, null, number, string, succeed, unknown};
pub use reason::{DecodeResult, Reason};
pub use value::Value;
