//! # Deferred Construction
//!
//! `lazy` breaks construction-order cycles for recursive schemas: a decoder
//! can reference itself (directly or through mutual recursion) before its
//! own definition has finished being built.

use crate::decoder::Decoder;

/// Defers building the target decoder until decode time.
///
/// The supplier is invoked afresh on every decode call and its result is
/// never cached, so it must be side-effect-free and idempotent — in
/// practice, a plain function that constructs a decoder. Termination is the
/// schema author's responsibility: recursion bottoms out when the input
/// does.
pub fn lazy<T: 'static>(
    supplier: impl Fn() -> Decoder<T> + Send + Sync + 'static,
) -> Decoder<T> {
    Decoder::from_fn(move |value| supplier().decode(value))
}
