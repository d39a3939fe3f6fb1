//! # Ordered Alternation
//!
//! First-match-wins trial of several decoders against the same input.

use crate::decoder::Decoder;
use crate::reason::Reason;

/// Tries each decoder against the same original input, in order, returning
/// the first success verbatim. Decoders after the first success are never
/// run. If every branch fails, the failure is [`Reason::OneOf`] carrying one
/// reason per attempted branch, in attempt order — nothing is discarded.
///
/// All branches share one output type; branches with different natural
/// outputs unify through [`Decoder::map`] (typically into an enum or
/// `Option`). An empty branch list always fails.
pub fn one_of<T: 'static>(decoders: impl IntoIterator<Item = Decoder<T>>) -> Decoder<T> {
    let decoders: Vec<Decoder<T>> = decoders.into_iter().collect();
    Decoder::from_fn(move |value| {
        let mut reasons = Vec::with_capacity(decoders.len());
        for decoder in &decoders {
            match decoder.decode(value) {
                Ok(decoded) => return Ok(decoded),
                Err(reason) => reasons.push(reason),
            }
        }
        Err(Reason::one_of(reasons))
    })
}
