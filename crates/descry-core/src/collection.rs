//! # Collection Combinators
//!
//! Decoders over sequences and string-keyed maps: homogeneous arrays,
//! fixed-arity heterogeneous tuples, and dicts (maps with statically unknown
//! keys). Each delegates per element and wraps a child failure in the
//! locating variant for its position, so failure paths stay reconstructable.

use std::collections::BTreeMap;

use crate::decoder::Decoder;
use crate::reason::Reason;
use crate::value::Value;

/// Decodes an array using the given element decoder.
///
/// Elements are decoded left to right; the first failing element stops the
/// scan and is reported as [`Reason::ArrayAt`] with its index — later
/// elements are not attempted. Success yields a freshly allocated `Vec` of
/// the decoded (possibly transformed) elements.
pub fn array<T: 'static>(element: Decoder<T>) -> Decoder<Vec<T>> {
    Decoder::from_fn(move |value| {
        let items = match value {
            Value::Array(items) => items,
            other => return Err(Reason::expected("an array", other)),
        };

        let mut decoded = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match element.decode(item) {
                Ok(item) => decoded.push(item),
                Err(reason) => return Err(Reason::at_index(index, reason)),
            }
        }
        Ok(decoded)
    })
}

/// Decodes a string-keyed map with a homogeneous value type, for objects
/// whose keys are not statically known.
///
/// The input must be an object (`null` and arrays are rejected). Every value
/// is decoded under its original key; the first failing key stops the scan
/// and is reported as [`Reason::FieldType`]. The output key set is exactly
/// the input key set, values replaced by their decoded forms. Cross-key
/// decode order is unspecified.
pub fn dict<T: 'static>(value_decoder: Decoder<T>) -> Decoder<BTreeMap<String, T>> {
    Decoder::from_fn(move |value| {
        let map = match value {
            Value::Object(map) => map,
            other => return Err(Reason::expected("an object", other)),
        };

        let mut decoded = BTreeMap::new();
        for (key, entry) in map {
            match value_decoder.decode(entry) {
                Ok(entry) => {
                    decoded.insert(key.clone(), entry);
                }
                Err(reason) => return Err(Reason::for_field(key, reason)),
            }
        }
        Ok(decoded)
    })
}

macro_rules! tuple_decoder {
    ($name:ident, $arity:literal, $( ($dec:ident, $ty:ident, $idx:tt) ),+) => {
        #[doc = concat!(
            "Decodes an array of length at least ", stringify!($arity),
            " into a ", stringify!($arity), "-tuple, position by position."
        )]
        ///
        /// Extra trailing elements are ignored, not an error. Inputs that are
        /// not arrays, or arrays that are too short, fail with the same
        /// tuple-shape message; a failing position is reported as
        /// [`Reason::ArrayAt`] with its index, and later positions are not
        /// attempted.
        pub fn $name<$($ty: 'static),+>($($dec: Decoder<$ty>),+) -> Decoder<($($ty,)+)> {
            Decoder::from_fn(move |value| {
                let items = match value {
                    Value::Array(items) if items.len() >= $arity => items,
                    other => {
                        return Err(Reason::expected(
                            concat!("a ", $arity, "-tuple"),
                            other,
                        ))
                    }
                };

                Ok((
                    $(
                        $dec.decode(&items[$idx])
                            .map_err(|reason| Reason::at_index($idx, reason))?,
                    )+
                ))
            })
        }
    };
}

tuple_decoder!(tuple1, 1, (d0, T0, 0));
tuple_decoder!(tuple2, 2, (d0, T0, 0), (d1, T1, 1));
tuple_decoder!(tuple3, 3, (d0, T0, 0), (d1, T1, 1), (d2, T2, 2));
tuple_decoder!(tuple4, 4, (d0, T0, 0), (d1, T1, 1), (d2, T2, 2), (d3, T3, 3));
tuple_decoder!(
    tuple5, 5,
    (d0, T0, 0), (d1, T1, 1), (d2, T2, 2), (d3, T3, 3), (d4, T4, 4)
);
tuple_decoder!(
    tuple6, 6,
    (d0, T0, 0), (d1, T1, 1), (d2, T2, 2), (d3, T3, 3), (d4, T4, 4), (d5, T5, 5)
);
tuple_decoder!(
    tuple7, 7,
    (d0, T0, 0), (d1, T1, 1), (d2, T2, 2), (d3, T3, 3), (d4, T4, 4), (d5, T5, 5),
    (d6, T6, 6)
);
tuple_decoder!(
    tuple8, 8,
    (d0, T0, 0), (d1, T1, 1), (d2, T2, 2), (d3, T3, 3), (d4, T4, 4), (d5, T5, 5),
    (d6, T6, 6), (d7, T7, 7)
);


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::primitive::unknown;
    use crate::value::proptests::json_value;
    use proptest::prelude::*;

    proptest! {
        /// Collection combinators never panic, whatever the input shape.
        #[test]
        fn collections_never_panic(json in json_value()) {
            let value = Value::from(json);
            let _ = array(unknown()).decode(&value);
            let _ = dict(unknown()).decode(&value);
            let _ = tuple2(unknown(), unknown()).decode(&value);
        }

        /// `dict(unknown)` succeeds on any object and preserves the key set.
        #[test]
        fn dict_preserves_key_set(
            map in prop::collection::btree_map("[a-z]{1,8}", json_value(), 0..8)
        ) {
            let input = Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::from(v.clone())))
                    .collect(),
            );
            let decoded = dict(unknown()).decode(&input).expect("object input");
            let input_keys: Vec<&String> = map.keys().collect();
            let output_keys: Vec<&String> = decoded.keys().collect();
            prop_assert_eq!(output_keys, input_keys);
        }
    }
}
