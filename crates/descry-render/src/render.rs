//! # Reason Rendering
//!
//! Maps a [`Reason`] tree onto the node model and prints it. The mapping is
//! one variant to one tag, with locating data carried as attributes:
//!
//! | variant        | rendering                                   |
//! |----------------|---------------------------------------------|
//! | `Fail`         | `<fail> message </fail>`                    |
//! | `FieldType`    | `<field-type name="…">` wrapping the child  |
//! | `ArrayAt`      | `<array index="…">` wrapping the child      |
//! | `OneOf`        | `<one-of>` wrapping each branch, in order   |
//! | `MissingField` | `<missing-field name="…" />`                |
//!
//! Traversal order is the `Reason`'s own order, so reading the output top to
//! bottom follows the attempt/declaration order of the failed decode.

use descry_core::Reason;

use crate::xml::{node, text, xml_to_string, Xml};

fn reason_to_xml(reason: &Reason) -> Xml {
    match reason {
        Reason::Fail { message } => node("fail", vec![], vec![text(message.clone())]),

        Reason::FieldType { field, reason } => node(
            "field-type",
            vec![("name", field.clone())],
            vec![reason_to_xml(reason)],
        ),

        Reason::ArrayAt { index, reason } => node(
            "array",
            vec![("index", index.to_string())],
            vec![reason_to_xml(reason)],
        ),

        Reason::OneOf { reasons } => {
            node("one-of", vec![], reasons.iter().map(reason_to_xml).collect())
        }

        Reason::MissingField { field } => {
            node("missing-field", vec![("name", field.clone())], vec![])
        }
    }
}

/// The human-oriented rendering of a decode failure: an indented tree whose
/// shape mirrors the failed input's nesting.
pub fn reason_to_xml_string(reason: &Reason) -> String {
    xml_to_string(&reason_to_xml(reason))
}
