//! # descry-render — Human-Oriented Failure Rendering
//!
//! Converts a [`descry_core::Reason`] into a readable, indented tree string.
//! Where the `Display` form of a `Reason` compresses the failure path onto
//! one line and `Reason::to_json_string` targets machines, this crate
//! renders the full tree for humans: one node per reason, nesting that
//! mirrors the failed input, field names and indices as attributes.
//!
//! The concrete syntax (XML-like tags, two-space indent) is presentation and
//! may change; the tree shape and traversal order are the contract. Callers
//! that need stability should match on the `Reason` value itself.
//!
//! ## Crate Policy
//!
//! - Depends only on `descry-core` internally.
//! - Pure functions of a `Reason`; no state, no I/O.

mod xml;

pub mod render;

pub use render::reason_to_xml_string;
