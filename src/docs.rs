//! Documentation references attached to documentable entities.
//!
//! This module turns the loosely typed `docs` field of an entity (absent,
//! a single URL, or a list of URLs) into a validated [`ReferenceList`].
//! Validation is all or nothing: one malformed entry rejects the field.

mod documentable;
mod reference;

pub use documentable::{Documentable, DocumentableData, parse_collection, parse_references};
pub use reference::{Reference, ReferenceList};
