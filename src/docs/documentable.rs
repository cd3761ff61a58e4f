//! Documentable entities and reference extraction.

use serde::Deserialize;
use serde_yaml::Value;

use super::{Reference, ReferenceList};
use crate::error::ReferenceError;

/// Entity that may carry documentation references.
///
/// The owning content model decides what an entity is; this crate only
/// needs the raw `docs` field as authored.
pub trait Documentable {
    /// Returns raw `docs` field, or `None` when absent.
    fn docs(&self) -> Option<&Value>;
}

/// Documentable entity as authored in a YAML collection.
///
/// Fields other than `name` and `docs` are ignored, so any collection
/// entry (category, script, ...) deserializes into this type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DocumentableData {
    /// Display name of the entity.
    #[serde(default)]
    pub name: Option<String>,

    /// Documentation field: absent, one URL, or a list of URLs.
    #[serde(default)]
    pub docs: Option<Value>,
}

impl DocumentableData {
    /// Creates entity with given `docs` field.
    pub fn with_docs(docs: impl Into<Value>) -> Self {
        Self {
            name: None,
            docs: Some(docs.into()),
        }
    }
}

impl Documentable for DocumentableData {
    fn docs(&self) -> Option<&Value> {
        self.docs.as_ref()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Collection {
    Many(Vec<DocumentableData>),
    One(DocumentableData),
}

/// Parses YAML collection holding one entity or a list of entities.
///
/// Only structure is checked here; `docs` fields are validated later by
/// [`parse_references`], one entity at a time.
///
/// # Errors
///
/// Returns error if the text is not YAML or has neither shape.
pub fn parse_collection(yaml: &str) -> Result<Vec<DocumentableData>, serde_yaml::Error> {
    match serde_yaml::from_str(yaml)? {
        Collection::Many(entities) => Ok(entities),
        Collection::One(entity) => Ok(vec![entity]),
    }
}

/// Extracts validated documentation references from entity.
///
/// Accepted shapes of the `docs` field:
/// - absent, `null`, or an empty sequence: empty list
/// - a single string: one element list
/// - a sequence of strings: one reference per element, in order
///
/// Shape is checked for the whole field before any URL is validated, so a
/// non string element is reported as [`ReferenceError::InvalidShape`] no
/// matter where it sits. Duplicates are kept.
///
/// # Arguments
///
/// * `documentable`: Entity to read, `None` when the caller has none
///
/// # Returns
///
/// References in the order they were authored
///
/// # Errors
///
/// Returns [`ReferenceError::MissingInput`] when no entity is given,
/// [`ReferenceError::InvalidShape`] for any other field shape, and the
/// first validation error from [`Reference::parse`] otherwise. No partial
/// list is ever returned.
pub fn parse_references<D>(documentable: Option<&D>) -> Result<ReferenceList, ReferenceError>
where
    D: Documentable + ?Sized,
{
    let documentable = documentable.ok_or(ReferenceError::MissingInput)?;

    let candidates: Vec<&str> = match documentable.docs() {
        None | Some(Value::Null) => return Ok(ReferenceList::default()),
        Some(Value::String(single)) => vec![single.as_str()],
        Some(Value::Sequence(items)) => items
            .iter()
            .map(|item| item.as_str().ok_or(ReferenceError::InvalidShape))
            .collect::<Result<_, _>>()?,
        Some(_) => return Err(ReferenceError::InvalidShape),
    };

    let references = candidates
        .into_iter()
        .map(Reference::parse)
        .collect::<Result<ReferenceList, _>>()?;

    tracing::debug!(count = references.len(), "Parsed documentation references");

    Ok(references)
}
