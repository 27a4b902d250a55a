//! Slug query and resolution result types
//!
//! [`SlugQuery`] is the one query shape this layer asks a store to run: a
//! membership test of the requested keys against a multi-valued slug field,
//! optionally widened to the field's nested default-locale form.
//! [`Resolution`] is the shaped outcome of a find call.

use crate::types::Document;

/// A membership query against a slug field
///
/// A document matches when its slug field holds any of `keys`. With
/// `locale` set, the query is the OR of two forms: the flat field holds any
/// of `keys`, or the per-locale sub-field under `locale` does. Legacy data
/// may live under either form, so both are always checked together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugQuery {
    /// Name of the slug field
    pub field: String,
    /// Requested keys, in request order, in canonical text form
    pub keys: Vec<String>,
    /// Default locale for the nested form; None for unlocalized fields
    pub locale: Option<String>,
}

impl SlugQuery {
    /// Whether this query also checks the nested per-locale form
    pub fn is_localized(&self) -> bool {
        self.locale.is_some()
    }
}

/// The shaped result of a find call
///
/// The shape is fixed by the original argument shape, not by how many
/// documents matched: multi-shaped requests always yield `Many` (possibly
/// empty), single-shaped requests always yield `Single`.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Result of a single-shaped request
    ///
    /// `None` only occurs under the lenient not-found policy.
    Single(Option<Document>),
    /// Result of a multi-shaped request, in match order
    Many(Vec<Document>),
}

impl Resolution {
    /// Whether this is a list-shaped result
    pub fn is_many(&self) -> bool {
        matches!(self, Resolution::Many(_))
    }

    /// The matched documents, regardless of shape
    pub fn into_vec(self) -> Vec<Document> {
        match self {
            Resolution::Single(doc) => doc.into_iter().collect(),
            Resolution::Many(docs) => docs,
        }
    }

    /// The single matched document, for single-shaped results
    pub fn into_single(self) -> Option<Document> {
        match self {
            Resolution::Single(doc) => doc,
            Resolution::Many(_) => None,
        }
    }
}
