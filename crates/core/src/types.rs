//! Core types for the resolution layer
//!
//! This module defines the foundational types:
//! - DocId: the store's native document identifier
//! - SlugField: per-document slug alias storage (flat or per-locale)
//! - Document: a stored record with its identifier, aliases and body

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// The store's native identifier for a document
///
/// A DocId is a wrapper around a UUID v4. Lookup arguments whose textual
/// form is a syntactically legal DocId are candidates for the native
/// identifier lookup path; everything else is treated as a slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocId(Uuid);

impl DocId {
    /// Create a new random DocId using UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a DocId from raw bytes
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Parse a DocId from a string representation
    ///
    /// Accepts standard UUID format (with or without hyphens).
    /// Returns None if the string is not a valid UUID.
    pub fn from_string(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }

    /// Whether `s` is a syntactically legal native identifier
    ///
    /// This is a purely syntactic check. It says nothing about whether a
    /// document with this identifier exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use slugfind_core::types::DocId;
    ///
    /// let id = DocId::new();
    /// assert!(DocId::is_legal(&id.to_string()));
    /// assert!(!DocId::is_legal("red-shoes"));
    /// ```
    pub fn is_legal(s: &str) -> bool {
        Uuid::parse_str(s).is_ok()
    }

    /// Get the raw bytes of this DocId
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Default for DocId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Slug alias storage for one document
///
/// A document accumulates historical slug aliases, so the field holds a set
/// of variants rather than a single value. Localized storage nests the
/// variants under a mapping keyed by locale code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlugField {
    /// Unlocalized alias set
    Flat(Vec<String>),
    /// Per-locale alias sets, keyed by locale code (e.g. "en")
    Localized(BTreeMap<String, Vec<String>>),
}

impl SlugField {
    /// Build a flat alias set
    pub fn flat<I, S>(aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SlugField::Flat(aliases.into_iter().map(Into::into).collect())
    }

    /// Build a localized alias set from (locale, aliases) pairs
    pub fn localized<L, I, S>(entries: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = (L, Vec<S>)>,
        S: Into<String>,
    {
        SlugField::Localized(
            entries
                .into_iter()
                .map(|(locale, aliases)| {
                    (
                        locale.into(),
                        aliases.into_iter().map(Into::into).collect(),
                    )
                })
                .collect(),
        )
    }

    /// All aliases of this field, across every locale
    pub fn all(&self) -> Vec<&str> {
        match self {
            SlugField::Flat(aliases) => aliases.iter().map(String::as_str).collect(),
            SlugField::Localized(map) => map
                .values()
                .flat_map(|aliases| aliases.iter().map(String::as_str))
                .collect(),
        }
    }

    /// Aliases stored under `locale`; empty for flat fields
    pub fn for_locale(&self, locale: &str) -> Vec<&str> {
        match self {
            SlugField::Flat(_) => Vec::new(),
            SlugField::Localized(map) => map
                .get(locale)
                .map(|aliases| aliases.iter().map(String::as_str).collect())
                .unwrap_or_default(),
        }
    }

    /// Whether any alias (in any locale) equals `key`
    pub fn contains(&self, key: &str) -> bool {
        self.all().iter().any(|alias| *alias == key)
    }
}

/// A stored record: native identifier, slug aliases, and an opaque body
///
/// The body is carried through resolution untouched. The resolution layer
/// only reads `id` (result dedup) and `slugs` (missing-key accounting).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Native identifier
    pub id: DocId,
    /// Slug alias set
    pub slugs: SlugField,
    /// Record payload
    pub body: serde_json::Value,
}

impl Document {
    /// Create a document with an explicit identifier
    pub fn new(id: DocId, slugs: SlugField, body: serde_json::Value) -> Self {
        Document { id, slugs, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_doc_id_roundtrip() {
        let id = DocId::new();
        let parsed = DocId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_doc_id_legality() {
        assert!(DocId::is_legal("67e55044-10b1-426f-9247-bb680e5fe0c8"));
        assert!(DocId::is_legal("67e5504410b1426f9247bb680e5fe0c8"));
        assert!(!DocId::is_legal(""));
        assert!(!DocId::is_legal("red-shoes"));
        assert!(!DocId::is_legal("zze55044-10b1-426f-9247-bb680e5fe0c8"));
    }

    #[test]
    fn test_slug_field_all_spans_locales() {
        let slugs = SlugField::localized([("en", vec!["red-shoes"]), ("de", vec!["rote-schuhe"])]);
        let mut all = slugs.all();
        all.sort();
        assert_eq!(all, vec!["red-shoes", "rote-schuhe"]);
    }

    #[test]
    fn test_slug_field_for_locale() {
        let slugs = SlugField::localized([("en", vec!["red-shoes", "crimson-shoes"])]);
        assert_eq!(slugs.for_locale("en"), vec!["red-shoes", "crimson-shoes"]);
        assert!(slugs.for_locale("de").is_empty());

        let flat = SlugField::flat(["blue-hat"]);
        assert!(flat.for_locale("en").is_empty());
        assert!(flat.contains("blue-hat"));
    }

    #[test]
    fn test_document_serde_roundtrip() {
        let doc = Document::new(
            DocId::new(),
            SlugField::flat(["red-shoes"]),
            json!({"name": "Red Shoes", "price": 49}),
        );
        let encoded = serde_json::to_string(&doc).unwrap();
        let decoded: Document = serde_json::from_str(&encoded).unwrap();
        assert_eq!(doc, decoded);
    }
}
