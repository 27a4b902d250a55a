//! In-memory document store
//!
//! [`MemStore`] is the reference [`DocumentStore`] implementation: one named
//! collection of documents in insertion order, scanned linearly. It backs
//! the test suites and examples; it is not a storage engine.
//!
//! ## Native lookup semantics
//!
//! `find_by_native_id` implements the store's own contract, which the
//! resolution layer inherits verbatim: every key must parse as a [`DocId`]
//! (anything else is an invalid argument), any missing identifier raises
//! [`Error::NotFound`], and exactly one scalar argument produces a
//! single-shaped result.

#![warn(missing_docs)]
#![warn(clippy::all)]

use slugfind_core::{
    Argument, DocId, Document, DocumentStore, Error, FieldMeta, FieldType, LookupKey, Resolution,
    Result, SlugField, SlugQuery,
};
use tracing::debug;

/// One in-memory collection of documents
#[derive(Debug, Clone)]
pub struct MemStore {
    collection: String,
    slug_field: String,
    default_locale: String,
    localized_slugs: bool,
    docs: Vec<Document>,
}

impl MemStore {
    /// Create an empty collection
    pub fn new(collection: &str) -> Self {
        MemStore {
            collection: collection.to_string(),
            slug_field: "_slugs".to_string(),
            default_locale: "en".to_string(),
            localized_slugs: false,
            docs: Vec::new(),
        }
    }

    /// Override the default locale
    pub fn with_default_locale(mut self, locale: &str) -> Self {
        self.default_locale = locale.to_string();
        self
    }

    /// Declare the slug field as localized
    pub fn with_localized_slugs(mut self) -> Self {
        self.localized_slugs = true;
        self
    }

    /// Override the slug field name
    pub fn with_slug_field(mut self, name: &str) -> Self {
        self.slug_field = name.to_string();
        self
    }

    /// Append a document to the collection
    pub fn insert(&mut self, doc: Document) {
        self.docs.push(doc);
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    fn native_keys(&self, args: &[Argument]) -> Result<Vec<DocId>> {
        let mut ids = Vec::new();
        for arg in args {
            self.collect_native_keys(arg, &mut ids)?;
        }
        Ok(ids)
    }

    fn collect_native_keys(&self, arg: &Argument, out: &mut Vec<DocId>) -> Result<()> {
        match arg {
            Argument::Scalar(LookupKey::Id(id)) => out.push(*id),
            Argument::Scalar(LookupKey::Str(s)) => {
                let id = DocId::from_string(s).ok_or_else(|| {
                    Error::InvalidArgument(format!(
                        "'{s}' is not a valid identifier for '{}'",
                        self.collection
                    ))
                })?;
                out.push(id);
            }
            Argument::Sequence(items) | Argument::SetOf(items) => {
                for item in items {
                    self.collect_native_keys(item, out)?;
                }
            }
            other => {
                return Err(Error::InvalidArgument(format!(
                    "{other:?} is not a valid identifier for '{}'",
                    self.collection
                )))
            }
        }
        Ok(())
    }
}

/// Whether `doc` satisfies the membership query
///
/// Flat storage matches through the flat arm; localized storage only
/// matches through the locale arm, and never matches an unlocalized query.
fn matches(doc: &Document, query: &SlugQuery) -> bool {
    match (&doc.slugs, &query.locale) {
        (SlugField::Flat(aliases), _) => aliases.iter().any(|alias| query.keys.contains(alias)),
        (SlugField::Localized(_), Some(locale)) => doc
            .slugs
            .for_locale(locale)
            .iter()
            .any(|alias| query.keys.iter().any(|key| key.as_str() == *alias)),
        (SlugField::Localized(_), None) => false,
    }
}

impl DocumentStore for MemStore {
    fn execute_query(&self, query: &SlugQuery, limit: usize) -> Result<Vec<Document>> {
        let hits: Vec<Document> = self
            .docs
            .iter()
            .filter(|doc| matches(doc, query))
            .take(limit)
            .cloned()
            .collect();
        debug!(
            collection = self.collection.as_str(),
            hits = hits.len(),
            "slug scan"
        );
        Ok(hits)
    }

    fn find_by_native_id(&self, args: &[Argument]) -> Result<Resolution> {
        let ids = self.native_keys(args)?;
        let mut found = Vec::new();
        let mut missing = Vec::new();
        for id in &ids {
            match self.docs.iter().find(|doc| doc.id == *id) {
                Some(doc) => found.push(doc.clone()),
                None => missing.push(id.to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(Error::not_found(
                &self.collection,
                ids.iter().map(ToString::to_string).collect(),
                missing,
            ));
        }
        let single = args.len() == 1 && matches!(args[0], Argument::Scalar(_));
        if single {
            Ok(Resolution::Single(found.into_iter().next()))
        } else {
            Ok(Resolution::Many(found))
        }
    }

    fn field_meta(&self, name: &str) -> Result<FieldMeta> {
        if name == "_id" {
            return Ok(FieldMeta::new("_id", FieldType::Id));
        }
        if name == self.slug_field {
            let meta = FieldMeta::new(name, FieldType::Str);
            return Ok(if self.localized_slugs {
                meta.localized()
            } else {
                meta
            });
        }
        Err(Error::Store(format!(
            "unknown field '{name}' on '{}'",
            self.collection
        )))
    }

    fn default_locale(&self) -> &str {
        &self.default_locale
    }

    fn collection(&self) -> &str {
        &self.collection
    }
}
