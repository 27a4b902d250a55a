//! Store abstraction
//!
//! This module defines the [`DocumentStore`] trait through which the
//! resolution layer reaches the underlying document store. Storage, indexing
//! and query execution live behind this trait; the resolver only decides
//! which query to issue and how to interpret the result.
//!
//! Thread safety: implementations must be safe to share across threads
//! (requires Send + Sync). The resolver keeps no cross-call state, so
//! concurrent find calls against one store are safe.

use crate::argument::Argument;
use crate::error::Result;
use crate::field::FieldMeta;
use crate::query::{Resolution, SlugQuery};
use crate::types::Document;

/// Access to one collection of a document store
///
/// Failures surface as [`crate::error::Error::Store`] (or any other error
/// the implementation chooses); the resolution layer propagates them
/// unchanged, without wrapping or reinterpretation.
pub trait DocumentStore: Send + Sync {
    /// Run a slug membership query, returning at most `limit` documents
    ///
    /// Documents must expose their full slug alias sets; the resolver uses
    /// them for missing-key accounting.
    ///
    /// # Errors
    ///
    /// Returns an error if query execution fails.
    fn execute_query(&self, query: &SlugQuery, limit: usize) -> Result<Vec<Document>>;

    /// The store's native by-identifier lookup
    ///
    /// Receives the ORIGINAL, unnormalized arguments. Result and error
    /// semantics are the store's own; the resolver inherits them verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error under the store's own lookup semantics.
    fn find_by_native_id(&self, args: &[Argument]) -> Result<Resolution>;

    /// Metadata for the named field
    ///
    /// # Errors
    ///
    /// Returns an error if the field is unknown to the collection. Callers
    /// degrade gracefully: an unresolvable slug field is treated as
    /// unlocalized, an unresolvable identifier field classifies nothing as
    /// a native identifier.
    fn field_meta(&self, name: &str) -> Result<FieldMeta>;

    /// The store's default locale (e.g. "en")
    fn default_locale(&self) -> &str;

    /// Name of the collection, used in not-found diagnostics
    fn collection(&self) -> &str;
}

impl<S: DocumentStore + ?Sized> DocumentStore for &S {
    fn execute_query(&self, query: &SlugQuery, limit: usize) -> Result<Vec<Document>> {
        (**self).execute_query(query, limit)
    }

    fn find_by_native_id(&self, args: &[Argument]) -> Result<Resolution> {
        (**self).find_by_native_id(args)
    }

    fn field_meta(&self, name: &str) -> Result<FieldMeta> {
        (**self).field_meta(name)
    }

    fn default_locale(&self) -> &str {
        (**self).default_locale()
    }

    fn collection(&self) -> &str {
        (**self).collection()
    }
}
