//! Find dispatcher
//!
//! [`Resolver`] is the entry point of the layer. Each find call normalizes
//! its arguments, classifies the resulting keys, and runs exactly one of
//! two paths: the store's native by-identifier lookup, or one slug
//! membership query followed by dedup, missing-key accounting and result
//! shaping.
//!
//! ## Path choice
//!
//! The slug path is taken only when every key is a string and none of them
//! looks like a native identifier. The bias is deliberate: an
//! identifier-shaped string is still a valid slug value, but a
//! non-identifier-shaped string can never resolve natively, so a mixed
//! batch always resolves through slugs rather than being rejected halfway.

use crate::classify::Classifier;
use crate::normalize::{normalize, NormalizedArgs};
use crate::{query, report};
use rustc_hash::FxHashSet;
use slugfind_core::{Argument, DocumentStore, Error, LookupKey, Resolution, Result};
use tracing::debug;

/// Configuration for a [`Resolver`]
///
/// Set once at construction and read-only afterwards. Strict and lenient
/// lookups are therefore distinct resolvers, not a mutable mode switch.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Name of the slug field
    pub slug_field: String,
    /// Name of the native identifier field
    pub id_field: String,
    /// Whether unmatched slugs raise [`Error::NotFound`]
    pub raise_not_found: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            slug_field: "_slugs".to_string(),
            id_field: "_id".to_string(),
            raise_not_found: true,
        }
    }
}

impl ResolverConfig {
    /// Default configuration with the lenient not-found policy
    pub fn lenient() -> Self {
        ResolverConfig {
            raise_not_found: false,
            ..ResolverConfig::default()
        }
    }
}

/// Slug-or-identifier find dispatcher for one collection
///
/// Stateless across calls: the classification strategy is selected anew at
/// the start of each call and threaded through it, so concurrent finds
/// against a shared resolver are safe.
///
/// # Examples
///
/// ```
/// use slugfind_core::{Argument, DocId, Document, SlugField};
/// use slugfind_memstore::MemStore;
/// use slugfind_resolve::Resolver;
///
/// let mut store = MemStore::new("products");
/// store.insert(Document::new(
///     DocId::new(),
///     SlugField::flat(["red-shoes"]),
///     serde_json::json!({"name": "Red Shoes"}),
/// ));
///
/// let resolver = Resolver::new(store);
/// let found = resolver.find(&[Argument::from("red-shoes")])?;
/// assert!(found.into_single().is_some());
/// # Ok::<(), slugfind_core::Error>(())
/// ```
pub struct Resolver<S> {
    store: S,
    config: ResolverConfig,
}

impl<S: DocumentStore> Resolver<S> {
    /// Create a resolver with the default (strict) configuration
    pub fn new(store: S) -> Self {
        Resolver {
            store,
            config: ResolverConfig::default(),
        }
    }

    /// Create a resolver with an explicit configuration
    pub fn with_config(store: S, config: ResolverConfig) -> Self {
        Resolver { store, config }
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The active configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Find documents by native identifiers or slugs
    ///
    /// Classifies the normalized keys and dispatches. The native path
    /// receives the original arguments untouched and its result passes
    /// through verbatim; the slug path issues one membership query bounded
    /// to the key count.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] when no keys remain after
    ///   normalization, or any key is null.
    /// - [`Error::NotFound`] from the slug path under the strict policy.
    /// - Whatever the store raises, unchanged.
    pub fn find(&self, args: &[Argument]) -> Result<Resolution> {
        let norm = normalize(args);
        self.validate(&norm)?;

        // Selected once per call; field metadata cannot shift mid-lookup.
        let id_meta = self.store.field_meta(&self.config.id_field).ok();
        let classifier = Classifier::for_field(id_meta.as_ref());

        let all_slugs = norm.keys.iter().all(|key| match key {
            LookupKey::Str(s) => !classifier.looks_like_id(s),
            _ => false,
        });

        if all_slugs {
            debug!(
                collection = self.store.collection(),
                keys = norm.keys.len(),
                "resolving via slug path"
            );
            self.resolve_slugs(norm)
        } else {
            debug!(
                collection = self.store.collection(),
                keys = norm.keys.len(),
                "delegating to native identifier lookup"
            );
            self.store.find_by_native_id(args)
        }
    }

    /// Find documents by slugs, skipping classification
    ///
    /// Identifier-shaped strings are looked up as slug values here. Same
    /// validation, policy and shaping as [`Resolver::find`].
    ///
    /// # Errors
    ///
    /// As for [`Resolver::find`], minus the native path.
    pub fn find_by_slug(&self, args: &[Argument]) -> Result<Resolution> {
        let norm = normalize(args);
        self.validate(&norm)?;
        self.resolve_slugs(norm)
    }

    fn validate(&self, norm: &NormalizedArgs) -> Result<()> {
        if norm.keys.is_empty() {
            return Err(Error::InvalidArgument(format!(
                "find on '{}' requires at least one key",
                self.store.collection()
            )));
        }
        if norm.keys.iter().any(LookupKey::is_null) {
            return Err(Error::InvalidArgument(format!(
                "find on '{}' called with a null key",
                self.store.collection()
            )));
        }
        Ok(())
    }

    fn resolve_slugs(&self, norm: NormalizedArgs) -> Result<Resolution> {
        // An unresolvable slug field means no localization metadata; fall
        // back to the plain membership form.
        let localized = self
            .store
            .field_meta(&self.config.slug_field)
            .map(|meta| meta.localized)
            .unwrap_or(false);

        let query = query::build(
            &self.config.slug_field,
            &norm.keys,
            localized,
            self.store.default_locale(),
        );
        let limit = query.keys.len();
        let docs = self.store.execute_query(&query, limit)?;
        let docs = dedup_by_id(docs);
        debug!(
            collection = self.store.collection(),
            requested = limit,
            matched = docs.len(),
            "slug query executed"
        );

        report::check_missing(
            self.store.collection(),
            &docs,
            &query.keys,
            self.config.raise_not_found,
        )?;

        if norm.multi {
            Ok(Resolution::Many(docs))
        } else {
            Ok(Resolution::Single(docs.into_iter().next()))
        }
    }
}

/// Drop repeated documents, keeping the first occurrence of each id
fn dedup_by_id(mut docs: Vec<slugfind_core::Document>) -> Vec<slugfind_core::Document> {
    let mut seen = FxHashSet::default();
    docs.retain(|doc| seen.insert(doc.id));
    docs
}
