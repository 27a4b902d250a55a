//! Slugfind - slug-or-identifier resolution for document lookups
//!
//! Slugfind sits in front of a document store's primary-key lookup. One
//! `find` call accepts native identifiers, human-readable slugs, or nested
//! containers of either; the layer classifies the keys, dispatches to the
//! native lookup path or a slug membership query, deduplicates the result,
//! and enforces a configurable not-found policy that names exactly which
//! inputs had no match.
//!
//! # Quick Start
//!
//! ```
//! use slugfind::{Argument, DocId, Document, MemStore, Resolver, SlugField};
//!
//! let mut store = MemStore::new("products");
//! store.insert(Document::new(
//!     DocId::new(),
//!     SlugField::flat(["red-shoes"]),
//!     serde_json::json!({"name": "Red Shoes"}),
//! ));
//!
//! let resolver = Resolver::new(store);
//!
//! // A slug-shaped key resolves through the slug field
//! let found = resolver.find(&[Argument::from("red-shoes")])?;
//! assert!(found.into_single().is_some());
//! # Ok::<(), slugfind::Error>(())
//! ```
//!
//! # Architecture
//!
//! The resolution logic lives in [`slugfind_resolve`] and reaches the store
//! through the [`DocumentStore`] trait; [`MemStore`] is the bundled
//! in-memory implementation for tests and examples. Storage, indexing and
//! query execution are the store's concern, not this layer's.

// Re-export the public API from slugfind-resolve
pub use slugfind_resolve::*;

// The in-memory reference store
pub use slugfind_memstore::MemStore;
