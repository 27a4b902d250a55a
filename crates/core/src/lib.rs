//! Core types and traits for the slugfind resolution layer
//!
//! This crate defines the foundational types used throughout the system:
//! - DocId: the store's native document identifier
//! - Document / SlugField: stored records and their slug alias sets
//! - Argument / LookupKey: heterogeneous find arguments and atomic keys
//! - SlugQuery / Resolution: the one query shape and the shaped result
//! - FieldMeta / FieldType: per-field metadata from the model layer
//! - Error: error type hierarchy
//! - DocumentStore: the trait behind which the actual store lives

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod argument;
pub mod error;
pub mod field;
pub mod query;
pub mod traits;
pub mod types;

// Re-export commonly used types and traits
pub use argument::{Argument, LookupKey, RangeArg};
pub use error::{Error, Result};
pub use field::{ClassifierFn, FieldMeta, FieldType};
pub use query::{Resolution, SlugQuery};
pub use traits::DocumentStore;
pub use types::{DocId, Document, SlugField};
