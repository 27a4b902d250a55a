//! Slug-or-identifier resolution for document lookups
//!
//! This crate decides, per find call, whether the caller's arguments are
//! native record identifiers or human-readable slugs, and dispatches to the
//! matching lookup path:
//!
//! - [`normalize`]: flatten heterogeneous arguments into atomic keys and
//!   derive the single-vs-multi result shape
//! - [`Classifier`]: the pluggable "looks like a native identifier"
//!   strategy, selected from field metadata
//! - [`query`]: slug membership query construction, localized or flat
//! - [`report`]: missing-key accounting and the not-found policy
//! - [`Resolver`]: the find dispatcher tying the above together
//!
//! The document store itself stays behind
//! [`DocumentStore`](slugfind_core::DocumentStore); this crate issues at
//! most one query per find call and interprets its result.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classify;
pub mod normalize;
pub mod query;
pub mod report;
pub mod resolver;

pub use classify::Classifier;
pub use normalize::{normalize, NormalizedArgs};
pub use resolver::{Resolver, ResolverConfig};

// Re-export the core vocabulary so callers need one import line
pub use slugfind_core::{
    Argument, DocId, Document, DocumentStore, Error, FieldMeta, FieldType, LookupKey, RangeArg,
    Resolution, Result, SlugField, SlugQuery,
};
