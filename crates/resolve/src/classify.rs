//! Classification strategies
//!
//! A classification strategy answers one question per key: does this string
//! look like a native identifier? The answer routes a find call to the
//! native lookup path or the slug path.
//!
//! Strategy selection is a static mapping from the identifier field's
//! declared type, with a per-field override taking precedence:
//!
//! | source                  | strategy            |
//! |-------------------------|---------------------|
//! | field override          | `Custom`            |
//! | declared type `Id`      | `NativeIdLegality`  |
//! | declared type `Str`     | `AlwaysNative`      |
//! | any other / no metadata | `AlwaysSlug`        |
//!
//! A string-typed identifier field never has slug candidates: any string is
//! a valid custom key there, so everything classifies as native. Without a
//! usable declared type nothing classifies as native and every lookup runs
//! through the slug path.
//!
//! The resolver selects the strategy once at the start of each find call
//! and threads it through; there is no global or instance-level cache.

use slugfind_core::{ClassifierFn, DocId, FieldMeta, FieldType};
use std::sync::Arc;

/// Strategy deciding whether a key string looks like a native identifier
#[derive(Clone)]
pub enum Classifier {
    /// Key must be a syntactically legal [`DocId`]
    NativeIdLegality,
    /// Every key is a native identifier
    AlwaysNative,
    /// No key is a native identifier
    AlwaysSlug,
    /// Per-field override predicate
    Custom(Arc<ClassifierFn>),
}

impl Classifier {
    /// Select the strategy for an identifier field
    ///
    /// `meta` is `None` when the store could not resolve the field.
    pub fn for_field(meta: Option<&FieldMeta>) -> Classifier {
        let meta = match meta {
            Some(meta) => meta,
            None => return Classifier::AlwaysSlug,
        };
        if let Some(f) = &meta.classifier_override {
            return Classifier::Custom(Arc::clone(f));
        }
        match meta.field_type {
            FieldType::Id => Classifier::NativeIdLegality,
            FieldType::Str => Classifier::AlwaysNative,
            _ => Classifier::AlwaysSlug,
        }
    }

    /// Apply the strategy to one key string
    pub fn looks_like_id(&self, key: &str) -> bool {
        match self {
            Classifier::NativeIdLegality => DocId::is_legal(key),
            Classifier::AlwaysNative => true,
            Classifier::AlwaysSlug => false,
            Classifier::Custom(f) => f(key),
        }
    }
}

impl std::fmt::Debug for Classifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Classifier::NativeIdLegality => "NativeIdLegality",
            Classifier::AlwaysNative => "AlwaysNative",
            Classifier::AlwaysSlug => "AlwaysSlug",
            Classifier::Custom(_) => "Custom",
        };
        write!(f, "Classifier::{name}")
    }
}
