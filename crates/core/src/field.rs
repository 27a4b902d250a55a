//! Field metadata
//!
//! The store's model layer describes each field: its declared type, whether
//! its values are stored per-locale, and an optional classification override
//! for the native identifier field. The resolver reads this metadata to pick
//! a classification strategy and to decide the slug query form.

use std::fmt;
use std::sync::Arc;

/// Predicate deciding whether one key string looks like a native identifier
pub type ClassifierFn = dyn Fn(&str) -> bool + Send + Sync;

/// Declared type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Native document identifier
    Id,
    /// String-valued field
    Str,
    /// Document-valued (nested mapping) field
    Json,
}

/// Metadata for one field of a collection
#[derive(Clone)]
pub struct FieldMeta {
    /// Field name
    pub name: String,
    /// Declared type
    pub field_type: FieldType,
    /// Whether values are stored per-locale
    pub localized: bool,
    /// Explicit classification override for this field, if registered
    pub classifier_override: Option<Arc<ClassifierFn>>,
}

impl FieldMeta {
    /// Metadata with no localization and no override
    pub fn new(name: &str, field_type: FieldType) -> Self {
        FieldMeta {
            name: name.to_string(),
            field_type,
            localized: false,
            classifier_override: None,
        }
    }

    /// Mark the field as localized
    pub fn localized(mut self) -> Self {
        self.localized = true;
        self
    }

    /// Register a classification override
    pub fn with_classifier<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.classifier_override = Some(Arc::new(f));
        self
    }
}

impl fmt::Debug for FieldMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldMeta")
            .field("name", &self.name)
            .field("field_type", &self.field_type)
            .field("localized", &self.localized)
            .field("classifier_override", &self.classifier_override.is_some())
            .finish()
    }
}
