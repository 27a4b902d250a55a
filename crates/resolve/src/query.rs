//! Slug query construction
//!
//! Builds the one store query this layer issues: membership of the
//! requested keys in the slug field, widened to the nested default-locale
//! form when the field is localized.

use slugfind_core::{LookupKey, SlugQuery};

/// Build the slug membership query for `keys`
///
/// Keys enter the query in their canonical text form, order preserved.
/// For a localized field the query carries the default locale, meaning the
/// store must match the flat form OR the nested per-locale form; legacy
/// data may exist under either.
pub fn build(field: &str, keys: &[LookupKey], localized: bool, default_locale: &str) -> SlugQuery {
    SlugQuery {
        field: field.to_string(),
        keys: keys.iter().map(ToString::to_string).collect(),
        locale: if localized {
            Some(default_locale.to_string())
        } else {
            None
        },
    }
}
