//! Missing-document accounting
//!
//! After a slug query runs, every requested key must be covered by some
//! result document's alias set. The missing set is computed once from the
//! result; whether it raises is the resolver's not-found policy.

use rustc_hash::FxHashSet;
use slugfind_core::{Document, Error, Result};
use tracing::debug;

/// Fail when requested keys matched no document and the policy says raise
///
/// Coverage counts a document's FULL alias set, across every locale. The
/// error lists every unmatched key. With `raise` false the check is a
/// no-op beyond a debug event and the caller keeps its partial result.
///
/// # Errors
///
/// Returns [`Error::NotFound`] naming the missing keys.
pub fn check_missing(
    collection: &str,
    docs: &[Document],
    requested: &[String],
    raise: bool,
) -> Result<()> {
    let found: FxHashSet<&str> = docs.iter().flat_map(|doc| doc.slugs.all()).collect();
    let missing: Vec<String> = requested
        .iter()
        .filter(|key| !found.contains(key.as_str()))
        .cloned()
        .collect();

    if missing.is_empty() {
        return Ok(());
    }
    if !raise {
        debug!(collection, ?missing, "unmatched slugs tolerated by policy");
        return Ok(());
    }
    Err(Error::not_found(collection, requested.to_vec(), missing))
}
