//! Argument normalization
//!
//! Flattens a heterogeneous argument list into a deduplicated flat key
//! sequence, and derives the single-vs-multi result shape from the ORIGINAL
//! top-level argument shapes.
//!
//! ## Shape rule
//!
//! `multi` is true when more than one top-level argument was given, or when
//! exactly one was given and it is a resizable container (a sequence or set,
//! even if empty or singleton). The flattened or deduplicated key count has
//! no bearing on the shape: `find("a", "a")` is still list-shaped.
//!
//! Normalization is pure. Null keys and empty key sets pass through; the
//! resolver rejects them.

use rustc_hash::FxHashSet;
use slugfind_core::{Argument, LookupKey, RangeArg};

/// Outcome of normalizing one argument list
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedArgs {
    /// Flattened, deduplicated keys in first-seen order
    pub keys: Vec<LookupKey>,
    /// Whether the result must be list-shaped
    pub multi: bool,
}

/// Flatten `args` into atomic keys and derive the result shape
///
/// - Sequence and set members are flattened recursively.
/// - Integer ranges expand to their enumerated values (empty when the
///   start exceeds the end). Any other range stays one opaque string key in
///   its `start..end` text form.
/// - Everything else passes through unchanged, mappings included.
/// - Keys deduplicate by their canonical text form, first occurrence wins.
///
/// # Examples
///
/// ```
/// use slugfind_core::{Argument, LookupKey};
/// use slugfind_resolve::normalize;
///
/// let norm = normalize(&[Argument::from(1..=3)]);
/// assert_eq!(
///     norm.keys,
///     vec![LookupKey::Int(1), LookupKey::Int(2), LookupKey::Int(3)]
/// );
/// ```
pub fn normalize(args: &[Argument]) -> NormalizedArgs {
    let mut keys = Vec::new();
    for arg in args {
        flatten_into(arg, &mut keys);
    }

    let mut seen = FxHashSet::default();
    keys.retain(|key| seen.insert(key.to_string()));

    let multi = args.len() > 1 || args.first().map_or(false, Argument::is_resizable);

    NormalizedArgs { keys, multi }
}

fn flatten_into(arg: &Argument, out: &mut Vec<LookupKey>) {
    match arg {
        Argument::Scalar(key) => out.push(key.clone()),
        Argument::Sequence(items) | Argument::SetOf(items) => {
            for item in items {
                flatten_into(item, out);
            }
        }
        Argument::Range(range) => expand_range(range, out),
    }
}

fn expand_range(range: &RangeArg, out: &mut Vec<LookupKey>) {
    match (&range.start, &range.end) {
        (LookupKey::Int(start), LookupKey::Int(end)) => {
            for value in *start..=*end {
                out.push(LookupKey::Int(value));
            }
        }
        // Non-numeric endpoints: one opaque key in text form.
        (start, end) => out.push(LookupKey::Str(format!("{start}..{end}"))),
    }
}
