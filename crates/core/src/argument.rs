//! Lookup argument shapes
//!
//! Callers hand the resolver a list of arguments whose shapes vary: single
//! keys, nested sequences, sets, ranges. [`Argument`] models those shapes as
//! an explicit tagged variant; [`LookupKey`] is the atomic key that remains
//! once an argument list has been flattened.
//!
//! Shape matters beyond the keys it yields: the single-vs-multi result form
//! of a find is derived from the original top-level argument shapes, so the
//! variants distinguish resizable containers (sequences, sets) from scalars
//! and ranges.

use crate::types::DocId;
use serde_json::Map;
use std::fmt;

/// One atomic lookup key, after flattening
///
/// The `Display` form is canonical: keys are deduplicated and queried by
/// their textual representation.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupKey {
    /// Absent value; never a valid key, detected by the resolver
    Null,
    /// A native document identifier
    Id(DocId),
    /// An integer key (e.g. produced by range expansion)
    Int(i64),
    /// A string key: a slug, or the textual form of a native identifier
    Str(String),
    /// A mapping-shaped argument, passed through unchanged
    Doc(Map<String, serde_json::Value>),
}

impl LookupKey {
    /// Whether this key is a string
    pub fn is_str(&self) -> bool {
        matches!(self, LookupKey::Str(_))
    }

    /// Whether this key is null
    pub fn is_null(&self) -> bool {
        matches!(self, LookupKey::Null)
    }

    /// The string content, for string keys only
    pub fn as_str(&self) -> Option<&str> {
        match self {
            LookupKey::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKey::Null => write!(f, "null"),
            LookupKey::Id(id) => write!(f, "{id}"),
            LookupKey::Int(n) => write!(f, "{n}"),
            LookupKey::Str(s) => write!(f, "{s}"),
            LookupKey::Doc(map) => write!(f, "{}", serde_json::Value::Object(map.clone())),
        }
    }
}

/// An endpoint pair for a range argument
///
/// Both endpoints are inclusive. Integer ranges expand during normalization;
/// any other endpoint combination stays a single opaque key.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeArg {
    /// Inclusive lower endpoint
    pub start: LookupKey,
    /// Inclusive upper endpoint
    pub end: LookupKey,
}

/// One raw argument to a find call
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// A single atomic key
    Scalar(LookupKey),
    /// An ordered container of further arguments
    Sequence(Vec<Argument>),
    /// An unordered container of further arguments
    SetOf(Vec<Argument>),
    /// An endpoint pair
    Range(RangeArg),
}

impl Argument {
    /// A null scalar argument
    pub fn null() -> Self {
        Argument::Scalar(LookupKey::Null)
    }

    /// Build a sequence argument from anything convertible to arguments
    pub fn sequence<I, A>(items: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Argument>,
    {
        Argument::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Build a set argument from anything convertible to arguments
    pub fn set_of<I, A>(items: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Argument>,
    {
        Argument::SetOf(items.into_iter().map(Into::into).collect())
    }

    /// Build a range argument from two endpoint keys
    pub fn range(start: impl Into<LookupKey>, end: impl Into<LookupKey>) -> Self {
        Argument::Range(RangeArg {
            start: start.into(),
            end: end.into(),
        })
    }

    /// Whether this argument is a resizable container
    ///
    /// Sequences and sets are resizable; scalars and ranges are not. A single
    /// resizable top-level argument forces a list-shaped result even when it
    /// holds one element, or none.
    pub fn is_resizable(&self) -> bool {
        matches!(self, Argument::Sequence(_) | Argument::SetOf(_))
    }
}

impl From<LookupKey> for Argument {
    fn from(key: LookupKey) -> Self {
        Argument::Scalar(key)
    }
}

impl From<&str> for LookupKey {
    fn from(s: &str) -> Self {
        LookupKey::Str(s.to_string())
    }
}

impl From<String> for LookupKey {
    fn from(s: String) -> Self {
        LookupKey::Str(s)
    }
}

impl From<i64> for LookupKey {
    fn from(n: i64) -> Self {
        LookupKey::Int(n)
    }
}

impl From<DocId> for LookupKey {
    fn from(id: DocId) -> Self {
        LookupKey::Id(id)
    }
}

impl From<&str> for Argument {
    fn from(s: &str) -> Self {
        Argument::Scalar(LookupKey::Str(s.to_string()))
    }
}

impl From<String> for Argument {
    fn from(s: String) -> Self {
        Argument::Scalar(LookupKey::Str(s))
    }
}

impl From<i64> for Argument {
    fn from(n: i64) -> Self {
        Argument::Scalar(LookupKey::Int(n))
    }
}

impl From<DocId> for Argument {
    fn from(id: DocId) -> Self {
        Argument::Scalar(LookupKey::Id(id))
    }
}

impl From<std::ops::RangeInclusive<i64>> for Argument {
    fn from(r: std::ops::RangeInclusive<i64>) -> Self {
        Argument::range(*r.start(), *r.end())
    }
}

impl From<Map<String, serde_json::Value>> for Argument {
    fn from(map: Map<String, serde_json::Value>) -> Self {
        Argument::Scalar(LookupKey::Doc(map))
    }
}
