//! Error types for the resolution layer
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Store implementations surface their own failures through [`Error::Store`];
//! the resolution layer propagates those unchanged and never re-wraps them.

use thiserror::Error;

/// Result type alias for resolution operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the resolution layer
#[derive(Debug, Error)]
pub enum Error {
    /// Lookup called with no usable keys, or a key that resolved to null
    #[error("Invalid lookup argument: {0}")]
    InvalidArgument(String),

    /// One or more requested slugs matched no document
    ///
    /// `missing` lists every requested key that matched nothing, not just
    /// the first one.
    #[error("Documents not found in '{collection}': no matches for {missing:?} (requested {requested:?})")]
    NotFound {
        /// Collection (record type) the lookup ran against
        collection: String,
        /// Full requested key set, in request order
        requested: Vec<String>,
        /// Subset of `requested` that matched no document
        missing: Vec<String>,
    },

    /// Failure raised by a `DocumentStore` implementation
    #[error("Store error: {0}")]
    Store(String),
}

impl Error {
    /// Build a `NotFound` error from the requested and missing key sets
    pub fn not_found(collection: &str, requested: Vec<String>, missing: Vec<String>) -> Self {
        Error::NotFound {
            collection: collection.to_string(),
            requested,
            missing,
        }
    }
}
