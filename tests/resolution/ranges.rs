//! Range argument scenarios through the full stack
//!
//! Numeric ranges expand to integer keys, which are not strings and so
//! delegate to the native path with the store's own semantics. String
//! ranges stay one opaque key and resolve as a slug.

use crate::common::{lenient, product_store};
use slugfind::{Argument, Error, Resolver};

#[test]
fn test_numeric_range_delegates_to_native_path() {
    let resolver = Resolver::new(product_store());
    // MemStore's native lookup only accepts identifiers, so the delegation
    // surfaces its InvalidArgument untouched.
    let err = resolver.find(&[Argument::from(1..=3)]).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn test_string_range_resolves_as_one_slug_key() {
    let resolver = lenient(product_store());
    let found = resolver.find(&[Argument::range("a", "c")]).unwrap();
    // One opaque key "a..c", single-shaped, no match under lenient policy.
    assert_eq!(found.into_single(), None);
}
