//! Not-found policy scenarios

use crate::common::{lenient, product_store, strict};
use slugfind::{Argument, Error};

#[test]
fn test_strict_policy_names_exactly_the_missing_keys() {
    let resolver = strict(product_store());
    let err = resolver
        .find(&[Argument::from("red-shoes"), Argument::from("green-socks")])
        .unwrap_err();

    match err {
        Error::NotFound {
            collection,
            requested,
            missing,
        } => {
            assert_eq!(collection, "products");
            assert_eq!(requested, vec!["red-shoes", "green-socks"]);
            assert_eq!(missing, vec!["green-socks"]);
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_lenient_policy_returns_partial_result() {
    let resolver = lenient(product_store());
    let docs = resolver
        .find(&[Argument::from("red-shoes"), Argument::from("green-socks")])
        .unwrap()
        .into_vec();

    assert_eq!(docs.len(), 1);
    assert!(docs[0].slugs.contains("red-shoes"));
}

#[test]
fn test_lenient_single_miss_returns_none() {
    let resolver = lenient(product_store());
    let found = resolver.find(&[Argument::from("green-socks")]).unwrap();
    assert_eq!(found.into_single(), None);
}

#[test]
fn test_strict_single_miss_raises() {
    let resolver = strict(product_store());
    let err = resolver.find(&[Argument::from("green-socks")]).unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn test_lenient_multi_miss_returns_empty_list() {
    let resolver = lenient(product_store());
    let found = resolver
        .find(&[Argument::from("green-socks"), Argument::from("purple-coat")])
        .unwrap();
    assert!(found.is_many());
    assert!(found.into_vec().is_empty());
}
