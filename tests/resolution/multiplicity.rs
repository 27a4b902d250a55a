//! Result shape laws
//!
//! The shape of a find result is fixed by the original argument shape:
//! one scalar gives a single record, anything list-like gives a list, and
//! deduplication changes neither.

use crate::common::{product_store, strict};
use slugfind::{Argument, Resolution};

#[test]
fn test_single_scalar_returns_single_record() {
    let resolver = strict(product_store());
    let found = resolver.find(&[Argument::from("red-shoes")]).unwrap();
    match found {
        Resolution::Single(Some(doc)) => assert!(doc.slugs.contains("red-shoes")),
        other => panic!("expected a single record, got {other:?}"),
    }
}

#[test]
fn test_singleton_sequence_returns_list() {
    let resolver = strict(product_store());
    let found = resolver
        .find(&[Argument::sequence(["red-shoes"])])
        .unwrap();
    match found {
        Resolution::Many(docs) => assert_eq!(docs.len(), 1),
        other => panic!("expected a list, got {other:?}"),
    }
}

#[test]
fn test_two_scalars_return_list() {
    let resolver = strict(product_store());
    let found = resolver
        .find(&[Argument::from("red-shoes"), Argument::from("blue-hat")])
        .unwrap();
    let docs = found.into_vec();
    assert_eq!(docs.len(), 2);
}

#[test]
fn test_duplicate_args_collapse_to_one_key_but_stay_list_shaped() {
    let resolver = strict(product_store());

    let single = resolver
        .find(&[Argument::from("red-shoes")])
        .unwrap()
        .into_single()
        .unwrap();

    let doubled = resolver
        .find(&[Argument::from("red-shoes"), Argument::from("red-shoes")])
        .unwrap();
    assert!(doubled.is_many());

    let docs = doubled.into_vec();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0], single);
}

#[test]
fn test_nested_containers_flatten_into_one_lookup() {
    let resolver = strict(product_store());
    let found = resolver
        .find(&[Argument::sequence([
            Argument::from("red-shoes"),
            Argument::sequence([Argument::from("blue-hat")]),
        ])])
        .unwrap();
    assert_eq!(found.into_vec().len(), 2);
}
