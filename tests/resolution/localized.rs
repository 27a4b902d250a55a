//! Localized slug storage scenarios
//!
//! With a localized slug field the query checks both the flat form and the
//! nested default-locale form, so legacy flat documents and localized
//! documents resolve side by side.

use crate::common::strict;
use serde_json::json;
use slugfind::{Argument, DocId, Document, MemStore, SlugField};

fn localized_store() -> MemStore {
    let mut store = MemStore::new("articles")
        .with_default_locale("en")
        .with_localized_slugs();
    store.insert(Document::new(
        DocId::new(),
        SlugField::localized([("en", vec!["red-shoes"]), ("de", vec!["rote-schuhe"])]),
        json!({"title": "Red Shoes"}),
    ));
    store.insert(Document::new(
        DocId::new(),
        SlugField::flat(["blue-hat"]),
        json!({"title": "Blue Hat"}),
    ));
    store
}

#[test]
fn test_default_locale_slug_resolves() {
    let resolver = strict(localized_store());
    let found = resolver.find(&[Argument::from("red-shoes")]).unwrap();
    let doc = found.into_single().unwrap();
    assert!(doc.slugs.contains("red-shoes"));
}

#[test]
fn test_legacy_flat_document_still_resolves() {
    let resolver = strict(localized_store());
    let found = resolver.find(&[Argument::from("blue-hat")]).unwrap();
    assert!(found.into_single().is_some());
}

#[test]
fn test_both_forms_resolve_in_one_call() {
    let resolver = strict(localized_store());
    let docs = resolver
        .find(&[Argument::from("red-shoes"), Argument::from("blue-hat")])
        .unwrap()
        .into_vec();
    assert_eq!(docs.len(), 2);
}

#[test]
fn test_non_default_locale_slug_does_not_resolve() {
    let resolver = strict(localized_store());
    // "rote-schuhe" lives under "de"; the query only widens to the default
    // locale, so the strict policy reports it missing.
    let outcome = resolver.find(&[Argument::from("rote-schuhe")]);
    assert!(outcome.is_err());
}
