//! Shared fixtures for the resolution suite

use slugfind::{DocId, Document, MemStore, Resolver, ResolverConfig, SlugField};
use serde_json::json;

/// "products" collection holding red-shoes and blue-hat
pub fn product_store() -> MemStore {
    let mut store = MemStore::new("products");
    store.insert(Document::new(
        DocId::new(),
        SlugField::flat(["red-shoes"]),
        json!({"name": "Red Shoes"}),
    ));
    store.insert(Document::new(
        DocId::new(),
        SlugField::flat(["blue-hat"]),
        json!({"name": "Blue Hat"}),
    ));
    store
}

pub fn strict(store: MemStore) -> Resolver<MemStore> {
    Resolver::new(store)
}

pub fn lenient(store: MemStore) -> Resolver<MemStore> {
    Resolver::with_config(store, ResolverConfig::lenient())
}
