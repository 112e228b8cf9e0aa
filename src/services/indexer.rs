//! Catalog indexing.
//!
//! Builds the immutable lookup structures a query runs against: products
//! keyed by lowercased full name, brand, category, and curated keyword.
//! No scoring happens here; building is a single O(n) pass.

use crate::types::{Product, ProductId};
use ahash::{AHashMap, AHashSet};
use serde::Serialize;
use std::sync::Arc;

/// Lowercased key → products, remembering key insertion order.
///
/// Lookups go through a hash map; iteration follows the order in which
/// keys were first seen, which keeps suggestions deterministic for a
/// given catalog.
#[derive(Default)]
pub struct KeyedIndex {
    slots: AHashMap<String, usize>,
    entries: Vec<(String, Vec<Arc<Product>>)>,
}

impl KeyedIndex {
    fn insert(&mut self, key: String, product: &Arc<Product>) {
        if key.is_empty() {
            return;
        }
        let slot = match self.slots.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.slots.insert(key.clone(), slot);
                self.entries.push((key, Vec::new()));
                slot
            }
        };
        let bucket = &mut self.entries[slot].1;
        // Repeated keywords on one product must not list it twice
        if !bucket.last().is_some_and(|p| Arc::ptr_eq(p, product)) {
            bucket.push(Arc::clone(product));
        }
    }

    /// Products stored under `key` (already lowercased), in insertion order.
    #[must_use]
    pub fn get(&self, key: &str) -> &[Arc<Product>] {
        self.slots
            .get(key)
            .map_or(&[][..], |&slot| self.entries[slot].1.as_slice())
    }

    /// Keys in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// (key, products) pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Arc<Product>])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for KeyedIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyedIndex")
            .field("keys", &self.len())
            .field("refs", &self.entries.iter().map(|(_, v)| v.len()).sum::<usize>())
            .finish()
    }
}

/// Summary counts for one snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub generation: u64,
    pub products: usize,
    pub names: usize,
    pub brands: usize,
    pub categories: usize,
    pub keywords: usize,
    pub duplicate_ids: usize,
}

/// Immutable index over one catalog version.
///
/// All four maps are derived from the same product list. A refresh builds
/// a new snapshot; this one is never mutated after [`IndexSnapshot::build`].
#[derive(Debug, Default)]
pub struct IndexSnapshot {
    generation: u64,
    products: Vec<Arc<Product>>,
    exact: KeyedIndex,
    keyword: KeyedIndex,
    brand: KeyedIndex,
    category: KeyedIndex,
    duplicate_ids: usize,
}

impl IndexSnapshot {
    /// An empty snapshot (generation 0).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Indexes `products` in input order.
    ///
    /// Duplicate ids are counted and logged but kept: deduplication is a
    /// query-time concern of the ranker.
    #[must_use]
    pub fn build(products: Vec<Product>, generation: u64) -> Self {
        let mut snapshot = Self {
            generation,
            products: Vec::with_capacity(products.len()),
            ..Self::default()
        };
        let mut seen: AHashSet<ProductId> = AHashSet::with_capacity(products.len());

        for product in products {
            if !seen.insert(product.id.clone()) {
                tracing::warn!(id = %product.id, "Duplicate product id in catalog");
                snapshot.duplicate_ids += 1;
            }

            let product = Arc::new(product);
            snapshot
                .exact
                .insert(product.name.trim().to_lowercase(), &product);
            if let Some(brand) = product.brand.as_deref() {
                snapshot.brand.insert(brand.trim().to_lowercase(), &product);
            }
            snapshot
                .category
                .insert(product.category.trim().to_lowercase(), &product);
            for keyword in &product.search_keywords {
                snapshot.keyword.insert(keyword.trim().to_lowercase(), &product);
            }
            snapshot.products.push(product);
        }

        snapshot
    }

    /// Catalog version this snapshot was built from.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Every indexed product, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[must_use]
    pub fn exact_index(&self) -> &KeyedIndex {
        &self.exact
    }

    #[must_use]
    pub fn keyword_index(&self) -> &KeyedIndex {
        &self.keyword
    }

    #[must_use]
    pub fn brand_index(&self) -> &KeyedIndex {
        &self.brand
    }

    #[must_use]
    pub fn category_index(&self) -> &KeyedIndex {
        &self.category
    }

    /// Products in a category, insertion order, no scoring.
    #[must_use]
    pub fn by_category(&self, name: &str, limit: usize) -> Vec<Arc<Product>> {
        Self::lookup(&self.category, name, limit)
    }

    /// Products of a brand, insertion order, no scoring.
    #[must_use]
    pub fn by_brand(&self, name: &str, limit: usize) -> Vec<Arc<Product>> {
        Self::lookup(&self.brand, name, limit)
    }

    fn lookup(index: &KeyedIndex, name: &str, limit: usize) -> Vec<Arc<Product>> {
        let key = name.trim().to_lowercase();
        if key.is_empty() {
            return Vec::new();
        }
        index.get(&key).iter().take(limit).cloned().collect()
    }

    #[must_use]
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            generation: self.generation,
            products: self.products.len(),
            names: self.exact.len(),
            brands: self.brand.len(),
            categories: self.category.len(),
            keywords: self.keyword.len(),
            duplicate_ids: self.duplicate_ids,
        }
    }
}

#[cfg(test)]
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<KeyedIndex>();
    assert_send_sync::<IndexSnapshot>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, brand: Option<&str>, category: &str, kws: &[&str]) -> Product {
        Product {
            id: ProductId::new(id).unwrap(),
            name: name.to_string(),
            brand: brand.map(String::from),
            category: category.to_string(),
            search_keywords: kws.iter().map(|k| (*k).to_string()).collect(),
        }
    }

    fn sample() -> IndexSnapshot {
        IndexSnapshot::build(
            vec![
                product("1", "Lakme Facewash", Some("Lakme"), "Beauty", &["face wash", "Cleanser"]),
                product("2", "Dove Soap", Some("Dove"), "Beauty", &[]),
                product("3", "Tata Tea", None, "Grocery", &["chai", "CHAI"]),
            ],
            1,
        )
    }

    #[test]
    fn test_all_maps_populated() {
        let snap = sample();
        assert_eq!(snap.products().len(), 3);
        assert_eq!(snap.exact_index().get("lakme facewash").len(), 1);
        assert_eq!(snap.brand_index().get("dove").len(), 1);
        assert_eq!(snap.category_index().get("beauty").len(), 2);
        assert_eq!(snap.keyword_index().get("cleanser").len(), 1);
        // product without a brand is absent from the brand index
        assert_eq!(snap.brand_index().len(), 2);
    }

    #[test]
    fn test_repeated_keyword_indexed_once() {
        let snap = sample();
        assert_eq!(snap.keyword_index().get("chai").len(), 1);
    }

    #[test]
    fn test_keys_keep_insertion_order() {
        let snap = sample();
        let keys: Vec<_> = snap.keyword_index().keys().collect();
        assert_eq!(keys, vec!["face wash", "cleanser", "chai"]);
    }

    #[test]
    fn test_lookups_case_insensitive_and_limited() {
        let snap = sample();
        let beauty = snap.by_category("BEAUTY", 10);
        assert_eq!(beauty.len(), 2);
        assert_eq!(beauty[0].id.as_str(), "1");
        assert_eq!(snap.by_category("beauty", 1).len(), 1);
        assert_eq!(snap.by_brand(" lakme ", 5).len(), 1);
        assert!(snap.by_brand("", 5).is_empty());
        assert!(snap.by_brand("nobody", 5).is_empty());
    }

    #[test]
    fn test_duplicates_kept_and_counted() {
        let snap = IndexSnapshot::build(
            vec![
                product("1", "A", None, "X", &[]),
                product("1", "B", None, "X", &[]),
            ],
            4,
        );
        let stats = snap.stats();
        assert_eq!(stats.products, 2);
        assert_eq!(stats.duplicate_ids, 1);
        assert_eq!(stats.generation, 4);
    }

    #[test]
    fn test_empty_snapshot() {
        let snap = IndexSnapshot::empty();
        assert!(snap.is_empty());
        assert_eq!(snap.generation(), 0);
        assert!(snap.by_category("beauty", 10).is_empty());
    }
}
