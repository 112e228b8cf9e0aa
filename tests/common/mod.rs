//! Common test utilities for shelfwise integration tests.
//!
//! Provides catalog fixtures in the row shapes real feeds use, plus
//! helpers for wiring an engine to them.

#![allow(dead_code)] // Test utilities may not all be used in every test file

use serde_json::{json, Value};
use shelfwise::{EngineConfig, SearchEngine, SearchOptions};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// The two-product catalog used by the ranking scenarios.
pub fn scenario_rows() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "name": "Lakme Facewash",
            "brand": "Lakme",
            "category": "Beauty",
            "searchKeywords": ["face wash", "cleanser"],
        }),
        json!({ "id": 2, "name": "Dove Soap", "brand": "Dove", "category": "Beauty" }),
    ]
}

/// A broader catalog mixing canonical, camelCase and CSV-style rows.
pub fn grocery_rows() -> Vec<Value> {
    vec![
        json!({ "id": "g1", "name": "Tata Tea Gold", "brand": "Tata", "category": "Grocery",
                "searchKeywords": ["tea", "chai"] }),
        json!({ "productId": "g2", "productName": "Maggi Noodles", "brandName": "Maggi",
                "categoryName": "Grocery", "keywords": "noodles,instant" }),
        json!({ "SKU": "h1", "Description": "Surf Excel Detergent", "Manufacturer": "Surf",
                "Type": "Home Care", "Tags": "detergent|washing powder" }),
        json!({ "id": "b1", "name": "Himalaya Neem Face Wash", "brand": "Himalaya",
                "category": "Beauty", "searchKeywords": ["face wash", "neem"] }),
        json!({ "id": "b2", "name": "Nivea Soft Cream", "brand": "Nivea", "category": "Beauty",
                "searchKeywords": ["moisturizer", "cream"] }),
        json!({ "id": "p1", "name": "Colgate Strong Teeth", "brand": "Colgate",
                "category": "Personal Care", "searchKeywords": ["toothpaste"] }),
        json!({ "id": "p2", "name": "Pears Pure Soap", "brand": "Pears",
                "category": "Personal Care" }),
    ]
}

/// An engine with default configuration and `rows` loaded.
pub fn engine_with(rows: &[Value]) -> SearchEngine {
    let engine = SearchEngine::new();
    engine.load_catalog(rows);
    engine
}

/// An engine with `config` and `rows` loaded.
pub fn engine_with_config(config: EngineConfig, rows: &[Value]) -> SearchEngine {
    let engine = SearchEngine::with_config(config);
    engine.load_catalog(rows);
    engine
}

/// Ids of a default-options search, in ranked order.
pub fn search_ids(engine: &SearchEngine, query: &str) -> Vec<String> {
    engine
        .search(query, &SearchOptions::default())
        .iter()
        .map(|m| m.id().to_string())
        .collect()
}

/// A temp directory holding files written by a test.
pub struct TestDir {
    pub dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Writes `content` to `name` and returns its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Writes `rows` as a JSON array to `name` and returns its path.
    pub fn write_rows(&self, name: &str, rows: &[Value]) -> PathBuf {
        let text = serde_json::to_string(rows).expect("Failed to serialize rows");
        self.write(name, &text)
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
