//! Error handling tests for malformed catalogs and configuration.
//!
//! Bad rows are quarantined without failing a load; bad files and
//! bad config surface as typed errors with stable codes.

mod common;

use common::{engine_with, scenario_rows, TestDir};
use serde_json::json;
use shelfwise::error::{CatalogError, RowRejection};
use shelfwise::services::{load_rows_from_path, normalize_rows};
use shelfwise::tools::{execute_load, LoadInput};
use shelfwise::{EngineConfig, EngineError, Product, SearchEngine, SearchOptions};
use std::path::Path;

// ============================================================================
// Row Quarantine
// ============================================================================

#[test]
fn test_bad_rows_are_quarantined_not_fatal() {
    let engine = SearchEngine::new();
    let report = engine.load_catalog(&[
        json!({ "id": 1, "name": "Lakme Facewash", "brand": "Lakme" }),
        json!("just a string"),
        json!({ "name": "No Id Cream" }),
        json!({ "id": 3, "brand": "Dove" }),
        json!({ "id": "  ", "name": "Blank Id" }),
        json!(null),
    ]);

    assert_eq!(report.accepted, 1);
    assert_eq!(report.rejected, 5);
    let reasons: Vec<(usize, &RowRejection)> =
        report.rejections.iter().map(|(i, r)| (*i, r)).collect();
    assert_eq!(
        reasons,
        vec![
            (1, &RowRejection::NotAnObject { found: "string" }),
            (2, &RowRejection::MissingId),
            (3, &RowRejection::MissingName),
            (4, &RowRejection::MissingId),
            (5, &RowRejection::NotAnObject { found: "null" }),
        ]
    );

    // The surviving row is fully searchable
    let results = engine.search("lakme", &SearchOptions::default());
    assert_eq!(results[0].id().as_str(), "1");
}

#[test]
fn test_missing_category_defaults_to_uncategorized() {
    let out = normalize_rows(&[json!({ "id": 1, "name": "Mystery Item" })]);

    assert_eq!(out.products[0].category, "Uncategorized");
    assert!(out.products[0].brand.is_none());
}

#[test]
fn test_duplicate_ids_are_counted_and_deduplicated_in_results() {
    let engine = SearchEngine::new();
    let report = engine.load_catalog(&[
        json!({ "id": 7, "name": "Dove Soap", "brand": "Dove" }),
        json!({ "id": 7, "name": "Dove Body Wash", "brand": "Dove" }),
    ]);

    assert_eq!(report.accepted, 2);
    assert_eq!(report.duplicates, 1);

    let results = engine.search("dove", &SearchOptions::default());
    assert_eq!(results.len(), 1);
}

#[test]
fn test_all_rows_rejected_leaves_empty_catalog() {
    let engine = SearchEngine::new();
    let report = engine.load_catalog(&[json!(1), json!([]), json!({})]);

    assert_eq!(report.accepted, 0);
    assert_eq!(report.rejected, 3);
    assert!(engine.is_loaded());
    assert!(engine.search("anything", &SearchOptions::default()).is_empty());
}

#[test]
fn test_rejection_codes_are_stable() {
    assert_eq!(RowRejection::MissingId.code(), "ROW_MISSING_ID");
    assert_eq!(RowRejection::MissingName.code(), "ROW_MISSING_NAME");
    assert_eq!(
        RowRejection::NotAnObject { found: "array" }.code(),
        "ROW_NOT_OBJECT"
    );
}

#[test]
fn test_blank_ids_cannot_reach_load_products() {
    for id in ["", "  "] {
        let row = json!({ "id": id, "name": "Ghost Soap", "category": "Beauty" });
        assert!(
            serde_json::from_value::<Product>(row).is_err(),
            "blank id {id:?} deserialized"
        );
    }

    let products: Vec<Product> = serde_json::from_value(json!([
        { "id": " 11 ", "name": "Pears Soap", "category": "Personal Care" },
        { "id": "12", "name": "Dove Soap", "brand": "Dove", "category": "Beauty" },
    ]))
    .unwrap();

    let engine = SearchEngine::new();
    let report = engine.load_products(products);
    assert_eq!(report.accepted, 2);
    assert!(report.installed);

    let results = engine.search("soap", &SearchOptions::default());
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|m| !m.id().as_str().trim().is_empty()));
    assert!(results.iter().any(|m| m.id().as_str() == "11"));
}

// ============================================================================
// Catalog Files
// ============================================================================

#[test]
fn test_missing_catalog_file_is_read_error() {
    let err = load_rows_from_path(Path::new("/nonexistent/catalog.json")).unwrap_err();

    assert!(matches!(err, CatalogError::Read { .. }));
    assert_eq!(err.code(), "CATALOG_READ_ERROR");
    assert!(err.to_string().contains("catalog.json"));
}

#[test]
fn test_malformed_catalog_file_is_parse_error() {
    let dir = TestDir::new();
    let path = dir.write("broken.json", "[{\"id\": 1,");

    let err = load_rows_from_path(&path).unwrap_err();
    assert_eq!(err.code(), "CATALOG_PARSE_ERROR");
}

#[test]
fn test_wrong_document_shape_is_shape_error() {
    let dir = TestDir::new();

    let err = load_rows_from_path(&dir.write("scalar.json", "42")).unwrap_err();
    assert!(matches!(err, CatalogError::Shape { found: "number" }));

    let err = load_rows_from_path(&dir.write("object.json", r#"{"items": []}"#)).unwrap_err();
    assert!(matches!(err, CatalogError::Shape { found: "object" }));

    let err = load_rows_from_path(&dir.write("nested.json", r#"{"products": "x"}"#)).unwrap_err();
    assert!(matches!(err, CatalogError::Shape { found: "string" }));
}

#[test]
fn test_wrapped_products_document_loads() {
    let dir = TestDir::new();
    let text = json!({ "products": scenario_rows() }).to_string();
    let rows = load_rows_from_path(&dir.write("wrapped.json", &text)).unwrap();

    let engine = engine_with(&rows);
    assert_eq!(engine.stats().products, 2);
}

#[test]
fn test_failed_file_load_keeps_previous_catalog() {
    let engine = engine_with(&scenario_rows());

    let err = execute_load(
        &engine,
        LoadInput {
            path: "/nonexistent/catalog.json".into(),
        },
    )
    .unwrap_err();
    assert!(err.contains("catalog.json"));

    assert_eq!(engine.stats().generation, 1);
    assert!(!engine.search("lakme", &SearchOptions::default()).is_empty());
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_partial_file_takes_defaults() {
    let dir = TestDir::new();
    let path = dir.write(
        "config.json",
        r#"{"weights": {"synonym": 45}, "trending": ["lakme"]}"#,
    );

    let config = EngineConfig::from_path(&path).unwrap();
    assert_eq!(config.weights.synonym, 45);
    assert_eq!(config.weights.exact, 100);
    assert_eq!(config.trending, vec!["lakme"]);
    assert_eq!(config.default_limit, 50);
}

#[test]
fn test_config_zero_default_limit_rejected() {
    let dir = TestDir::new();
    let path = dir.write("config.json", r#"{"default_limit": 0}"#);

    let err = EngineConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, EngineError::Config(_)));
    assert_eq!(err.code(), "CONFIG_ERROR");
}

#[test]
fn test_config_invalid_json_rejected() {
    let dir = TestDir::new();
    let path = dir.write("config.json", "{ not json");

    let err = EngineConfig::from_path(&path).unwrap_err();
    assert_eq!(err.code(), "JSON_ERROR");
}

#[test]
fn test_config_missing_file_is_io_error() {
    let err = EngineConfig::from_path(Path::new("/nonexistent/config.json")).unwrap_err();
    assert_eq!(err.code(), "IO_ERROR");
}
