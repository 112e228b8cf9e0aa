//! Raw catalog row normalization.
//!
//! Catalog sources disagree on field names (`name` vs `Name` vs
//! `Description`, `id` vs `productId` vs `SKU`). This module is the only
//! place that knows about those aliases: everything downstream sees a
//! canonical [`Product`].

use crate::error::{json_kind, CatalogError, CatalogResult, RowRejection};
use crate::types::{Product, ProductId};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Aliases per canonical field, in priority order. First non-empty wins.
const ID_FIELDS: &[&str] = &["id", "ID", "Id", "productId", "product_id", "sku", "SKU"];
const NAME_FIELDS: &[&str] = &[
    "name",
    "Name",
    "productName",
    "product_name",
    "title",
    "Title",
    "Description",
    "description",
];
const BRAND_FIELDS: &[&str] = &[
    "brand",
    "Brand",
    "brandName",
    "brand_name",
    "manufacturer",
    "Manufacturer",
];
const CATEGORY_FIELDS: &[&str] = &[
    "category",
    "Category",
    "categoryName",
    "category_name",
    "type",
    "Type",
];
const KEYWORD_FIELDS: &[&str] = &[
    "searchKeywords",
    "search_keywords",
    "keywords",
    "Keywords",
    "tags",
    "Tags",
];

/// Category assigned to rows that carry none.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Outcome of normalizing a batch of raw rows.
#[derive(Debug, Clone, Default)]
pub struct Normalized {
    pub products: Vec<Product>,
    /// (row index, reason) for every quarantined row
    pub rejections: Vec<(usize, RowRejection)>,
}

/// Normalizes a single raw row.
///
/// # Errors
///
/// Returns the [`RowRejection`] explaining why the row cannot become a
/// product. Rejection is per-row and never aborts a batch.
pub fn normalize_row(row: &Value) -> Result<Product, RowRejection> {
    let fields = row.as_object().ok_or(RowRejection::NotAnObject {
        found: json_kind(row),
    })?;

    let id = first_text(fields, ID_FIELDS)
        .and_then(ProductId::new)
        .ok_or(RowRejection::MissingId)?;
    let name = first_text(fields, NAME_FIELDS).ok_or(RowRejection::MissingName)?;
    let brand = first_text(fields, BRAND_FIELDS);
    let category = first_text(fields, CATEGORY_FIELDS).unwrap_or_else(|| UNCATEGORIZED.to_string());
    let search_keywords = first_keywords(fields, KEYWORD_FIELDS);

    Ok(Product {
        id,
        name,
        brand,
        category,
        search_keywords,
    })
}

/// Normalizes a batch, quarantining bad rows instead of failing.
pub fn normalize_rows(rows: &[Value]) -> Normalized {
    let mut out = Normalized {
        products: Vec::with_capacity(rows.len()),
        rejections: Vec::new(),
    };

    for (index, row) in rows.iter().enumerate() {
        match normalize_row(row) {
            Ok(product) => out.products.push(product),
            Err(reason) => {
                tracing::warn!(row = index, code = reason.code(), "Quarantined catalog row: {reason}");
                out.rejections.push((index, reason));
            }
        }
    }

    out
}

/// Extracts catalog rows from a parsed JSON document.
///
/// Accepts a bare array, or an object carrying a `products` array.
///
/// # Errors
///
/// Returns `CatalogError::Shape` for any other document shape.
pub fn catalog_rows(document: Value) -> CatalogResult<Vec<Value>> {
    match document {
        Value::Array(rows) => Ok(rows),
        Value::Object(mut map) => match map.remove("products") {
            Some(Value::Array(rows)) => Ok(rows),
            Some(other) => Err(CatalogError::Shape {
                found: json_kind(&other),
            }),
            None => Err(CatalogError::Shape { found: "object" }),
        },
        other => Err(CatalogError::Shape {
            found: json_kind(&other),
        }),
    }
}

/// Reads and parses a catalog JSON file into raw rows.
///
/// # Errors
///
/// Returns `CatalogError::Read` if the file cannot be read,
/// `CatalogError::Parse` for invalid JSON, and `CatalogError::Shape`
/// if the document holds no row array.
pub fn load_rows_from_path(path: &Path) -> CatalogResult<Vec<Value>> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document: Value = serde_json::from_str(&raw)?;
    catalog_rows(document)
}

fn text_of(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

fn first_text(fields: &Map<String, Value>, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .filter_map(|alias| fields.get(*alias))
        .find_map(text_of)
}

fn keywords_of(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(text_of).collect(),
        Value::String(s) => s
            .split([',', '|'])
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(String::from)
            .collect(),
        _ => Vec::new(),
    }
}

fn first_keywords(fields: &Map<String, Value>, aliases: &[&str]) -> Vec<String> {
    aliases
        .iter()
        .filter_map(|alias| fields.get(*alias))
        .map(keywords_of)
        .find(|keywords| !keywords.is_empty())
        .unwrap_or_default()
}
