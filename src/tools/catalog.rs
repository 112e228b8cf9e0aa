//! Catalog tools: load, browse by category/brand, stats.

use crate::services::{load_rows_from_path, IndexStats, SearchEngine};
use crate::types::Product;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Input for the load tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LoadInput {
    /// Path to a JSON catalog (array of rows, or `{"products": [...]}`)
    pub path: String,
}

/// One quarantined row.
#[derive(Debug, Serialize, JsonSchema)]
pub struct RejectedRow {
    /// Zero-based row index in the source
    pub row: usize,
    /// Machine-readable reason code
    pub code: &'static str,
    pub reason: String,
}

/// Output for the load tool.
#[derive(Debug, Serialize, JsonSchema)]
pub struct LoadOutput {
    pub accepted: usize,
    pub rejected: usize,
    pub duplicates: usize,
    pub generation: u64,
    /// False if a concurrent newer load won and this catalog is not served
    pub installed: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rejections: Vec<RejectedRow>,
}

/// Executes the load tool: reads the file and swaps in a new snapshot.
///
/// # Errors
///
/// Returns an error string if the file cannot be read or is not a
/// catalog document. Individual bad rows are reported, not errors.
pub fn execute_load(engine: &SearchEngine, input: LoadInput) -> Result<LoadOutput, String> {
    let rows = load_rows_from_path(Path::new(&input.path)).map_err(|e| e.to_string())?;
    let report = engine.load_catalog(&rows);

    Ok(LoadOutput {
        accepted: report.accepted,
        rejected: report.rejected,
        duplicates: report.duplicates,
        generation: report.generation,
        installed: report.installed,
        rejections: report
            .rejections
            .into_iter()
            .map(|(row, reason)| RejectedRow {
                row,
                code: reason.code(),
                reason: reason.to_string(),
            })
            .collect(),
    })
}

/// Input for the category and brand browse tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BrowseInput {
    /// Category or brand name (case-insensitive)
    pub name: String,
    /// Maximum products (default: 20)
    #[serde(default = "default_browse_limit")]
    pub limit: usize,
}

fn default_browse_limit() -> usize {
    20
}

/// A catalog product as returned by browse tools.
#[derive(Debug, Serialize, JsonSchema)]
pub struct ProductItem {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub category: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl From<&Product> for ProductItem {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name.clone(),
            brand: p.brand.clone(),
            category: p.category.clone(),
            keywords: p.search_keywords.clone(),
        }
    }
}

/// Output for the category and brand browse tools.
#[derive(Debug, Serialize, JsonSchema)]
pub struct BrowseOutput {
    pub name: String,
    pub products: Vec<ProductItem>,
    pub total_returned: usize,
}

fn browse_output(name: String, products: &[Arc<Product>]) -> BrowseOutput {
    let products: Vec<ProductItem> = products.iter().map(|p| ProductItem::from(&**p)).collect();
    BrowseOutput {
        name,
        total_returned: products.len(),
        products,
    }
}

/// Executes the category browse tool.
#[must_use]
pub fn execute_by_category(engine: &SearchEngine, input: BrowseInput) -> BrowseOutput {
    let products = engine.by_category(&input.name, input.limit);
    browse_output(input.name, &products)
}

/// Executes the brand browse tool.
#[must_use]
pub fn execute_by_brand(engine: &SearchEngine, input: BrowseInput) -> BrowseOutput {
    let products = engine.by_brand(&input.name, input.limit);
    browse_output(input.name, &products)
}

/// Output for the stats tool.
#[derive(Debug, Serialize, JsonSchema)]
pub struct StatsOutput {
    pub loaded: bool,
    pub generation: u64,
    pub products: usize,
    pub names: usize,
    pub brands: usize,
    pub categories: usize,
    pub keywords: usize,
    pub duplicate_ids: usize,
    pub synonym_terms: usize,
}

/// Executes the stats tool.
#[must_use]
pub fn execute_stats(engine: &SearchEngine) -> StatsOutput {
    let IndexStats {
        generation,
        products,
        names,
        brands,
        categories,
        keywords,
        duplicate_ids,
    } = engine.stats();

    StatsOutput {
        loaded: engine.is_loaded(),
        generation,
        products,
        names,
        brands,
        categories,
        keywords,
        duplicate_ids,
        synonym_terms: engine.synonyms().len(),
    }
}
