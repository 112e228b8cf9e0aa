//! Query tools: search, suggest, trending.

use crate::config::SearchOptions;
use crate::services::SearchEngine;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input for the search tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SearchInput {
    /// Free-text query (case-insensitive)
    pub query: String,
    /// Maximum results to return (0 = engine default)
    #[serde(default)]
    pub limit: usize,
    /// Only products in this category (case-insensitive equality)
    #[serde(default)]
    pub category: Option<String>,
    /// Only products whose brand contains this (case-insensitive)
    #[serde(default)]
    pub brand: Option<String>,
    /// Also match the query against full product names
    #[serde(default)]
    pub exact: bool,
}

/// A single ranked product.
#[derive(Debug, Serialize, JsonSchema)]
pub struct SearchResultItem {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub category: String,
    /// Merged relevance score (higher is better)
    pub score: u32,
    /// Strategy that explains the hit
    pub match_type: String,
}

/// Output for the search tool.
#[derive(Debug, Serialize, JsonSchema)]
pub struct SearchOutput {
    /// Ranked results
    pub results: Vec<SearchResultItem>,
    /// Number of results returned
    pub total_returned: usize,
    /// Whether more results exist beyond the limit
    pub has_more: bool,
    /// Query that was executed
    pub query: String,
}

/// Executes the search tool.
///
/// Overcollects by one to report `has_more`.
#[must_use]
pub fn execute_search(engine: &SearchEngine, input: SearchInput) -> SearchOutput {
    let limit = if input.limit > 0 {
        input.limit
    } else {
        engine.default_limit()
    };
    let options = SearchOptions {
        limit: limit.saturating_add(1),
        category: input.category,
        brand: input.brand,
        exact_match: input.exact,
    };

    let results = engine.search(&input.query, &options);
    let has_more = results.len() > limit;

    let items: Vec<_> = results
        .into_iter()
        .take(limit)
        .map(|m| SearchResultItem {
            id: m.product.id.to_string(),
            name: m.product.name.clone(),
            brand: m.product.brand.clone(),
            category: m.product.category.clone(),
            score: m.score.as_u32(),
            match_type: m.match_type.to_string(),
        })
        .collect();

    SearchOutput {
        total_returned: items.len(),
        has_more,
        results: items,
        query: input.query,
    }
}

/// Input for the suggest tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SuggestInput {
    /// Partial term typed so far
    pub query: String,
    /// Maximum suggestions (default: 10)
    #[serde(default = "default_suggest_limit")]
    pub limit: usize,
}

fn default_suggest_limit() -> usize {
    10
}

/// Output for the suggest tool.
#[derive(Debug, Serialize, JsonSchema)]
pub struct SuggestOutput {
    pub suggestions: Vec<String>,
    pub query: String,
}

/// Executes the suggest tool.
#[must_use]
pub fn execute_suggest(engine: &SearchEngine, input: SuggestInput) -> SuggestOutput {
    SuggestOutput {
        suggestions: engine.suggest(&input.query, input.limit),
        query: input.query,
    }
}

/// Output for the trending tool.
#[derive(Debug, Serialize, JsonSchema)]
pub struct TrendingOutput {
    pub terms: Vec<String>,
}

/// Executes the trending tool.
#[must_use]
pub fn execute_trending(engine: &SearchEngine) -> TrendingOutput {
    TrendingOutput {
        terms: engine.trending(),
    }
}
