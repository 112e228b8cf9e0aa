//! Retrieval strategies.
//!
//! Each strategy scans the snapshot independently and emits scored
//! candidates; none of them deduplicates or sorts. The ranker merges
//! their output afterwards.
//!
//! | Strategy | Fires when | Match type |
//! |---|---|---|
//! | [`ExactStrategy`] | query equals a full product name | `exact` |
//! | [`BrandStrategy`] | query equals / overlaps a brand | `brand`, `brand_partial` |
//! | [`FuzzyStrategy`] | a name word or keyword is equal, overlapping, or within edit distance | `fuzzy`, `keyword` |
//! | [`SemanticStrategy`] | query words occur in name or category | `semantic` |
//! | [`SynonymStrategy`] | a synonym key overlaps the query and a mapped keyword is in the name | `synonym` |

use crate::config::ScoreWeights;
use crate::services::distance;
use crate::services::indexer::IndexSnapshot;
use crate::services::synonyms::SynonymTable;
use crate::types::{MatchType, Score, ScoredMatch};
use std::sync::Arc;

/// Everything a strategy needs for one query.
pub struct QueryContext<'a> {
    query: String,
    pub snapshot: &'a IndexSnapshot,
    pub synonyms: &'a SynonymTable,
    pub weights: &'a ScoreWeights,
}

impl<'a> QueryContext<'a> {
    /// Normalizes the query (trim + lowercase).
    ///
    /// Returns `None` for an empty or whitespace-only query, which
    /// short-circuits the whole pipeline.
    #[must_use]
    pub fn new(
        query: &str,
        snapshot: &'a IndexSnapshot,
        synonyms: &'a SynonymTable,
        weights: &'a ScoreWeights,
    ) -> Option<Self> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }
        Some(Self {
            query,
            snapshot,
            synonyms,
            weights,
        })
    }

    /// The lowercased, trimmed query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whitespace-separated query words.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.query.split_whitespace()
    }
}

/// One independent retrieval pass over a snapshot.
pub trait MatchStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Emits every candidate this strategy finds, in scan order.
    fn collect(&self, ctx: &QueryContext<'_>) -> Vec<ScoredMatch>;
}

/// Full-name equality. Only run when the caller asks for exact mode.
pub struct ExactStrategy;

impl MatchStrategy for ExactStrategy {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn collect(&self, ctx: &QueryContext<'_>) -> Vec<ScoredMatch> {
        let score = Score::new(ctx.weights.exact);
        ctx.snapshot
            .exact_index()
            .get(ctx.query())
            .iter()
            .map(|p| ScoredMatch::new(Arc::clone(p), score, MatchType::Exact))
            .collect()
    }
}

/// Brand equality, then mutual containment.
pub struct BrandStrategy;

impl MatchStrategy for BrandStrategy {
    fn name(&self) -> &'static str {
        "brand"
    }

    fn collect(&self, ctx: &QueryContext<'_>) -> Vec<ScoredMatch> {
        let q = ctx.query();
        let mut out = Vec::new();
        for (brand, products) in ctx.snapshot.brand_index().iter() {
            let (score, match_type) = if brand == q {
                (ctx.weights.brand, MatchType::Brand)
            } else if brand.contains(q) || q.contains(brand) {
                (ctx.weights.brand_partial, MatchType::BrandPartial)
            } else {
                continue;
            };
            out.extend(
                products
                    .iter()
                    .map(|p| ScoredMatch::new(Arc::clone(p), Score::new(score), match_type)),
            );
        }
        out
    }
}

/// Scores one term against the query using the tier cascade:
/// equal, contains either way, prefix either way, edit distance.
///
/// Any prefix relation is also a containment, so the prefix tier only
/// matters when `prefix` is configured above `contains`.
#[must_use]
pub fn term_tier(term: &str, query: &str, weights: &ScoreWeights) -> Option<u32> {
    if term.is_empty() {
        return None;
    }
    if term == query {
        return Some(weights.word_exact);
    }
    let contains = term.contains(query) || query.contains(term);
    let prefix = term.starts_with(query) || query.starts_with(term);
    match (contains, prefix) {
        (true, true) => Some(weights.contains.max(weights.prefix)),
        (true, false) => Some(weights.contains),
        (false, true) => Some(weights.prefix),
        (false, false) => {
            distance::within(term, query, weights.max_edit_distance).then_some(weights.edit_distance)
        }
    }
}

/// Splits a lowercased name into words, stripping edge punctuation.
fn name_words(name: &str) -> impl Iterator<Item = &str> {
    name.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
}

/// Name-word tiers (`fuzzy`) and keyword-index tiers (`keyword`).
pub struct FuzzyStrategy;

impl FuzzyStrategy {
    fn name_pass(ctx: &QueryContext<'_>, out: &mut Vec<ScoredMatch>) {
        let q = ctx.query();
        for product in ctx.snapshot.products() {
            let name = product.name.to_lowercase();
            let best = name_words(&name)
                .filter_map(|word| term_tier(word, q, ctx.weights))
                .max();
            if let Some(score) = best {
                out.push(ScoredMatch::new(
                    Arc::clone(product),
                    Score::new(score),
                    MatchType::Fuzzy,
                ));
            }
        }
    }

    fn keyword_pass(ctx: &QueryContext<'_>, out: &mut Vec<ScoredMatch>) {
        let q = ctx.query();
        for (keyword, products) in ctx.snapshot.keyword_index().iter() {
            if let Some(score) = term_tier(keyword, q, ctx.weights) {
                out.extend(products.iter().map(|p| {
                    ScoredMatch::new(Arc::clone(p), Score::new(score), MatchType::Keyword)
                }));
            }
        }
    }
}

impl MatchStrategy for FuzzyStrategy {
    fn name(&self) -> &'static str {
        "fuzzy"
    }

    fn collect(&self, ctx: &QueryContext<'_>) -> Vec<ScoredMatch> {
        let mut out = Vec::new();
        Self::name_pass(ctx, &mut out);
        Self::keyword_pass(ctx, &mut out);
        out
    }
}

/// Per-word substring hits in name and category, summed.
pub struct SemanticStrategy;

impl MatchStrategy for SemanticStrategy {
    fn name(&self) -> &'static str {
        "semantic"
    }

    fn collect(&self, ctx: &QueryContext<'_>) -> Vec<ScoredMatch> {
        let words: Vec<&str> = ctx.words().collect();
        let name_weight = Score::new(ctx.weights.semantic_name);
        let category_weight = Score::new(ctx.weights.semantic_category);
        let mut out = Vec::new();

        for product in ctx.snapshot.products() {
            let name = product.name.to_lowercase();
            let category = product.category.to_lowercase();
            let name_hits = words.iter().filter(|w| name.contains(**w)).count();
            let category_hits = words.iter().filter(|w| category.contains(**w)).count();

            let score = name_weight
                .times(u32::try_from(name_hits).unwrap_or(u32::MAX))
                .merge(category_weight.times(u32::try_from(category_hits).unwrap_or(u32::MAX)));
            if !score.is_zero() {
                out.push(ScoredMatch::new(Arc::clone(product), score, MatchType::Semantic));
            }
        }
        out
    }
}

/// Synonym-table expansion matched against product names.
pub struct SynonymStrategy;

impl MatchStrategy for SynonymStrategy {
    fn name(&self) -> &'static str {
        "synonym"
    }

    fn collect(&self, ctx: &QueryContext<'_>) -> Vec<ScoredMatch> {
        let expansions: Vec<&[String]> = ctx.synonyms.expansions(ctx.query()).collect();
        if expansions.is_empty() {
            return Vec::new();
        }

        let score = Score::new(ctx.weights.synonym);
        ctx.snapshot
            .products()
            .iter()
            .filter(|product| {
                let name = product.name.to_lowercase();
                expansions
                    .iter()
                    .flat_map(|keywords| keywords.iter())
                    .any(|keyword| name.contains(keyword.as_str()))
            })
            .map(|p| ScoredMatch::new(Arc::clone(p), score, MatchType::Synonym))
            .collect()
    }
}

/// Strategies to run for one query, in pipeline order.
#[must_use]
pub fn pipeline(exact_match: bool) -> Vec<&'static dyn MatchStrategy> {
    let mut strategies: Vec<&'static dyn MatchStrategy> = Vec::with_capacity(5);
    if exact_match {
        strategies.push(&ExactStrategy);
    }
    strategies.push(&BrandStrategy);
    strategies.push(&FuzzyStrategy);
    strategies.push(&SemanticStrategy);
    strategies.push(&SynonymStrategy);
    strategies
}
