//! Merging, deduplication and ranking of strategy output.
//!
//! Strategies emit candidates in scan order, not score order, so
//! deduplication must never be "first seen wins": it keeps the maximum
//! score per product id regardless of which strategy ran first.

use crate::config::SearchOptions;
use crate::types::{ProductId, ScoredMatch};
use ahash::AHashMap;
use std::cmp::Ordering;

/// Collapses candidates to one entry per product id.
///
/// The surviving entry carries the maximum score seen for that id. Its
/// match type is the highest-precedence type that hit the product (see
/// [`crate::types::MatchType`] ordering), so a brand hit stays labelled
/// `brand` even when a name-word tier scored higher. Output keeps the
/// order in which ids were first seen.
#[must_use]
pub fn dedup_max(candidate_lists: Vec<Vec<ScoredMatch>>) -> Vec<ScoredMatch> {
    let estimated: usize = candidate_lists.iter().map(Vec::len).sum();
    let mut slots: AHashMap<ProductId, usize> = AHashMap::with_capacity(estimated);
    let mut merged: Vec<ScoredMatch> = Vec::with_capacity(estimated);

    for candidate in candidate_lists.into_iter().flatten() {
        match slots.get(candidate.id()) {
            Some(&slot) => {
                let current = &mut merged[slot];
                current.match_type = current.match_type.min(candidate.match_type);
                if candidate.score > current.score {
                    current.score = candidate.score;
                    current.product = candidate.product;
                }
            }
            None => {
                slots.insert(candidate.id().clone(), merged.len());
                merged.push(candidate);
            }
        }
    }

    merged
}

/// Ranking order for one query.
///
/// 1. score, descending
/// 2. brand relevance: a product whose brand contains or is contained by
///    the query sorts before one whose brand does not
/// 3. shorter product name first
fn compare(a: &ScoredMatch, b: &ScoredMatch, query: &str) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| {
            let a_rel = a.product.brand_relates_to(query);
            let b_rel = b.product.brand_relates_to(query);
            b_rel.cmp(&a_rel)
        })
        .then_with(|| {
            a.product
                .name
                .chars()
                .count()
                .cmp(&b.product.name.chars().count())
        })
}

/// Sorts in place. Stable, so full ties keep first-seen order.
///
/// `query` must already be lowercased and trimmed.
pub fn rank(matches: &mut [ScoredMatch], query: &str) {
    matches.sort_by(|a, b| compare(a, b, query));
}

fn normalized_filter(filter: Option<&str>) -> Option<String> {
    filter
        .map(|f| f.trim().to_lowercase())
        .filter(|f| !f.is_empty())
}

/// Applies category/brand filters to a ranked list, then truncates.
///
/// Category must equal the filter case-insensitively; brand must contain
/// it case-insensitively. Blank filters are ignored.
#[must_use]
pub fn filter_and_limit(matches: Vec<ScoredMatch>, options: &SearchOptions) -> Vec<ScoredMatch> {
    let category = normalized_filter(options.category.as_deref());
    let brand = normalized_filter(options.brand.as_deref());

    matches
        .into_iter()
        .filter(|m| {
            category
                .as_deref()
                .map_or(true, |c| m.product.category.trim().to_lowercase() == c)
        })
        .filter(|m| {
            brand.as_deref().map_or(true, |b| {
                m.product
                    .brand_lower()
                    .is_some_and(|product_brand| product_brand.contains(b))
            })
        })
        .take(options.limit)
        .collect()
}

/// Full merge pipeline: dedup by max score, rank, filter, truncate.
#[must_use]
pub fn merge(
    candidate_lists: Vec<Vec<ScoredMatch>>,
    query: &str,
    options: &SearchOptions,
) -> Vec<ScoredMatch> {
    let mut merged = dedup_max(candidate_lists);
    rank(&mut merged, query);
    filter_and_limit(merged, options)
}
