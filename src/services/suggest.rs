//! Autocomplete suggestions and trending terms.

use crate::services::indexer::IndexSnapshot;
use ahash::AHashSet;

/// Index keys containing the query: brands, then categories, then
/// keywords, each in index order. Deduplicated, truncated to `limit`.
///
/// Returns lowercased keys. A blank query yields nothing.
#[must_use]
pub fn suggest(snapshot: &IndexSnapshot, query: &str, limit: usize) -> Vec<String> {
    let query = query.trim().to_lowercase();
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut seen: AHashSet<&str> = AHashSet::new();
    snapshot
        .brand_index()
        .keys()
        .chain(snapshot.category_index().keys())
        .chain(snapshot.keyword_index().keys())
        .filter(|key| key.contains(query.as_str()))
        .filter(|key| seen.insert(*key))
        .take(limit)
        .map(String::from)
        .collect()
}

/// The curated trending list, or nothing while the catalog is empty.
///
/// Terms come from configuration; they are not derived from query logs.
#[must_use]
pub fn trending(snapshot: &IndexSnapshot, curated: &[String]) -> Vec<String> {
    if snapshot.is_empty() {
        return Vec::new();
    }
    curated.to_vec()
}
