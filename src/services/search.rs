//! Search facade over the current catalog snapshot.
//!
//! The engine owns a slot holding the current `Arc<IndexSnapshot>`.
//! Queries clone the `Arc` under a brief read lock and then run without
//! any lock held; a catalog load builds a brand-new snapshot off to the
//! side and swaps the slot under a brief write lock. In-flight queries
//! keep the snapshot they started with.

use crate::config::{EngineConfig, ScoreWeights, SearchOptions};
use crate::error::RowRejection;
use crate::services::indexer::{IndexSnapshot, IndexStats};
use crate::services::matchers::{self, QueryContext};
use crate::services::normalizer;
use crate::services::ranker;
use crate::services::suggest;
use crate::services::synonyms::SynonymTable;
use crate::types::{Product, ScoredMatch};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// Result of one catalog load.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Rows that became products
    pub accepted: usize,
    /// Rows quarantined by the normalizer
    pub rejected: usize,
    /// Accepted products sharing an id with an earlier one
    pub duplicates: usize,
    /// Generation stamped on the snapshot this load produced
    pub generation: u64,
    /// False when a newer load was already being served, so this
    /// snapshot was dropped
    pub installed: bool,
    /// (row index, reason) per quarantined row
    pub rejections: Vec<(usize, RowRejection)>,
}

/// Product search engine.
///
/// Thread-safe (Send + Sync): the snapshot slot is an `RwLock` around an
/// immutable `Arc`, and everything else is read-only after construction.
pub struct SearchEngine {
    current: RwLock<Option<Arc<IndexSnapshot>>>,
    synonyms: SynonymTable,
    weights: ScoreWeights,
    trending: Vec<String>,
    default_limit: usize,
    generation: AtomicU64,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine {
    /// Creates an engine with default weights, the built-in synonym table,
    /// and no trending terms. No catalog is loaded yet.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates an engine from static configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let synonyms = config
            .synonyms
            .as_ref()
            .map_or_else(SynonymTable::builtin, SynonymTable::from_map);

        Self {
            current: RwLock::new(None),
            synonyms,
            weights: config.weights,
            trending: config.trending,
            default_limit: config.default_limit.max(1),
            generation: AtomicU64::new(0),
        }
    }

    /// Normalizes raw rows, builds a new snapshot, and swaps it in.
    ///
    /// Malformed rows are quarantined and counted; they never fail the
    /// load.
    pub fn load_catalog(&self, rows: &[Value]) -> LoadReport {
        let normalized = normalizer::normalize_rows(rows);
        self.install(normalized.products, normalized.rejections)
    }

    /// Indexes already-canonical products and swaps them in.
    ///
    /// `ProductId` cannot be blank (construction and deserialization both
    /// check it), so nothing here needs quarantining.
    pub fn load_products(&self, products: Vec<Product>) -> LoadReport {
        self.install(products, Vec::new())
    }

    fn install(
        &self,
        products: Vec<Product>,
        rejections: Vec<(usize, RowRejection)>,
    ) -> LoadReport {
        let generation = self.next_generation();
        self.install_at(products, rejections, generation)
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn install_at(
        &self,
        products: Vec<Product>,
        rejections: Vec<(usize, RowRejection)>,
        generation: u64,
    ) -> LoadReport {
        let accepted = products.len();
        let rejected = rejections.len();
        // Built outside the lock; queries keep running on the old snapshot
        let snapshot = Arc::new(IndexSnapshot::build(products, generation));

        let installed = {
            let mut slot = self.current.write().unwrap_or_else(|e| e.into_inner());
            let newer = slot
                .as_ref()
                .map_or(true, |existing| existing.generation() < generation);
            if newer {
                *slot = Some(Arc::clone(&snapshot));
            }
            newer
        };

        if installed {
            tracing::info!(accepted, rejected, generation, "Catalog loaded");
        } else {
            tracing::warn!(
                accepted,
                rejected,
                generation,
                "Catalog load superseded by a newer generation, not serving it"
            );
        }

        LoadReport {
            accepted,
            rejected,
            duplicates: snapshot.stats().duplicate_ids,
            generation,
            installed,
            rejections,
        }
    }

    /// The snapshot queries currently run against, if a catalog is loaded.
    #[must_use]
    pub fn snapshot(&self) -> Option<Arc<IndexSnapshot>> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .map(Arc::clone)
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.snapshot().is_some()
    }

    /// Ranked search over the current snapshot.
    ///
    /// Blank queries and an unloaded catalog yield an empty list.
    #[must_use]
    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<ScoredMatch> {
        match self.snapshot() {
            Some(snapshot) => self.search_in(&snapshot, query, options),
            None => Vec::new(),
        }
    }

    /// Ranked search pinned to a specific snapshot.
    #[must_use]
    pub fn search_in(
        &self,
        snapshot: &IndexSnapshot,
        query: &str,
        options: &SearchOptions,
    ) -> Vec<ScoredMatch> {
        let Some(ctx) = QueryContext::new(query, snapshot, &self.synonyms, &self.weights) else {
            return Vec::new();
        };

        let candidates: Vec<Vec<ScoredMatch>> = matchers::pipeline(options.exact_match)
            .into_iter()
            .map(|strategy| {
                let found = strategy.collect(&ctx);
                tracing::trace!(strategy = strategy.name(), candidates = found.len());
                found
            })
            .collect();
        let total: usize = candidates.iter().map(Vec::len).sum();

        let results = ranker::merge(candidates, ctx.query(), options);
        tracing::debug!(
            query = ctx.query(),
            candidates = total,
            returned = results.len(),
            "Search complete"
        );
        results
    }

    /// Autocomplete terms containing the query.
    #[must_use]
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<String> {
        self.snapshot()
            .map(|snapshot| suggest::suggest(&snapshot, query, limit))
            .unwrap_or_default()
    }

    /// Curated trending terms; empty until a non-empty catalog is loaded.
    #[must_use]
    pub fn trending(&self) -> Vec<String> {
        self.snapshot()
            .map(|snapshot| suggest::trending(&snapshot, &self.trending))
            .unwrap_or_default()
    }

    /// Products in a category, in catalog order, without scoring.
    #[must_use]
    pub fn by_category(&self, name: &str, limit: usize) -> Vec<Arc<Product>> {
        self.snapshot()
            .map(|snapshot| snapshot.by_category(name, limit))
            .unwrap_or_default()
    }

    /// Products of a brand, in catalog order, without scoring.
    #[must_use]
    pub fn by_brand(&self, name: &str, limit: usize) -> Vec<Arc<Product>> {
        self.snapshot()
            .map(|snapshot| snapshot.by_brand(name, limit))
            .unwrap_or_default()
    }

    /// Counts for the current snapshot (all zero before the first load).
    #[must_use]
    pub fn stats(&self) -> IndexStats {
        self.snapshot()
            .map(|snapshot| snapshot.stats())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    #[must_use]
    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    /// Limit substituted when a caller asks for 0 results.
    #[must_use]
    pub fn default_limit(&self) -> usize {
        self.default_limit
    }
}

// Compile-time assertions for thread safety.
// These ensure Send+Sync remain implemented and catch regressions.
#[cfg(test)]
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<SearchEngine>();
    assert_send_sync::<LoadReport>();
    assert_send_sync::<SearchOptions>();
};
