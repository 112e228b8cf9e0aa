//! shelfwise: in-memory product catalog search and ranking.
//!
//! This library turns a catalog of product rows into a ranked search
//! service using:
//! - Alias-aware normalization of heterogeneous catalog rows
//! - Immutable name/brand/category/keyword indices, swapped atomically
//! - Five independent match strategies (exact, brand, fuzzy/keyword,
//!   semantic, synonym) with exact Levenshtein edit distance
//! - Max-score deduplication and brand-aware tie-breaking
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │          Tools (JSON in / JSON out)         │
//! │  search, suggest, trending, category, brand │
//! └─────────────────┬───────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────┐
//! │               SearchEngine                  │
//! │   RwLock<Option<Arc<IndexSnapshot>>> slot   │
//! └───────┬─────────────────────────┬───────────┘
//!         │ load_catalog            │ search
//!    ┌────▼──────┐          ┌───────▼──────────┐
//!    │Normalizer │          │  Match strategies│
//!    └────┬──────┘          └───────┬──────────┘
//!    ┌────▼──────┐          ┌───────▼──────────┐
//!    │  Indexer  │─snapshot─▶  Merger / Ranker │
//!    └───────────┘          └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use shelfwise::{SearchEngine, SearchOptions};
//! use serde_json::json;
//!
//! let engine = SearchEngine::new();
//! let report = engine.load_catalog(&[
//!     json!({ "id": "1", "name": "Lakme Facewash", "brand": "Lakme", "category": "Beauty" }),
//!     json!({ "Name": "missing id" }),
//! ]);
//! assert_eq!((report.accepted, report.rejected), (1, 1));
//!
//! let hits = engine.search("LAKME", &SearchOptions::default());
//! assert_eq!(hits[0].product.name, "Lakme Facewash");
//! ```

#[doc(hidden)]
pub mod bench_utils;
pub mod config;
pub mod error;
pub mod fmt;
pub mod services;
pub mod tools;
pub mod types;

pub use config::{EngineConfig, ScoreWeights, SearchOptions};
pub use error::{EngineError, Result};
pub use services::{IndexSnapshot, LoadReport, SearchEngine};
pub use types::{MatchType, Product, ProductId, Score, ScoredMatch};
