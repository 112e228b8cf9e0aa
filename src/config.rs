//! Engine configuration: score weights, per-query options, and the static
//! data (synonyms, trending terms) supplied at construction time.

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default number of results returned by `search`.
pub const DEFAULT_LIMIT: usize = 50;

/// Named score weights for every match tier.
///
/// Ranking depends on the relative order of these values, not their
/// magnitudes; the defaults keep the historical numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Query equals a full product name (exact-match mode only)
    pub exact: u32,
    /// Query equals a brand
    pub brand: u32,
    /// Query and a brand contain one another
    pub brand_partial: u32,
    /// Name word or keyword equals the query
    pub word_exact: u32,
    /// Name word or keyword contains, or is contained by, the query
    pub contains: u32,
    /// Name word or keyword shares a prefix with the query
    pub prefix: u32,
    /// Name word or keyword within `max_edit_distance` of the query
    pub edit_distance: u32,
    /// Added per query word found in the product name
    pub semantic_name: u32,
    /// Added per query word found in the product category
    pub semantic_category: u32,
    /// Synonym-table hit
    pub synonym: u32,
    /// Largest Levenshtein distance still counted as a fuzzy hit
    pub max_edit_distance: usize,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            exact: 100,
            brand: 90,
            brand_partial: 85,
            word_exact: 100,
            contains: 80,
            prefix: 70,
            edit_distance: 60,
            semantic_name: 20,
            semantic_category: 15,
            synonym: 30,
            max_edit_distance: 2,
        }
    }
}

/// Per-query options for `search`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum results to return
    pub limit: usize,
    /// Keep only products whose category equals this (case-insensitive)
    pub category: Option<String>,
    /// Keep only products whose brand contains this (case-insensitive)
    pub brand: Option<String>,
    /// Also run the exact full-name strategy
    pub exact_match: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            category: None,
            brand: None,
            exact_match: false,
        }
    }
}

impl SearchOptions {
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }
}

/// Static engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub weights: ScoreWeights,
    /// Replaces the built-in synonym table when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<BTreeMap<String, Vec<String>>>,
    /// Curated popular terms returned by `trending`
    pub trending: Vec<String>,
    /// Limit used when a caller passes 0
    pub default_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            synonyms: None,
            trending: Vec::new(),
            default_limit: DEFAULT_LIMIT,
        }
    }
}

impl EngineConfig {
    /// Loads configuration from a JSON file. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Io` if the file cannot be read,
    /// `EngineError::Json` if it is not valid JSON for this shape, and
    /// `EngineError::Config` if the values are inconsistent.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Checks value-level invariants serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Config` describing the first violation.
    pub fn validate(&self) -> Result<()> {
        if self.default_limit == 0 {
            return Err(EngineError::Config("default_limit must be at least 1".into()));
        }
        if let Some(synonyms) = &self.synonyms {
            if let Some(key) = synonyms.keys().find(|k| k.trim().is_empty()) {
                return Err(EngineError::Config(format!(
                    "synonym keys must be non-empty (found {key:?})"
                )));
            }
        }
        Ok(())
    }
}

/// Default config file location: `<config_dir>/shelfwise/config.json`.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("shelfwise").join("config.json"))
}
