//! Core services: normalization, indexing, matching, ranking, and the
//! search facade that ties them together.

pub mod distance;
pub mod indexer;
pub mod matchers;
pub mod normalizer;
pub mod ranker;
mod search;
pub mod suggest;
pub mod synonyms;

pub use indexer::{IndexSnapshot, IndexStats, KeyedIndex};
pub use matchers::{MatchStrategy, QueryContext};
pub use normalizer::{load_rows_from_path, normalize_row, normalize_rows};
pub use search::{LoadReport, SearchEngine};
pub use synonyms::SynonymTable;
