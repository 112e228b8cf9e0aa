//! Serializable tool boundary over the search engine.
//!
//! Each tool pairs an input/output shape with an `execute_*` function.
//! The CLI and any embedding UI layer call these instead of the raw
//! engine types.

mod catalog;
mod search;

// catalog
pub use catalog::{
    execute_by_brand, execute_by_category, execute_load, execute_stats, BrowseInput,
    BrowseOutput, LoadInput, LoadOutput, ProductItem, RejectedRow, StatsOutput,
};

// search
pub use search::{
    execute_search, execute_suggest, execute_trending, SearchInput, SearchOutput,
    SearchResultItem, SuggestInput, SuggestOutput, TrendingOutput,
};
