//! Type-safe newtypes and value types for shelfwise.
//!
//! These types carry the domain concepts every other module speaks in:
//! product identity, integer relevance scores, the strategy tag attached to
//! a scored candidate, and the canonical product record itself.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Catalog identifier for a product.
///
/// Always non-empty: the normalizer refuses to construct a [`Product`]
/// without one, so every index key derived from it is meaningful.
///
/// Deserialization goes through [`ProductId::new`], so a blank id in a
/// serialized `Product` is a deserialization error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    /// Creates an id, returning `None` for empty or whitespace-only input.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == id.len() {
            Some(Self(id))
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProductId {
    type Error = &'static str;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::new(id).ok_or("product id must not be blank")
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

/// Integer relevance score.
///
/// Additive strategies (semantic) accumulate with [`Score::merge`], which
/// saturates instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u32);

impl Score {
    /// Zero relevance score.
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Combines two scores with saturating addition.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Multiplies this score by a hit count.
    #[must_use]
    pub const fn times(self, count: u32) -> Self {
        Self(self.0.saturating_mul(count))
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Score {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Which retrieval strategy produced a candidate.
///
/// Variant order is label precedence: when several strategies hit the same
/// product, the merged result is labelled with the earliest variant. The
/// order follows the pipeline, with the fuzzy name pass ahead of the
/// keyword pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Exact,
    Brand,
    BrandPartial,
    Fuzzy,
    Keyword,
    Semantic,
    Synonym,
}

impl MatchType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Brand => "brand",
            Self::BrandPartial => "brand_partial",
            Self::Fuzzy => "fuzzy",
            Self::Keyword => "keyword",
            Self::Semantic => "semantic",
            Self::Synonym => "synonym",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical product record.
///
/// Produced only by the normalizer; immutable once built and shared across
/// indices and results as `Arc<Product>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub search_keywords: Vec<String>,
}

impl Product {
    /// Lowercased brand, if present.
    #[must_use]
    pub fn brand_lower(&self) -> Option<String> {
        self.brand.as_deref().map(str::to_lowercase)
    }

    /// Returns true when the lowercased brand contains, or is contained by,
    /// the given lowercased query.
    #[must_use]
    pub fn brand_relates_to(&self, query: &str) -> bool {
        match self.brand_lower() {
            Some(brand) => !brand.is_empty() && (brand.contains(query) || query.contains(&brand)),
            None => false,
        }
    }
}

/// A product annotated with its relevance for one query.
///
/// Holds a shared reference to the snapshot's product; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredMatch {
    pub product: Arc<Product>,
    pub score: Score,
    pub match_type: MatchType,
}

impl ScoredMatch {
    #[must_use]
    pub fn new(product: Arc<Product>, score: Score, match_type: MatchType) -> Self {
        Self {
            product,
            score,
            match_type,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ProductId {
        &self.product.id
    }
}

// Compile-time assertions for thread safety.
// These ensure Send+Sync remain implemented and catch regressions.
#[cfg(test)]
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<ProductId>();
    assert_send_sync::<Score>();
    assert_send_sync::<MatchType>();
    assert_send_sync::<Product>();
    assert_send_sync::<ScoredMatch>();
};
