//! Colloquial-term synonym table.
//!
//! Maps what shoppers type ("soap") to the words product names actually
//! use ("cleanser", "hand wash"). Loaded once at construction, read-only
//! afterwards.

use std::collections::BTreeMap;

/// Built-in household and personal-care synonyms.
const BUILTIN_SYNONYMS: &[(&str, &[&str])] = &[
    ("soap", &["cleanser", "wash", "bar", "hand wash"]),
    ("facewash", &["face wash", "cleanser", "foam", "scrub"]),
    ("shampoo", &["hair wash", "hair cleanser", "conditioner"]),
    ("moisturizer", &["cream", "lotion", "moisturiser", "balm"]),
    ("sunscreen", &["sunblock", "spf", "sun protection"]),
    ("lipstick", &["lip color", "lip colour", "lip tint", "lip"]),
    ("makeup", &["foundation", "kajal", "mascara", "compact", "primer"]),
    ("perfume", &["fragrance", "eau de", "scent", "deo"]),
    ("deodorant", &["deo", "body spray", "antiperspirant", "roll on"]),
    ("toothpaste", &["dental", "paste", "oral care", "whitening"]),
    ("detergent", &["washing powder", "laundry", "liquid detergent"]),
    ("diaper", &["nappy", "pants", "baby care"]),
    ("oil", &["hair oil", "coconut", "almond"]),
    ("snacks", &["chips", "namkeen", "biscuits", "cookies"]),
    ("tea", &["chai", "green tea", "masala"]),
];

/// Immutable term → keywords mapping.
///
/// Keys and keywords are stored lowercased; entries iterate in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymTable {
    entries: Vec<(String, Vec<String>)>,
}

impl SynonymTable {
    /// Creates an empty table (synonym strategy never fires).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in household/personal-care table.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_pairs(
            BUILTIN_SYNONYMS
                .iter()
                .map(|(k, vs)| (k.to_string(), vs.iter().map(|v| (*v).to_string()).collect())),
        )
    }

    /// Builds a table from configuration data.
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, Vec<String>>) -> Self {
        Self::from_pairs(map.iter().map(|(k, vs)| (k.clone(), vs.clone())))
    }

    fn from_pairs(pairs: impl IntoIterator<Item = (String, Vec<String>)>) -> Self {
        let mut merged: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (key, keywords) in pairs {
            let key = key.trim().to_lowercase();
            if key.is_empty() {
                continue;
            }
            let slot = merged.entry(key).or_default();
            for keyword in keywords {
                let keyword = keyword.trim().to_lowercase();
                if !keyword.is_empty() && !slot.contains(&keyword) {
                    slot.push(keyword);
                }
            }
        }
        Self {
            entries: merged.into_iter().filter(|(_, v)| !v.is_empty()).collect(),
        }
    }

    /// Keyword sets whose key contains, or is contained by, the query.
    ///
    /// `query` must already be lowercased and trimmed.
    pub fn expansions<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a [String]> + 'a {
        self.entries
            .iter()
            .filter(move |(key, _)| query.contains(key.as_str()) || key.contains(query))
            .map(|(_, keywords)| keywords.as_slice())
    }

    /// Keywords mapped from an exact key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[String]> {
        let key = key.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_slice())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
