//! Synthetic catalog generation for benchmarks and load tests.
//!
//! Produces deterministic raw rows in the mixed shapes real catalog feeds
//! use, so benches exercise normalization as well as indexing.

use serde_json::{json, Value};

const BRANDS: &[&str] = &[
    "Lakme", "Dove", "Himalaya", "Nivea", "Pears", "Colgate", "Tata", "Maggi", "Surf", "Lux",
];
const CATEGORIES: &[&str] = &["Beauty", "Personal Care", "Grocery", "Home Care", "Baby Care"];
const NOUNS: &[&str] = &[
    "Facewash", "Soap", "Shampoo", "Cream", "Lotion", "Toothpaste", "Tea", "Noodles",
    "Detergent", "Kajal", "Sunscreen", "Body Wash",
];
const ADJECTIVES: &[&str] = &["Neem", "Aloe", "Herbal", "Classic", "Fresh", "Gentle", "Daily"];

/// Generates `n` raw catalog rows.
///
/// Row shapes rotate between canonical, camelCase and CSV-style keys. Every
/// 50th row has no id so normalization has something to quarantine.
#[must_use]
pub fn synthetic_rows(n: usize) -> Vec<Value> {
    (0..n)
        .map(|i| {
            let brand = BRANDS[i % BRANDS.len()];
            let category = CATEGORIES[(i / 3) % CATEGORIES.len()];
            let noun = NOUNS[(i / 7) % NOUNS.len()];
            let adjective = ADJECTIVES[(i / 11) % ADJECTIVES.len()];
            let name = format!("{brand} {adjective} {noun} {}", i % 97);
            let keywords = vec![noun.to_lowercase(), format!("{} {}", adjective, noun).to_lowercase()];

            if i % 50 == 49 {
                return json!({ "name": name, "brand": brand });
            }
            match i % 3 {
                0 => json!({
                    "id": format!("p{i}"),
                    "name": name,
                    "brand": brand,
                    "category": category,
                    "searchKeywords": keywords,
                }),
                1 => json!({
                    "productId": i,
                    "productName": name,
                    "brandName": brand,
                    "categoryName": category,
                    "keywords": keywords.join(","),
                }),
                _ => json!({
                    "SKU": format!("SKU-{i}"),
                    "Description": name,
                    "Manufacturer": brand,
                    "Type": category,
                    "Tags": keywords.join("|"),
                }),
            }
        })
        .collect()
}

/// Queries covering every strategy: brand, typo, keyword, synonym,
/// multi-word semantic.
pub const SAMPLE_QUERIES: &[&str] = &[
    "lakme",
    "shampo",
    "herbal soap",
    "face wash",
    "deodorant",
    "neem facewash 12",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::normalize_rows;

    #[test]
    fn test_synthetic_rows_normalize() {
        let rows = synthetic_rows(100);
        let out = normalize_rows(&rows);
        assert_eq!(out.rejections.len(), 2);
        assert_eq!(out.products.len(), 98);
        assert!(out.products.iter().all(|p| !p.search_keywords.is_empty()));
    }
}
