//! Levenshtein edit distance.
//!
//! Classic dynamic-programming distance over Unicode scalar values, with
//! unit cost for insertion, deletion and substitution. Only two rows of
//! the table are kept alive.

/// Computes the exact edit distance between two strings.
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Returns true when `levenshtein(a, b) <= max`.
///
/// Skips the table entirely when the length difference alone exceeds
/// `max`; otherwise the result is exactly the full computation's.
#[must_use]
pub fn within(a: &str, b: &str, max: usize) -> bool {
    let (la, lb) = (a.chars().count(), b.chars().count());
    if la.abs_diff(lb) > max {
        return false;
    }
    levenshtein(a, b) <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_distances() {
        assert_eq!(levenshtein("cat", "bat"), 1);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("facewash", "fcewash"), 1);
        assert_eq!(levenshtein("face wash", "fcewash"), 2);
    }

    #[test]
    fn test_empty_strings() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abcd"), 4);
    }

    #[test]
    fn test_symmetric_and_identity() {
        for (a, b) in [("soap", "sopa"), ("dove", "love"), ("shampoo", "sham")] {
            assert_eq!(levenshtein(a, b), levenshtein(b, a));
        }
        assert_eq!(levenshtein("lakme", "lakme"), 0);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(levenshtein("ñ", "n"), 1);
    }

    #[test]
    fn test_within_matches_full_computation() {
        assert!(within("facewash", "fcewash", 2));
        assert!(within("kitten", "sitting", 3));
        assert!(!within("kitten", "sitting", 2));
        assert!(!within("a", "abcd", 2));
        assert!(within("", "ab", 2));
    }
}
