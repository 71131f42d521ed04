//! Label collation
//!
//! Labels in the dataset mix transliterations with diacritics
//! ("Abraham ibn Da'ud", "Ḥasdai Crescas", "Gersonides"). Ordering compares a
//! folded key first: compatibility decomposition, combining marks removed,
//! lowercased. Ties fall back to the raw label so the order stays total.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Folded comparison key for a label
pub fn collation_key(label: &str) -> String {
    label
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare two labels the way a reader expects an index to be ordered
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_primary_order() {
        assert_eq!(compare_labels("abraham", "Baruch"), Ordering::Less);
        assert_eq!(compare_labels("Zerahiah", "aaron"), Ordering::Greater);
    }

    #[test]
    fn test_diacritics_fold() {
        assert_eq!(collation_key("Ḥasdai"), "hasdai");
        assert_eq!(compare_labels("Ḥasdai Crescas", "Hillel of Verona"), Ordering::Less);
    }

    #[test]
    fn test_ties_are_total() {
        assert_eq!(compare_labels("Rashi", "Rashi"), Ordering::Equal);
        assert_ne!(compare_labels("rashi", "Rashi"), Ordering::Equal);
    }
}
