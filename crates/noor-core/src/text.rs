//! Text primitives shared by the matcher and the filter engine.
//!
//! Matching works on token sets: lower-cased, stripped of anything whose
//! general category is not Letter or Number (so Arabic harakat, which are
//! marks, go too), split on whitespace. Filtering works on raw substrings,
//! optionally case-folded, and keeps marks.

use std::collections::HashSet;
use unicode_categories::UnicodeCategories;

pub type TokenSet = HashSet<String>;

/// Lower-case `text` and keep only letters, numbers and whitespace.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|&c| c.is_letter() || c.is_number() || c.is_whitespace())
        .collect()
}

pub fn tokenize(text: &str) -> TokenSet {
    normalize(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Case-fold for substring comparisons.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// `needle_folded` must already be folded with [`fold`].
pub fn contains_folded(haystack: &str, needle_folded: &str) -> bool {
    if needle_folded.is_empty() {
        return true;
    }
    fold(haystack).contains(needle_folded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_punctuation_and_lowercases() {
        assert_eq!(normalize("Do not become ANGRY!"), "do not become angry");
        assert_eq!(normalize("(to cancel)"), "to cancel");
    }

    #[test]
    fn tokenize_keeps_arabic_and_urdu_letters() {
        let tokens = tokenize("غصہ نہ کرو۔");
        assert!(tokens.contains("غصہ"));
        assert!(tokens.contains("کرو"), "urdu full stop is stripped: {tokens:?}");
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn tokenize_strips_harakat() {
        let voweled = tokenize("لاَ تَغْضَبْ");
        let bare = tokenize("لا تغضب");
        assert_eq!(voweled, bare);
        assert!(bare.contains("تغضب"));
        assert_eq!(normalize("الْبَيْعَانِ"), "البيعان");
    }

    #[test]
    fn tokenize_keeps_numbers() {
        let expected = TokenSet::from(["bukhari".to_string(), "2622".to_string()]);
        assert_eq!(tokenize("Bukhari 2622"), expected);
    }

    #[test]
    fn tokenize_drops_empty_tokens() {
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("?! ...").is_empty());
        assert_eq!(tokenize("  a  b a ").len(), 2);
    }

    #[test]
    fn contains_folded_is_case_insensitive() {
        assert!(contains_folded("Actions are but by Intentions.", "intentions"));
        assert!(!contains_folded("Actions", "anger"));
        assert!(contains_folded("anything", ""));
    }
}
