//! Collate - Locale-Folded Text Comparison
//!
//! Sorting table cells by raw byte order puts "Zulu" before "ábaco" and
//! splits case variants apart. Text comparison here goes through a folded
//! collation key: NFKD normalization, combining marks stripped, lowercased.
//! Ties on the folded key fall back to the raw strings so distinct inputs
//! keep a deterministic order.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Build the folded collation key for a string.
pub fn collation_key(text: &str) -> String {
    text.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare two strings by folded collation key, raw text as tiebreaker.
pub fn cmp_text(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}
