//! Free text to keyword sets.
//!
//! Keywords are lowercase runs of ASCII letters and digits longer than two
//! characters. Everything else, underscore included, is dropped before the
//! text is split on whitespace, so `"C++/Rust_dev"` becomes the single word
//! `"crustdev"`.

use std::collections::BTreeSet;

pub type KeywordSet = BTreeSet<String>;

/// Tokens of this length or shorter are noise ("in", "is", "of").
pub const MIN_KEYWORD_LEN: usize = 3;

pub fn tokenize(text: &str) -> KeywordSet {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| word.len() >= MIN_KEYWORD_LEN)
        .map(str::to_string)
        .collect()
}

/// Bidirectional substring containment between two keywords.
pub fn keywords_overlap(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}
