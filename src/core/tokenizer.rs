//! Tokenizer: splits text into whitespace-delimited words

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Split text into words.
///
/// Leading and trailing whitespace is ignored and runs of whitespace count
/// as one separator. Empty or whitespace-only text has no words.
pub fn tokenize(text: &str) -> Vec<&str> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    RE_WHITESPACE.split(text).collect()
}

/// Number of words in text
pub fn token_count(text: &str) -> usize {
    tokenize(text).len()
}

// =============================================================================
// TESTS
// =============================================================================
