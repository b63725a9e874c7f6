//! Word normalization
//!
//! Tokens are compared case-insensitively everywhere in the pipeline:
//! stopword lookup, stemming input, and term counting all see the
//! normalized form.

/// Normalize a raw token (Unicode-aware lowercasing)
pub fn normalize_word(word: &str) -> String {
    word.to_lowercase()
}
