//! Stemming hook
//!
//! Stemming is supplied by the caller. Any `Fn(&str) -> String` works as a
//! stemmer, so a snowball binding or a lookup table can be plugged in without
//! a wrapper type.

/// Maps a normalized word to its stem
pub trait Stemmer {
    /// Stem a normalized (lowercased) word
    fn stem(&self, word: &str) -> String;
}

/// Identity stemmer: returns the word unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStemmer;

impl Stemmer for NullStemmer {
    #[inline]
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }
}

impl<F> Stemmer for F
where
    F: Fn(&str) -> String,
{
    fn stem(&self, word: &str) -> String {
        self(word)
    }
}
