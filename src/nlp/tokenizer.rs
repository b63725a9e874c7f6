//! Sentence and word tokenization
//!
//! LexRank only needs two things from a parser: the ordered sentences of a
//! document and the raw word tokens of each sentence. [`DocumentParser`] is
//! that boundary; [`PlaintextParser`] implements it with Unicode text
//! segmentation (UAX #29) via [`Tokenizer`].

use crate::types::Sentence;
use unicode_segmentation::UnicodeSegmentation;

/// Source of sentences and their word tokens
///
/// Implementors must number sentences by position: `sentences()[i].index == i`.
pub trait DocumentParser {
    /// The document's sentences in reading order
    fn sentences(&self) -> &[Sentence];

    /// Split a sentence into raw (unnormalized) word tokens
    fn to_words(&self, sentence: &Sentence) -> Vec<String>;
}

/// Unicode-aware sentence and word splitter
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer
    pub fn new() -> Self {
        Self
    }

    /// Split text into sentences, skipping blank segments
    ///
    /// Offsets are byte offsets into `text` of the trimmed sentence.
    pub fn split_sentences(&self, text: &str) -> Vec<Sentence> {
        let mut sentences = Vec::new();

        for (offset, raw) in text.split_sentence_bound_indices() {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }
            let start = offset + (raw.len() - raw.trim_start().len());
            let end = start + trimmed.len();
            sentences.push(Sentence::new(trimmed, start, end, sentences.len()));
        }

        sentences
    }

    /// Split text into word tokens (punctuation and whitespace dropped)
    pub fn split_words(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(str::to_string).collect()
    }
}

/// A plain-text document ready for summarization
#[derive(Debug, Clone, Default)]
pub struct PlaintextParser {
    sentences: Vec<Sentence>,
    tokenizer: Tokenizer,
}

impl PlaintextParser {
    /// Parse a document from text
    pub fn from_text(text: &str) -> Self {
        let tokenizer = Tokenizer::new();
        Self {
            sentences: tokenizer.split_sentences(text),
            tokenizer,
        }
    }

    /// Get the number of sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check if the document has no sentences
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl DocumentParser for PlaintextParser {
    fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    fn to_words(&self, sentence: &Sentence) -> Vec<String> {
        self.tokenizer.split_words(&sentence.text)
    }
}
