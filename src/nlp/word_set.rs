//! Per-sentence word sets
//!
//! A word set is the list of normalized, stopword-filtered, stemmed terms of
//! one sentence. Duplicates are kept: term frequencies are counted from it.

use super::normalize::normalize_word;
use super::stemmer::Stemmer;
use super::stopwords::StopwordFilter;
use super::tokenizer::DocumentParser;
use crate::types::Sentence;

/// Stemmed terms of one sentence, in token order, duplicates included
pub type WordSet = Vec<String>;

/// Builds word sets from parser tokens
#[derive(Debug)]
pub struct WordSetBuilder<'a, S> {
    stemmer: &'a S,
    stopwords: &'a StopwordFilter,
}

impl<'a, S: Stemmer> WordSetBuilder<'a, S> {
    /// Create a builder over a stemmer and a stopword filter
    pub fn new(stemmer: &'a S, stopwords: &'a StopwordFilter) -> Self {
        Self { stemmer, stopwords }
    }

    /// Stem a word after normalizing it
    pub fn stem_word(&self, word: &str) -> String {
        self.stemmer.stem(&normalize_word(word))
    }

    /// Build the word set of a single sentence
    pub fn build<P>(&self, parser: &P, sentence: &Sentence) -> WordSet
    where
        P: DocumentParser + ?Sized,
    {
        parser
            .to_words(sentence)
            .iter()
            .map(|w| normalize_word(w))
            .filter(|w| !self.stopwords.contains(w))
            .map(|w| self.stem_word(&w))
            .collect()
    }

    /// Build word sets for every sentence of a document, in order
    pub fn build_all<P>(&self, parser: &P) -> Vec<WordSet>
    where
        P: DocumentParser + ?Sized,
    {
        parser
            .sentences()
            .iter()
            .map(|s| self.build(parser, s))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stemmer::NullStemmer;
    use crate::nlp::tokenizer::PlaintextParser;

    #[test]
    fn test_normalizes_and_keeps_duplicates() {
        let parser = PlaintextParser::from_text("The cat saw the Cat.");
        let stopwords = StopwordFilter::empty();
        let builder = WordSetBuilder::new(&NullStemmer, &stopwords);

        let words = builder.build(&parser, &parser.sentences()[0]);
        assert_eq!(words, vec!["the", "cat", "saw", "the", "cat"]);
    }

    #[test]
    fn test_filters_stopwords_before_stemming() {
        let parser = PlaintextParser::from_text("The cats were running.");
        let stopwords = StopwordFilter::from_list(["the", "WERE"]);
        let stemmer = |w: &str| w.strip_suffix('s').unwrap_or(w).to_string();
        let builder = WordSetBuilder::new(&stemmer, &stopwords);

        let words = builder.build(&parser, &parser.sentences()[0]);
        assert_eq!(words, vec!["cat", "running"]);
    }

    #[test]
    fn test_all_stopwords_yields_empty_set() {
        let parser = PlaintextParser::from_text("The the THE.");
        let stopwords = StopwordFilter::from_list(["the"]);
        let builder = WordSetBuilder::new(&NullStemmer, &stopwords);

        let sets = builder.build_all(&parser);
        assert_eq!(sets.len(), 1);
        assert!(sets[0].is_empty());
    }
}
