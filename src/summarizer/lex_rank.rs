//! LexRank summarizer
//!
//! Ranks sentences by eigenvector centrality in a TF·IDF cosine similarity
//! graph and returns the best ones in document order. Stages run strictly in
//! sequence, each consuming only the previous stage's output:
//!
//! 1. word sets (normalize, drop stopwords, stem)
//! 2. term weights (TF per sentence, IDF over the document)
//! 3. similarity graph (cosine, threshold, row-normalize)
//! 4. centrality (power iteration) and selection
//!
//! All intermediate state is owned by a single call; a summarizer can be
//! shared across threads and documents.

use crate::errors::Result;
use crate::graph::csr::CsrGraph;
use crate::graph::matrix::SimilarityMatrix;
use crate::nlp::stemmer::{NullStemmer, Stemmer};
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{DocumentParser, PlaintextParser};
use crate::nlp::word_set::{WordSet, WordSetBuilder};
use crate::pagerank::power::PowerMethod;
use crate::pagerank::PowerIterationResult;
use crate::summarizer::selector::SentenceSelector;
use crate::summarizer::term_weights::{compute_idf, compute_tf};
use crate::types::{ItemsCount, LexRankConfig, Sentence};

/// Enter a tracing span for a ranking stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("lexrank_stage", stage = $name).entered();
    };
}

/// A selected sentence with its centrality rating
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSentence {
    /// The sentence
    pub sentence: Sentence,
    /// Centrality score
    pub rating: f64,
}

/// Summary together with convergence details
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryResult {
    /// Selected sentences in document order
    pub sentences: Vec<RankedSentence>,
    /// Power iterations performed
    pub iterations: usize,
    /// Final convergence delta
    pub delta: f64,
    /// Whether power iteration converged before the iteration cap
    pub converged: bool,
}

/// LexRank extractive summarizer
#[derive(Debug, Clone)]
pub struct LexRankSummarizer<S = NullStemmer> {
    config: LexRankConfig,
    stemmer: S,
    stopwords: StopwordFilter,
}

impl Default for LexRankSummarizer<NullStemmer> {
    fn default() -> Self {
        Self::new()
    }
}

impl LexRankSummarizer<NullStemmer> {
    /// Create a summarizer with default config and no stemming
    pub fn new() -> Self {
        Self {
            config: LexRankConfig::default(),
            stemmer: NullStemmer,
            stopwords: StopwordFilter::empty(),
        }
    }

    /// Create a summarizer with a custom config and no stemming
    pub fn with_config(config: LexRankConfig) -> Result<Self> {
        Self::with_stemmer(config, NullStemmer)
    }
}

impl<S: Stemmer> LexRankSummarizer<S> {
    /// Create a summarizer with a custom config and stemmer
    ///
    /// The stopword set is resolved here and stays fixed for the lifetime of
    /// the summarizer.
    pub fn with_stemmer(config: LexRankConfig, stemmer: S) -> Result<Self> {
        config.validate()?;
        let stopwords = StopwordFilter::from_config(&config);
        Ok(Self {
            config,
            stemmer,
            stopwords,
        })
    }

    /// The active configuration
    pub fn config(&self) -> &LexRankConfig {
        &self.config
    }

    /// The normalized stopword set
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Build the word set of one sentence
    pub fn to_word_set<P>(&self, parser: &P, sentence: &Sentence) -> WordSet
    where
        P: DocumentParser + ?Sized,
    {
        WordSetBuilder::new(&self.stemmer, &self.stopwords).build(parser, sentence)
    }

    /// Compute the centrality score of every sentence
    ///
    /// Scores are indexed by sentence position. An empty document yields an
    /// empty, converged result.
    pub fn rate_sentences<P>(&self, parser: &P) -> PowerIterationResult
    where
        P: DocumentParser + ?Sized,
    {
        if parser.sentences().is_empty() {
            return PowerIterationResult::new(Vec::new(), 0, 0.0, true);
        }

        let word_sets = {
            trace_stage!("word_sets");
            WordSetBuilder::new(&self.stemmer, &self.stopwords).build_all(parser)
        };

        let (tf, idf) = {
            trace_stage!("term_weights");
            (compute_tf(&word_sets), compute_idf(&word_sets))
        };

        let graph = {
            trace_stage!("similarity_graph");
            let transition = SimilarityMatrix::from_word_sets(&word_sets, &tf, &idf)
                .into_transition(self.config.threshold);
            CsrGraph::from_transition(&transition)
        };

        trace_stage!("centrality");
        PowerMethod::new()
            .with_epsilon(self.config.epsilon)
            .with_max_iterations(self.config.max_iterations)
            .run(&graph)
    }

    /// Summarize a document, returning the selected sentences in document order
    pub fn summarize<P>(&self, parser: &P, count: impl Into<ItemsCount>) -> Result<Vec<Sentence>>
    where
        P: DocumentParser + ?Sized,
    {
        let result = self.summarize_with_info(parser, count)?;
        Ok(result.sentences.into_iter().map(|s| s.sentence).collect())
    }

    /// Summarize a document, keeping ratings and convergence details
    pub fn summarize_with_info<P>(
        &self,
        parser: &P,
        count: impl Into<ItemsCount>,
    ) -> Result<SummaryResult>
    where
        P: DocumentParser + ?Sized,
    {
        let ranking = self.rate_sentences(parser);

        let selected = SentenceSelector::new(count)
            .select(parser.sentences(), |order, _| ranking.score(order))?;

        Ok(SummaryResult {
            sentences: selected
                .into_iter()
                .map(|info| RankedSentence {
                    sentence: info.sentence,
                    rating: info.rating,
                })
                .collect(),
            iterations: ranking.iterations,
            delta: ranking.delta,
            converged: ranking.converged,
        })
    }

    /// Split plain text with the built-in tokenizer and summarize it
    pub fn summarize_text(&self, text: &str, count: impl Into<ItemsCount>) -> Result<Vec<Sentence>> {
        self.summarize(&PlaintextParser::from_text(text), count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LexRankError;

    /// Hub sentence shares one term with each of four otherwise unrelated sentences
    const HUB_TEXT: &str = "Alpha beta gamma delta. Alpha one. Beta two. Gamma three. Delta four.";

    fn texts(sentences: &[Sentence]) -> Vec<&str> {
        sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_hub_sentence_ranks_first() {
        let summarizer = LexRankSummarizer::new();
        let parser = PlaintextParser::from_text(HUB_TEXT);

        let ranking = summarizer.rate_sentences(&parser);
        assert!(ranking.converged);
        assert_eq!(ranking.iterations, 2);
        assert!((ranking.scores[0] - 0.368).abs() < 1e-9);
        for spoke in 1..5 {
            assert!((ranking.scores[spoke] - 0.158).abs() < 1e-9);
        }

        let summary = summarizer.summarize(&parser, 1).unwrap();
        assert_eq!(texts(&summary), vec!["Alpha beta gamma delta."]);
    }

    #[test]
    fn test_summary_in_document_order() {
        let summarizer = LexRankSummarizer::new();
        let summary = summarizer.summarize_text(HUB_TEXT, 3).unwrap();

        assert_eq!(summary.len(), 3);
        for pair in summary.windows(2) {
            assert!(pair[0].index < pair[1].index);
        }
        assert_eq!(summary[0].index, 0);
    }

    #[test]
    fn test_pair_sharing_terms_in_three_sentences_ties() {
        let summarizer = LexRankSummarizer::new();
        let parser =
            PlaintextParser::from_text("Cats chase mice. Cats chase mice. Dogs bark loudly.");

        // Shared terms have idf ln(3 / 3) = 0, so the pair has zero norm and
        // every sentence keeps the uniform share
        let ranking = summarizer.rate_sentences(&parser);
        assert!(ranking.converged);
        for score in &ranking.scores {
            assert!((score - 1.0 / 3.0).abs() < 1e-12);
        }

        // The tie falls back to document order
        let summary = summarizer.summarize(&parser, 2).unwrap();
        assert_eq!(summary[0].index, 0);
        assert_eq!(summary[1].index, 1);
    }

    #[test]
    fn test_shared_terms_pair_outranks_rest() {
        let summarizer = LexRankSummarizer::new();
        let parser = PlaintextParser::from_text(
            "Cats chase mice. Cats chase mice. Cats sleep. Mice hide. Dogs bark loudly. Birds sing.",
        );

        // The pair links to each other and to one neighbor each; the
        // neighbors feed mass back while the last two sentences stay isolated
        let ranking = summarizer.rate_sentences(&parser);
        assert!(ranking.converged);
        assert_eq!(ranking.iterations, 1);
        let expected = [7.0, 7.0, 5.0, 5.0, 6.0, 6.0].map(|s| s / 36.0);
        for (score, want) in ranking.scores.iter().zip(expected) {
            assert!((score - want).abs() < 1e-12);
        }

        let summary = summarizer.summarize_with_info(&parser, 2).unwrap();
        let indices: Vec<usize> = summary.sentences.iter().map(|r| r.sentence.index).collect();
        assert_eq!(indices, vec![0, 1]);
        assert!(summary.sentences[1].rating > ranking.scores[4]);
    }

    #[test]
    fn test_single_sentence_document() {
        let summarizer = LexRankSummarizer::new();
        let parser = PlaintextParser::from_text("Only one sentence here.");

        let result = summarizer.summarize_with_info(&parser, 5).unwrap();
        assert_eq!(result.sentences.len(), 1);
        assert_eq!(result.sentences[0].sentence.text, "Only one sentence here.");
        assert!((result.sentences[0].rating - 1.0).abs() < 1e-12);
        assert!(result.converged);
    }

    #[test]
    fn test_empty_document() {
        let summarizer = LexRankSummarizer::new();
        let parser = PlaintextParser::from_text("");

        assert!(summarizer.summarize(&parser, 3).unwrap().is_empty());
        let ranking = summarizer.rate_sentences(&parser);
        assert!(ranking.scores.is_empty());
        assert_eq!(ranking.iterations, 0);
    }

    #[test]
    fn test_stopword_in_every_sentence() {
        let config = LexRankConfig::new().with_stopwords(["The", "cat"]);
        let summarizer = LexRankSummarizer::with_config(config).unwrap();
        let parser = PlaintextParser::from_text("The cat. The cat sat. The cat ran far.");

        assert!(summarizer.to_word_set(&parser, &parser.sentences()[0]).is_empty());

        let ranking = summarizer.rate_sentences(&parser);
        assert_eq!(ranking.scores.len(), 3);
        assert!(ranking.scores.iter().all(|s| s.is_finite()));

        let summary = summarizer.summarize(&parser, 2).unwrap();
        assert_eq!(summary.len(), 2);
    }

    #[test]
    fn test_stemmer_merges_word_forms() {
        let stemmer = |w: &str| w.strip_suffix('s').unwrap_or(w).to_string();
        let summarizer = LexRankSummarizer::with_stemmer(LexRankConfig::default(), stemmer).unwrap();
        let parser = PlaintextParser::from_text("Graphs rank. Graph ranks.");

        let first = summarizer.to_word_set(&parser, &parser.sentences()[0]);
        let second = summarizer.to_word_set(&parser, &parser.sentences()[1]);
        assert_eq!(first, vec!["graph", "rank"]);
        assert_eq!(second, vec!["graph", "rank"]);
    }

    #[test]
    fn test_deterministic() {
        let summarizer = LexRankSummarizer::new();
        let parser = PlaintextParser::from_text(
            "Graphs model relations. Sentences become nodes in graphs. \
             Edges join similar sentences. Power iteration finds central nodes. \
             Central sentences form the summary.",
        );

        let first = summarizer.summarize_with_info(&parser, 2).unwrap();
        let second = summarizer.summarize_with_info(&parser, 2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_summary_length_bounded() {
        let summarizer = LexRankSummarizer::new();
        let parser = PlaintextParser::from_text(HUB_TEXT);

        for requested in 0..8 {
            let summary = summarizer.summarize(&parser, requested).unwrap();
            assert_eq!(summary.len(), requested.min(parser.len()));
        }
    }

    #[test]
    fn test_percentage_count() {
        let summarizer = LexRankSummarizer::new();
        let summary = summarizer
            .summarize_text(HUB_TEXT, ItemsCount::Percentage(40.0))
            .unwrap();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].index, 0);

        let err = summarizer
            .summarize_text(HUB_TEXT, ItemsCount::Percentage(140.0))
            .unwrap_err();
        assert!(matches!(err, LexRankError::InvalidCount(_)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = LexRankSummarizer::with_config(LexRankConfig::new().with_epsilon(0.0)).unwrap_err();
        assert!(matches!(err, LexRankError::InvalidConfig(_)));
    }

    #[test]
    fn test_iteration_cap_reports_non_convergence() {
        let config = LexRankConfig::new()
            .with_epsilon(1e-300)
            .with_max_iterations(1);
        let summarizer = LexRankSummarizer::with_config(config).unwrap();

        let result = summarizer.summarize_with_info(&PlaintextParser::from_text(HUB_TEXT), 1).unwrap();
        assert!(!result.converged);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.sentences.len(), 1);
    }
}
