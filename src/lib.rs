//! # rapid_lexrank
//!
//! LexRank sentence centrality for extractive summarization.
//!
//! Sentences become nodes of a graph whose edges join pairs with TF·IDF
//! cosine similarity above a threshold. The stationary distribution of a
//! random walk on that graph, found by power iteration, scores each
//! sentence; the best-scored sentences form the summary, in document order.
//!
//! ```rust
//! use rapid_lexrank::{LexRankSummarizer, PlaintextParser};
//!
//! let parser = PlaintextParser::from_text(
//!     "Alpha beta gamma delta. Alpha one. Beta two. Gamma three. Delta four.",
//! );
//! let summary = LexRankSummarizer::new().summarize(&parser, 1).unwrap();
//! assert_eq!(summary[0].text, "Alpha beta gamma delta.");
//! ```

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{LexRankError, Result};
pub use types::{ItemsCount, LexRankConfig, Sentence};

// Re-export main functionality
pub use graph::{csr::CsrGraph, matrix::SimilarityMatrix, matrix::TransitionMatrix};
pub use nlp::{
    stemmer::{NullStemmer, Stemmer},
    stopwords::StopwordFilter,
    tokenizer::{DocumentParser, PlaintextParser, Tokenizer},
};
pub use pagerank::{power::PowerMethod, PowerIterationResult};
pub use summarizer::lex_rank::{LexRankSummarizer, RankedSentence, SummaryResult};
pub use summarizer::selector::{SentenceInfo, SentenceSelector};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
