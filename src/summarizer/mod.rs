//! Summarization components
//!
//! Provides LexRank extractive summarization: term weighting, the
//! summarizer that drives the ranking stages, and best-sentence selection.

pub mod lex_rank;
pub mod selector;
pub mod term_weights;
