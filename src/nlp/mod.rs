//! Natural Language Processing components
//!
//! This module provides tokenization, word normalization, stemming hooks,
//! stopword filtering, and the per-sentence word sets LexRank counts over.

pub mod normalize;
pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;
pub mod word_set;
