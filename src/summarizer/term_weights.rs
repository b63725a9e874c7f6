//! Term frequency and inverse sentence frequency
//!
//! TF is normalized per sentence by the count of its most frequent term, so
//! every value lies in `[0, 1]` and the most frequent term maps to exactly 1.
//!
//! IDF treats each sentence as a document:
//!
//! `idf(t) = ln(N / (1 + df(t)))`
//!
//! where `N` is the sentence count and `df(t)` the number of sentences
//! containing `t`. Terms present in more than `N/e - 1` sentences get a
//! negative weight; this is kept as is.

use crate::nlp::word_set::WordSet;
use rustc_hash::{FxHashMap, FxHashSet};

/// Normalized term frequencies of one sentence
pub type TfMap = FxHashMap<String, f64>;

/// Document-wide inverse sentence frequencies
pub type IdfMap = FxHashMap<String, f64>;

/// Compute the normalized term frequencies of every sentence
///
/// Returns one map per word set, in the same order.
pub fn compute_tf(word_sets: &[WordSet]) -> Vec<TfMap> {
    word_sets
        .iter()
        .map(|words| {
            let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
            for word in words {
                *counts.entry(word.as_str()).or_insert(0) += 1;
            }

            let max_tf = counts.values().copied().max().unwrap_or(1) as f64;

            counts
                .into_iter()
                .map(|(term, count)| (term.to_string(), count as f64 / max_tf))
                .collect()
        })
        .collect()
}

/// Compute the inverse sentence frequency of every term in the document
///
/// Returns an empty map for an empty document.
pub fn compute_idf(word_sets: &[WordSet]) -> IdfMap {
    let sentences_count = word_sets.len() as f64;

    let mut document_frequency: FxHashMap<&str, usize> = FxHashMap::default();
    for words in word_sets {
        let distinct: FxHashSet<&str> = words.iter().map(String::as_str).collect();
        for term in distinct {
            *document_frequency.entry(term).or_insert(0) += 1;
        }
    }

    document_frequency
        .into_iter()
        .map(|(term, df)| {
            let idf = (sentences_count / (1.0 + df as f64)).ln();
            (term.to_string(), idf)
        })
        .collect()
}
