//! TF·IDF sentence vectors
//!
//! Each sentence is a sparse vector over its terms, with weight
//! `tf(t) * idf(t)`. Vectors are not normalized up front; the norm is kept
//! alongside the terms and applied when computing cosine similarity.

use crate::nlp::word_set::WordSet;
use crate::summarizer::term_weights::{IdfMap, TfMap};

/// A sparse TF·IDF view of one sentence
#[derive(Debug, Clone)]
pub struct SentenceVector<'a> {
    /// Distinct terms, sorted
    terms: Vec<&'a str>,
    /// Term frequencies of the sentence
    tf: &'a TfMap,
    /// Sum of squared TF·IDF weights over the word set
    norm_sq: f64,
}

impl<'a> SentenceVector<'a> {
    /// Build the vector of one sentence
    ///
    /// The squared norm sums over every entry of the word set, so a term
    /// repeated in the sentence contributes once per occurrence.
    pub fn new(words: &'a WordSet, tf: &'a TfMap, idf: &IdfMap) -> Self {
        let norm_sq = words
            .iter()
            .map(|t| {
                let weight = tf.get(t).copied().unwrap_or(0.0) * idf.get(t).copied().unwrap_or(0.0);
                weight * weight
            })
            .sum();

        let mut terms: Vec<&str> = words.iter().map(String::as_str).collect();
        terms.sort_unstable();
        terms.dedup();

        Self {
            terms,
            tf,
            norm_sq,
        }
    }

    /// Squared norm of the vector
    pub fn norm_sq(&self) -> f64 {
        self.norm_sq
    }

    /// Check if the sentence has no terms
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    fn tf(&self, term: &str) -> f64 {
        self.tf.get(term).copied().unwrap_or(0.0)
    }

    /// Cosine similarity with another sentence vector
    ///
    /// Returns 0 unless both squared norms are strictly positive. The
    /// numerator walks the shared terms in sorted order, so
    /// `a.cosine_similarity(b) == b.cosine_similarity(a)` exactly.
    pub fn cosine_similarity(&self, other: &SentenceVector<'_>, idf: &IdfMap) -> f64 {
        if self.norm_sq <= 0.0 || other.norm_sq <= 0.0 {
            return 0.0;
        }

        let mut numerator = 0.0;
        let (mut i, mut j) = (0, 0);
        while i < self.terms.len() && j < other.terms.len() {
            match self.terms[i].cmp(other.terms[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    let term = self.terms[i];
                    let weight = idf.get(term).copied().unwrap_or(0.0);
                    numerator += self.tf(term) * other.tf(term) * weight * weight;
                    i += 1;
                    j += 1;
                }
            }
        }

        numerator / (self.norm_sq.sqrt() * other.norm_sq.sqrt())
    }
}
