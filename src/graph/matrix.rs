//! Dense sentence similarity matrix
//!
//! Construction happens in two passes. [`SimilarityMatrix::from_word_sets`]
//! fills every cell, diagonal included, with the raw TF·IDF cosine
//! similarity. [`SimilarityMatrix::into_transition`] then thresholds all
//! cells to 0/1 and divides each row by its degree, giving a row-stochastic
//! random-walk matrix. Thresholding only starts once every cell is known.

use super::sentence_vector::SentenceVector;
use crate::nlp::word_set::WordSet;
use crate::summarizer::term_weights::{IdfMap, TfMap};

/// Raw pairwise cosine similarities, row-major `N×N`
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute the cosine similarity of every ordered sentence pair
    ///
    /// `word_sets` and `tf` must be parallel (one entry per sentence).
    pub fn from_word_sets(word_sets: &[WordSet], tf: &[TfMap], idf: &IdfMap) -> Self {
        debug_assert_eq!(word_sets.len(), tf.len());

        let vectors: Vec<SentenceVector<'_>> = word_sets
            .iter()
            .zip(tf)
            .map(|(words, tf)| SentenceVector::new(words, tf, idf))
            .collect();

        let size = vectors.len();
        let mut values = Vec::with_capacity(size * size);
        for row in &vectors {
            for col in &vectors {
                values.push(row.cosine_similarity(col, idf));
            }
        }

        Self { size, values }
    }

    /// Number of sentences (rows)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if the matrix has no rows
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Similarity of sentence `row` to sentence `col`
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.size + col]
    }

    /// All similarities of one sentence
    pub fn row(&self, row: usize) -> &[f64] {
        &self.values[row * self.size..(row + 1) * self.size]
    }

    /// Threshold and degree-normalize into a transition matrix
    ///
    /// A cell becomes an edge when its similarity is strictly greater than
    /// `threshold`. Each row is divided by its degree. A row without any
    /// edge gets a single self-transition of weight 1.
    pub fn into_transition(self, threshold: f64) -> TransitionMatrix {
        let size = self.size;
        let mut values = self.values;
        let mut degrees = vec![0usize; size];

        for (cell, value) in values.iter_mut().enumerate() {
            if *value > threshold {
                *value = 1.0;
                degrees[cell / size] += 1;
            } else {
                *value = 0.0;
            }
        }

        for (row, &degree) in degrees.iter().enumerate() {
            let cells = &mut values[row * size..(row + 1) * size];
            if degree == 0 {
                cells[row] = 1.0;
                continue;
            }
            let degree = degree as f64;
            for cell in cells.iter_mut() {
                *cell /= degree;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sentences = size,
            edges = degrees.iter().sum::<usize>(),
            isolated = degrees.iter().filter(|&&d| d == 0).count(),
            threshold,
            "built sentence transition matrix"
        );

        TransitionMatrix {
            size,
            values,
            degrees,
        }
    }
}

/// Row-stochastic transition matrix over sentences, row-major `N×N`
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    size: usize,
    values: Vec<f64>,
    /// Edges per row after thresholding (0 for isolated sentences)
    degrees: Vec<usize>,
}

impl TransitionMatrix {
    /// Number of sentences (rows)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if the matrix has no rows
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Transition probability from sentence `row` to sentence `col`
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.size + col]
    }

    /// All transition probabilities out of one sentence
    pub fn row(&self, row: usize) -> &[f64] {
        &self.values[row * self.size..(row + 1) * self.size]
    }

    /// Number of neighbors that passed the threshold
    pub fn degree(&self, row: usize) -> usize {
        self.degrees[row]
    }

    /// Whether no similarity in this row passed the threshold
    ///
    /// Self-similarity counts like any other cell and can miss the threshold
    /// even with a positive norm when one term repeats heavily.
    pub fn is_isolated(&self, row: usize) -> bool {
        self.degrees[row] == 0
    }
}
