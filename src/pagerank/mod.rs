//! Centrality computation
//!
//! This module provides the power method LexRank uses to find the stationary
//! distribution of the sentence transition graph.

pub mod power;

/// Result of a power iteration run
#[derive(Debug, Clone, PartialEq)]
pub struct PowerIterationResult {
    /// Centrality score for each sentence (indexed by sentence position)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta (L2 norm of the last update)
    pub delta: f64,
    /// Whether the delta dropped to epsilon before the iteration cap
    pub converged: bool,
}

impl PowerIterationResult {
    /// Create a new result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Get the top N sentences by score, highest first
    ///
    /// Equal scores keep sentence order.
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        let mut indexed: Vec<_> = self.scores.iter().copied().enumerate().collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1));
        indexed.truncate(n);
        indexed
    }

    /// Get the score of the sentence at `position` in the document
    pub fn score(&self, position: usize) -> f64 {
        self.scores.get(position).copied().unwrap_or(0.0)
    }
}
