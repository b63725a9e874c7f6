//! Power method over the sentence transition graph
//!
//! Starting from the uniform distribution, repeatedly computes
//! `next = transpose(M) · p` until the L2 norm of `next - p` drops to or
//! below epsilon. There is no damping or teleport term and scores are never
//! renormalized between iterations.

use super::PowerIterationResult;
use crate::graph::csr::CsrGraph;

/// Power iteration settings
#[derive(Debug, Clone)]
pub struct PowerMethod {
    /// Convergence tolerance on the L2 update norm
    pub epsilon: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
}

impl Default for PowerMethod {
    fn default() -> Self {
        Self {
            epsilon: 0.1,
            max_iterations: 100,
        }
    }
}

impl PowerMethod {
    /// Create a new PowerMethod with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the convergence tolerance
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Run the power method on a transition graph
    ///
    /// Returns the current estimate even if convergence wasn't achieved,
    /// with `converged=false`.
    pub fn run(&self, graph: &CsrGraph) -> PowerIterationResult {
        let n = graph.num_nodes;
        if n == 0 {
            return PowerIterationResult::new(vec![], 0, 0.0, true);
        }

        let mut scores = vec![1.0 / n as f64; n];
        let mut next_scores = vec![0.0; n];
        let mut iterations = 0;
        let mut delta = f64::INFINITY;

        while iterations < self.max_iterations && delta > self.epsilon {
            iterations += 1;

            next_scores.fill(0.0);

            // Each sentence pushes its score along its outgoing transitions
            for (node, &node_score) in scores.iter().enumerate() {
                for (neighbor, weight) in graph.neighbors(node as u32) {
                    next_scores[neighbor as usize] += weight * node_score;
                }
            }

            delta = scores
                .iter()
                .zip(next_scores.iter())
                .map(|(old, new)| (new - old) * (new - old))
                .sum::<f64>()
                .sqrt();

            std::mem::swap(&mut scores, &mut next_scores);
        }

        let converged = delta <= self.epsilon;

        #[cfg(feature = "tracing")]
        {
            if converged {
                tracing::debug!(iterations, delta, "power iteration converged");
            } else {
                tracing::warn!(
                    iterations,
                    delta,
                    epsilon = self.epsilon,
                    "power iteration hit max_iterations; ranking may be approximate"
                );
            }
        }

        PowerIterationResult::new(scores, iterations, delta, converged)
    }
}
