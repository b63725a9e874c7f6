//! Compressed Sparse Row (CSR) transition graph
//!
//! Thresholding leaves most of the dense transition matrix at zero. CSR keeps
//! only the non-zero transitions contiguously per source sentence, which is
//! all power iteration needs: pushing each sentence's score along its
//! outgoing edges computes `transpose(M) · p` without materializing the
//! transpose.

use super::matrix::TransitionMatrix;

/// A sentence transition graph in Compressed Sparse Row format
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes (sentences)
    pub num_nodes: usize,
    /// Row pointers: node i's edges are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    /// Column indices (target sentences) for each edge
    pub col_idx: Vec<u32>,
    /// Transition probabilities
    pub weights: Vec<f64>,
}

impl CsrGraph {
    /// Convert a dense transition matrix, dropping zero cells
    pub fn from_transition(matrix: &TransitionMatrix) -> Self {
        let num_nodes = matrix.size();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();

        row_ptr.push(0);

        for row in 0..num_nodes {
            for (col, &weight) in matrix.row(row).iter().enumerate() {
                if weight != 0.0 {
                    col_idx.push(col as u32);
                    weights.push(weight);
                }
            }
            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
        }
    }

    /// Iterate over outgoing transitions of a node
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Get the number of outgoing transitions of a node
    pub fn degree(&self, node: u32) -> usize {
        self.row_ptr[node as usize + 1] - self.row_ptr[node as usize]
    }

    /// Sum of outgoing transition probabilities of a node
    pub fn out_weight(&self, node: u32) -> f64 {
        self.neighbors(node).map(|(_, w)| w).sum()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Get the total number of stored transitions
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
        }
    }
}
