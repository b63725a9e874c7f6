//! Sentence similarity graph
//!
//! This module turns word sets into the random-walk graph LexRank ranks:
//! TF·IDF sentence vectors, the dense similarity/transition matrices, and a
//! sparse CSR view used during power iteration.

pub mod csr;
pub mod matrix;
pub mod sentence_vector;
