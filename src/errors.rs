//! Error types for rapid_lexrank
//!
//! Ranking itself never fails: empty documents, empty sentences and
//! zero-norm vectors are guarded explicitly. Errors only surface at the
//! configuration and count-selection boundaries.

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, LexRankError>;

/// Errors raised by configuration and output-count handling
#[derive(Debug, Error)]
pub enum LexRankError {
    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An output-count specification could not be interpreted
    #[error("invalid sentence count: {0}")]
    InvalidCount(String),

    /// Configuration JSON could not be parsed
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl LexRankError {
    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Create an invalid count error
    pub fn invalid_count(message: impl Into<String>) -> Self {
        Self::InvalidCount(message.into())
    }
}
