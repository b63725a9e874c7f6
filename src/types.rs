//! Core types for rapid_lexrank
//!
//! This module defines the sentence unit handed out by document parsers, the
//! output-count specification, and the summarizer configuration.

use crate::errors::{LexRankError, Result};
use crate::nlp::stopwords::StopwordFilter;
use serde::{Deserialize, Serialize};

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the input document
///
/// Sentences are immutable once produced by a parser. `index` is carried
/// through to the summary untouched; ranking and ordering use the sentence's
/// position in the parser's slice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text
    pub text: String,
    /// Start byte offset in original text
    pub start: usize,
    /// End byte offset in original text
    pub end: usize,
    /// Sentence index within the document
    pub index: usize,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

// ============================================================================
// Items Count
// ============================================================================

/// How many sentences a summary should contain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemsCount {
    /// A fixed number of sentences
    Absolute(usize),
    /// A percentage of the document's sentence count, within `[0, 100]`
    Percentage(f64),
}

impl ItemsCount {
    /// Resolve into a concrete count for `total` sentences
    ///
    /// The result never exceeds `total`. A positive percentage of a non-empty
    /// document always keeps at least one sentence.
    pub fn resolve(&self, total: usize) -> Result<usize> {
        match *self {
            ItemsCount::Absolute(count) => Ok(count.min(total)),
            ItemsCount::Percentage(percentage) => {
                if !(0.0..=100.0).contains(&percentage) {
                    return Err(LexRankError::invalid_count(format!(
                        "percentage must be within [0, 100], got {}",
                        percentage
                    )));
                }
                if percentage == 0.0 || total == 0 {
                    return Ok(0);
                }
                let count = (total as f64 * percentage / 100.0).floor() as usize;
                Ok(count.clamp(1, total))
            }
        }
    }
}

impl From<usize> for ItemsCount {
    fn from(count: usize) -> Self {
        ItemsCount::Absolute(count)
    }
}

impl std::str::FromStr for ItemsCount {
    type Err = LexRankError;

    fn from_str(value: &str) -> Result<Self> {
        let value = value.trim();
        if let Some(percentage) = value.strip_suffix('%') {
            let percentage: f64 = percentage.trim().parse().map_err(|_| {
                LexRankError::invalid_count(format!("not a percentage: {:?}", value))
            })?;
            if !(0.0..=100.0).contains(&percentage) {
                return Err(LexRankError::invalid_count(format!(
                    "percentage must be within [0, 100], got {}",
                    percentage
                )));
            }
            return Ok(ItemsCount::Percentage(percentage));
        }

        value
            .parse::<usize>()
            .map(ItemsCount::Absolute)
            .map_err(|_| LexRankError::invalid_count(format!("not a sentence count: {:?}", value)))
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for LexRank summarization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexRankConfig {
    /// Cosine similarity a sentence pair must exceed to become an edge
    pub threshold: f64,
    /// Power iteration stops once the L2 update drops to or below this value
    pub epsilon: f64,
    /// Upper bound on power iterations
    pub max_iterations: usize,
    /// Language code for built-in stopwords (e.g., "en"); `None` disables them
    pub language: Option<String>,
    /// Additional stopwords, normalized when the summarizer is built
    pub stopwords: Vec<String>,
}

impl Default for LexRankConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            epsilon: 0.1,
            max_iterations: 100,
            language: None,
            stopwords: Vec::new(),
        }
    }
}

impl LexRankConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; omitted fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.threshold) {
            return Err(LexRankError::invalid_config(format!(
                "threshold must be in [0, 1), got {}",
                self.threshold
            )));
        }

        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(LexRankError::invalid_config(format!(
                "epsilon must be > 0, got {}",
                self.epsilon
            )));
        }

        if self.max_iterations == 0 {
            return Err(LexRankError::invalid_config("max_iterations must be > 0"));
        }

        if let Some(language) = &self.language {
            if !StopwordFilter::supports_language(language) {
                return Err(LexRankError::invalid_config(format!(
                    "no stopword list for language {:?}",
                    language
                )));
            }
        }

        Ok(())
    }

    /// Builder method: set similarity threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Builder method: set convergence tolerance
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set stopword language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Builder method: set additional stopwords
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = words.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LexRankConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.threshold - 0.1).abs() < 1e-12);
        assert!((config.epsilon - 0.1).abs() < 1e-12);
        assert!(config.language.is_none());
        assert!(config.stopwords.is_empty());
    }

    #[test]
    fn test_invalid_config() {
        assert!(LexRankConfig::new().with_threshold(1.0).validate().is_err());
        assert!(LexRankConfig::new().with_threshold(-0.1).validate().is_err());
        assert!(LexRankConfig::new().with_epsilon(0.0).validate().is_err());
        assert!(LexRankConfig::new().with_epsilon(f64::NAN).validate().is_err());
        assert!(LexRankConfig::new().with_max_iterations(0).validate().is_err());
    }

    #[test]
    fn test_unknown_language_rejected() {
        assert!(LexRankConfig::new().with_language("fr").validate().is_ok());

        let err = LexRankConfig::new().with_language("xx").validate().unwrap_err();
        assert!(matches!(err, LexRankError::InvalidConfig(_)));

        let err = LexRankConfig::from_json(r#"{"language": "klingon"}"#).unwrap_err();
        assert!(matches!(err, LexRankError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = LexRankConfig::from_json(r#"{"threshold": 0.2, "stopwords": ["The"]}"#)
            .unwrap();
        assert!((config.threshold - 0.2).abs() < 1e-12);
        assert!((config.epsilon - 0.1).abs() < 1e-12);
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.stopwords, vec!["The".to_string()]);
    }

    #[test]
    fn test_from_json_rejects_invalid_values() {
        let err = LexRankConfig::from_json(r#"{"epsilon": -1.0}"#).unwrap_err();
        assert!(matches!(err, LexRankError::InvalidConfig(_)));

        let err = LexRankConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, LexRankError::Json(_)));
    }

    #[test]
    fn test_absolute_count_clamped() {
        assert_eq!(ItemsCount::Absolute(3).resolve(10).unwrap(), 3);
        assert_eq!(ItemsCount::Absolute(30).resolve(10).unwrap(), 10);
        assert_eq!(ItemsCount::Absolute(0).resolve(10).unwrap(), 0);
        assert_eq!(ItemsCount::from(2).resolve(0).unwrap(), 0);
    }

    #[test]
    fn test_percentage_count() {
        assert_eq!(ItemsCount::Percentage(50.0).resolve(10).unwrap(), 5);
        assert_eq!(ItemsCount::Percentage(25.0).resolve(10).unwrap(), 2);
        assert_eq!(ItemsCount::Percentage(100.0).resolve(7).unwrap(), 7);
        // A positive percentage keeps at least one sentence
        assert_eq!(ItemsCount::Percentage(1.0).resolve(10).unwrap(), 1);
        assert_eq!(ItemsCount::Percentage(0.0).resolve(10).unwrap(), 0);
        assert_eq!(ItemsCount::Percentage(50.0).resolve(0).unwrap(), 0);
    }

    #[test]
    fn test_percentage_out_of_range() {
        assert!(ItemsCount::Percentage(120.0).resolve(10).is_err());
        assert!(ItemsCount::Percentage(-5.0).resolve(10).is_err());
    }

    #[test]
    fn test_parse_items_count() {
        assert_eq!("3".parse::<ItemsCount>().unwrap(), ItemsCount::Absolute(3));
        assert_eq!(
            "20%".parse::<ItemsCount>().unwrap(),
            ItemsCount::Percentage(20.0)
        );
        assert!("-1".parse::<ItemsCount>().is_err());
        assert!("150%".parse::<ItemsCount>().is_err());
        assert!("lots".parse::<ItemsCount>().is_err());
    }

    #[test]
    fn test_sentence_display() {
        let sentence = Sentence::new("Hello there.", 0, 12, 0);
        assert_eq!(sentence.to_string(), "Hello there.");
    }
}
