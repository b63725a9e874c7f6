//! Best-sentence selection
//!
//! Picks the highest-rated sentences and returns them in document order.
//! Sorting by rating is stable, so sentences with equal ratings keep their
//! document order when the cut falls between them.

use crate::errors::Result;
use crate::types::{ItemsCount, Sentence};

/// A sentence paired with its document position and rating
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceInfo {
    /// The sentence
    pub sentence: Sentence,
    /// Position in the document (0-based)
    pub order: usize,
    /// Centrality rating
    pub rating: f64,
}

/// Rating-based sentence selector
#[derive(Debug, Clone, Copy)]
pub struct SentenceSelector {
    count: ItemsCount,
}

impl SentenceSelector {
    /// Create a selector returning `count` sentences
    pub fn new(count: impl Into<ItemsCount>) -> Self {
        Self {
            count: count.into(),
        }
    }

    /// The requested count
    pub fn count(&self) -> ItemsCount {
        self.count
    }

    /// Select the best rated sentences, in document order
    ///
    /// `rating` receives each sentence's position in `sentences` along with
    /// the sentence itself. Fails only when the count specification is
    /// invalid.
    pub fn select<F>(&self, sentences: &[Sentence], rating: F) -> Result<Vec<SentenceInfo>>
    where
        F: Fn(usize, &Sentence) -> f64,
    {
        let count = self.count.resolve(sentences.len())?;

        let mut infos: Vec<SentenceInfo> = sentences
            .iter()
            .enumerate()
            .map(|(order, s)| SentenceInfo {
                sentence: s.clone(),
                order,
                rating: rating(order, s),
            })
            .collect();

        infos.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        infos.truncate(count);
        infos.sort_by_key(|info| info.order);

        Ok(infos)
    }
}
