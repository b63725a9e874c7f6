//! Stopword filtering
//!
//! Stopwords are stored in their normalized form so lookups match the
//! normalized tokens produced by the word-set builder. Built-in lists come
//! from the `stop-words` crate; LexRank itself filters nothing unless a
//! language or an explicit list is configured.

use super::normalize::normalize_word;
use crate::types::LexRankConfig;
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// An immutable set of normalized stopwords
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Create a filter with the built-in list for the given language
    ///
    /// Supported languages: en, de, fr, es, it, pt, nl, ru, sv, no, da, fi,
    /// hu, tr, pl, ar, zh, ja. Unknown codes fall back to English with a
    /// warning; `LexRankConfig::validate` rejects them instead.
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: Self::load_stopwords(language),
        }
    }

    /// Create an empty filter (no filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a filter from raw words, normalizing each one
    pub fn from_list<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stopwords: words.into_iter().map(|w| normalize_word(w.as_ref())).collect(),
        }
    }

    /// Build the filter described by a config: the language list (if any)
    /// extended with the explicit stopwords
    pub fn from_config(config: &LexRankConfig) -> Self {
        let mut stopwords = match &config.language {
            Some(language) => Self::load_stopwords(language),
            None => FxHashSet::default(),
        };
        stopwords.extend(config.stopwords.iter().map(|w| normalize_word(w)));
        Self { stopwords }
    }

    /// Check whether an already-normalized word is a stopword
    pub fn contains(&self, normalized: &str) -> bool {
        self.stopwords.contains(normalized)
    }

    /// Check whether a raw word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&normalize_word(word))
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// Whether `language` names a built-in stopword list
    pub fn supports_language(language: &str) -> bool {
        Self::builtin(language).is_some()
    }

    fn load_stopwords(language: &str) -> FxHashSet<String> {
        let builtin = Self::builtin(language).unwrap_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::warn!(language, "no stopword list for language; using English");
            Builtin::Listed(LANGUAGE::English)
        });

        match builtin {
            Builtin::Listed(lang) => get(lang).iter().map(|s| normalize_word(s)).collect(),
            Builtin::Chinese => Self::collect(CHINESE_STOPWORDS),
            Builtin::Japanese => Self::collect(JAPANESE_STOPWORDS),
        }
    }

    fn builtin(language: &str) -> Option<Builtin> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            "zh" | "chinese" => return Some(Builtin::Chinese),
            "ja" | "japanese" => return Some(Builtin::Japanese),
            _ => return None,
        };
        Some(Builtin::Listed(lang))
    }

    fn collect(words: &[&str]) -> FxHashSet<String> {
        words.iter().map(|s| s.to_string()).collect()
    }
}

/// Source of a built-in stopword list
enum Builtin {
    Listed(LANGUAGE),
    Chinese,
    Japanese,
}

// The stop-words crate has no CJK lists.
const CHINESE_STOPWORDS: &[&str] = &[
    "的", "是", "在", "有", "和", "与", "或", "不", "了", "也", "就", "都", "而", "及", "这", "那",
    "个", "为", "以", "等", "但", "被", "给", "让", "把", "从", "到", "对", "将", "于",
];

const JAPANESE_STOPWORDS: &[&str] = &[
    "の", "に", "は", "を", "た", "が", "で", "て", "と", "し", "れ", "さ", "ある", "いる", "も",
    "する", "から", "な", "こと", "として", "や", "など", "ない", "この", "ため", "その",
];
