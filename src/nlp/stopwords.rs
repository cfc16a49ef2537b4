//! Stopword filtering
//!
//! A closed set of common English function words that carry no signal for
//! lexical overlap. The set is fixed; there is no per-language loading.

use rustc_hash::FxHashSet;

/// The built-in stopword list.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "then", "so", "of", "in", "on", "at", "to",
    "for", "from", "by", "with", "as", "is", "are", "was", "were", "be", "been", "it", "its",
    "this", "that", "these", "those", "i", "you", "he", "she", "we", "they", "not", "no", "do",
];

/// A filter for removing stopwords from token streams
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self {
            stopwords: ENGLISH_STOPWORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl StopwordFilter {
    /// Create a filter over the built-in English list
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a lowercase token is a stopword.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
