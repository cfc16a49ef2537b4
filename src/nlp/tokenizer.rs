//! Token bags
//!
//! Turns a sentence into a multiset of lowercase, non-stopword tokens.

use rustc_hash::FxHashMap;

use super::stopwords::StopwordFilter;

/// Characters replaced by a space before splitting into tokens.
pub const PUNCTUATION: &str = ".,:;?!#%*()[]{}\\|/<>!\"-_";

fn is_punctuation(ch: char) -> bool {
    PUNCTUATION.contains(ch)
}

/// Token -> occurrence count for one sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenBag {
    counts: FxHashMap<String, usize>,
    total: usize,
}

impl TokenBag {
    /// Create an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of a token
    pub fn insert(&mut self, token: impl Into<String>) {
        *self.counts.entry(token.into()).or_insert(0) += 1;
        self.total += 1;
    }

    /// Occurrences of `token` in the bag
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Total number of token occurrences (not distinct tokens)
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct tokens
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterate over `(token, count)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(t, &c)| (t.as_str(), c))
    }
}

impl<S: Into<String>> FromIterator<S> for TokenBag {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut bag = TokenBag::new();
        for token in iter {
            bag.insert(token);
        }
        bag
    }
}

/// Builds token bags from sentence text
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    stopwords: StopwordFilter,
}

impl Tokenizer {
    /// Tokenizer with the built-in stopword list
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowercase, strip punctuation, split on whitespace, drop stopwords.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let normalized: String = text
            .to_lowercase()
            .chars()
            .map(|c| if is_punctuation(c) { ' ' } else { c })
            .collect();

        normalized
            .split_whitespace()
            .filter(|t| !self.stopwords.is_stopword(t))
            .map(str::to_string)
            .collect()
    }

    /// Build the token bag for one sentence
    pub fn bag(&self, text: &str) -> TokenBag {
        self.tokens(text).into_iter().collect()
    }
}
