//! Sentence centrality ranking
//!
//! A sentence's rank is the negated sum of its overlap with every sentence in
//! the document, itself included. More negative means more central.

use std::cmp::Ordering;

use rayon::prelude::*;

use super::overlap::overlap_score;
use crate::nlp::tokenizer::TokenBag;

/// Centrality ranks indexed by sentence position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    /// Rank for each sentence (indexed by sentence position)
    pub scores: Vec<f64>,
}

impl Ranking {
    /// Rank every sentence against the whole document.
    ///
    /// Ranks are computed in parallel, but each one sums its terms in
    /// document order, so the result does not depend on scheduling.
    pub fn compute(bags: &[TokenBag], min_tokens: usize) -> Self {
        let scores = bags
            .par_iter()
            .map(|own| {
                let total: f64 = bags
                    .iter()
                    .map(|other| overlap_score(own, other, min_tokens))
                    .sum();
                // Subtracting from +0.0 keeps non-contributing sentences at +0.0.
                0.0 - total
            })
            .collect();

        Self { scores }
    }

    /// Get the rank of a sentence
    pub fn score(&self, index: usize) -> f64 {
        self.scores.get(index).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Sentence positions from most to least central.
    ///
    /// Stable: sentences with equal rank stay in document order.
    pub fn order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.scores.len()).collect();
        order.sort_by(|&a, &b| {
            self.scores[a]
                .partial_cmp(&self.scores[b])
                .unwrap_or(Ordering::Equal)
        });
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tokenizer::Tokenizer;

    fn bags(sentences: &[&str]) -> Vec<TokenBag> {
        let tokenizer = Tokenizer::new();
        sentences.iter().map(|s| tokenizer.bag(s)).collect()
    }

    #[test]
    fn test_empty_document() {
        let ranking = Ranking::compute(&[], 4);
        assert!(ranking.is_empty());
        assert!(ranking.order().is_empty());
    }

    #[test]
    fn test_short_sentences_rank_zero() {
        let ranking = Ranking::compute(
            &bags(&["Cats are animals", "Dogs are animals", "The sky is blue"]),
            4,
        );
        assert_eq!(ranking.scores, vec![0.0, 0.0, 0.0]);
        assert_eq!(ranking.order(), vec![0, 1, 2]);
    }

    #[test]
    fn test_self_overlap_counts() {
        let ranking = Ranking::compute(&bags(&["alpha beta gamma delta"]), 4);
        assert!((ranking.score(0) + 8.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_central_sentences_rank_first() {
        let ranking = Ranking::compute(
            &bags(&[
                "Penguins waddle across frozen beaches every winter",
                "Machine learning models learn patterns from training data",
                "Machine learning models need large training data sets",
                "Researchers evaluate machine learning models on held out data",
            ]),
            4,
        );
        let order = ranking.order();
        assert_eq!(*order.last().unwrap(), 0);
        assert!(ranking.score(1) < ranking.score(0));
        assert!(ranking.scores.iter().all(|&s| s <= 0.0));
    }

    #[test]
    fn test_short_sentence_does_not_change_other_ranks() {
        let base = bags(&[
            "Rust ownership rules prevent data races",
            "Ownership rules make Rust memory safe without garbage collection",
        ]);
        let mut with_short = base.clone();
        with_short.push(Tokenizer::new().bag("Rust rules"));

        let before = Ranking::compute(&base, 4);
        let after = Ranking::compute(&with_short, 4);

        assert_eq!(before.score(0), after.score(0));
        assert_eq!(before.score(1), after.score(1));
        assert_eq!(after.score(2), 0.0);
    }

    #[test]
    fn test_ties_preserve_document_order() {
        let ranking = Ranking {
            scores: vec![0.0, -1.0, 0.0, -1.0, 0.0],
        };
        assert_eq!(ranking.order(), vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn test_negative_zero_ties_with_zero() {
        let ranking = Ranking {
            scores: vec![0.0, -0.0, 0.0],
        };
        assert_eq!(ranking.order(), vec![0, 1, 2]);
    }

    #[test]
    fn test_score_out_of_range_is_zero() {
        let ranking = Ranking::default();
        assert_eq!(ranking.score(7), 0.0);
    }
}
