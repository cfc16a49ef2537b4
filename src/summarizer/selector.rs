//! Greedy budgeted sentence selection
//!
//! Walks sentences from most to least central and keeps taking them until
//! the summary so far fills the budget, then restores document order.

use super::budget::Budget;
use crate::scoring::Ranking;
use crate::types::Sentence;

/// Sentences chosen for the summary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    /// Selected sentence positions, ascending (document order)
    pub indices: Vec<usize>,
    /// Length of the selected sentences joined by single spaces, in the
    /// order they were selected
    pub joined_len: usize,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Budget-driven sentence selector
#[derive(Debug, Clone, Copy)]
pub struct SentenceSelector {
    budget: Budget,
}

impl SentenceSelector {
    pub fn new(budget: Budget) -> Self {
        Self { budget }
    }

    /// Select sentences in rank order under the budget.
    ///
    /// The budget check runs before each sentence is added, so the final
    /// sentence may push the joined length past `max_chars`. Every sentence
    /// is selected if the budget is never reached.
    pub fn select(&self, sentences: &[Sentence], ranking: &Ranking) -> Selection {
        let mut indices = Vec::new();
        let mut joined_len = 0;

        for idx in ranking.order() {
            if self.budget.is_exhausted(joined_len) {
                break;
            }
            let Some(sentence) = sentences.get(idx) else {
                continue;
            };
            if !indices.is_empty() {
                joined_len += 1;
            }
            joined_len += sentence.char_len();
            indices.push(idx);
        }

        // Positions double as document order.
        indices.sort_unstable();

        Selection {
            indices,
            joined_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_sentences(texts: &[&str]) -> Vec<Sentence> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Sentence::new(*t, i, 0))
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let selector = SentenceSelector::new(Budget { max_chars: 50.0 });
        let selection = selector.select(&[], &Ranking::default());
        assert!(selection.is_empty());
        assert_eq!(selection.joined_len, 0);
    }

    #[test]
    fn test_selects_all_when_budget_not_reached() {
        let sentences = make_sentences(&["aaaa", "bbbb", "cccc"]);
        let ranking = Ranking {
            scores: vec![0.0, 0.0, 0.0],
        };
        let selection = SentenceSelector::new(Budget { max_chars: 100.0 }).select(&sentences, &ranking);
        assert_eq!(selection.indices, vec![0, 1, 2]);
        assert_eq!(selection.joined_len, 14);
    }

    #[test]
    fn test_budget_is_soft() {
        // 10 chars, then a check at 10 < 12 lets a 20-char sentence through.
        let sentences = make_sentences(&["0123456789", "01234567890123456789", "xx"]);
        let ranking = Ranking {
            scores: vec![-2.0, -1.0, 0.0],
        };
        let selection = SentenceSelector::new(Budget { max_chars: 12.0 }).select(&sentences, &ranking);
        assert_eq!(selection.indices, vec![0, 1]);
        assert_eq!(selection.joined_len, 31);
    }

    #[test]
    fn test_stops_once_budget_met() {
        let sentences = make_sentences(&["0123456789", "abc", "def"]);
        let ranking = Ranking {
            scores: vec![-3.0, -2.0, -1.0],
        };
        let selection = SentenceSelector::new(Budget { max_chars: 10.0 }).select(&sentences, &ranking);
        assert_eq!(selection.indices, vec![0]);
    }

    #[test]
    fn test_zero_budget_still_checks_before_adding() {
        let sentences = make_sentences(&["abc"]);
        let ranking = Ranking { scores: vec![0.0] };
        let selection = SentenceSelector::new(Budget { max_chars: 0.0 }).select(&sentences, &ranking);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_document_order() {
        let sentences = make_sentences(&["first", "second", "third", "fourth"]);
        let ranking = Ranking {
            scores: vec![-0.1, -0.9, -0.2, -0.5],
        };
        let selection = SentenceSelector::new(Budget { max_chars: 1000.0 }).select(&sentences, &ranking);
        assert_eq!(selection.indices, vec![0, 1, 2, 3]);

        let selection = SentenceSelector::new(Budget { max_chars: 12.0 }).select(&sentences, &ranking);
        // "second" (6) then "fourth" (6 + 1 + 6 = 13) and the budget is spent
        assert_eq!(selection.indices, vec![1, 3]);
    }
}
