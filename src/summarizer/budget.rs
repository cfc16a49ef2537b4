//! Character budget for a summary.

use serde::Serialize;

use crate::types::SummarizerConfig;

/// Soft cap on the joined length of the selected sentences.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Budget {
    pub max_chars: f64,
}

impl Budget {
    /// `min(cap, floor + ratio * chars(text))`
    pub fn for_text(text: &str, config: &SummarizerConfig) -> Self {
        Self::for_length(text.chars().count(), config)
    }

    pub fn for_length(length: usize, config: &SummarizerConfig) -> Self {
        let max_chars =
            (config.budget_floor + config.budget_ratio * length as f64).min(config.budget_cap);
        Self { max_chars }
    }

    /// True once `used` characters meet or exceed the budget.
    pub fn is_exhausted(&self, used: usize) -> bool {
        used as f64 >= self.max_chars
    }
}
