//! Core types shared across the summarization stages.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// A sentence produced by the segmenter.
///
/// `index` is the sentence's position in the flattened, paragraph-ordered
/// sentence list and is the only identity a sentence has. Two sentences with
/// identical text are still distinct sentences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Sentence text with collapsed whitespace and no trailing period
    pub text: String,
    /// Position in document order
    pub index: usize,
    /// Index of the paragraph the sentence came from
    pub paragraph: usize,
}

impl Sentence {
    pub fn new(text: impl Into<String>, index: usize, paragraph: usize) -> Self {
        Self {
            text: text.into(),
            index,
            paragraph,
        }
    }

    /// Length in characters, as counted against the summary budget.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Configuration for the summarizer.
///
/// The defaults give `max_chars = min(1000, 50 + 0.1 * len(text))` and a
/// four-token significance threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Additive floor of the character budget
    pub budget_floor: f64,
    /// Fraction of the input length added to the floor
    pub budget_ratio: f64,
    /// Upper bound of the character budget
    pub budget_cap: f64,
    /// Sentences with fewer significant tokens never score overlap
    pub min_significant_tokens: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            budget_floor: 50.0,
            budget_ratio: 0.1,
            budget_cap: 1000.0,
            min_significant_tokens: 4,
        }
    }
}

impl SummarizerConfig {
    /// Set the budget floor
    pub fn with_budget_floor(mut self, floor: f64) -> Self {
        self.budget_floor = floor;
        self
    }

    /// Set the budget ratio
    pub fn with_budget_ratio(mut self, ratio: f64) -> Self {
        self.budget_ratio = ratio;
        self
    }

    /// Set the budget cap
    pub fn with_budget_cap(mut self, cap: f64) -> Self {
        self.budget_cap = cap;
        self
    }

    /// Set the significant-token threshold
    pub fn with_min_significant_tokens(mut self, n: usize) -> Self {
        self.min_significant_tokens = n;
        self
    }

    /// Check that the configuration describes a usable budget.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("budget_floor", self.budget_floor),
            ("budget_ratio", self.budget_ratio),
            ("budget_cap", self.budget_cap),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidBudgetParameter { field, value });
            }
        }

        if self.budget_floor > self.budget_cap {
            return Err(ConfigError::FloorAboveCap {
                floor: self.budget_floor,
                cap: self.budget_cap,
            });
        }

        if self.min_significant_tokens == 0 {
            return Err(ConfigError::ZeroTokenThreshold);
        }

        Ok(())
    }

    /// Parse a JSON document and validate it. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SummarizerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg = SummarizerConfig::from_json_str(r#"{ "budget_cap": 400 }"#).unwrap();
        assert_eq!(cfg.budget_cap, 400.0);
        assert_eq!(cfg.budget_floor, 50.0);
        assert_eq!(cfg.min_significant_tokens, 4);
    }

    #[test]
    fn test_empty_json_object_is_default() {
        let cfg = SummarizerConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, SummarizerConfig::default());
    }

    #[test]
    fn test_negative_ratio_rejected() {
        let err = SummarizerConfig::default()
            .with_budget_ratio(-1.0)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidBudgetParameter {
                field: "budget_ratio",
                ..
            }
        ));
    }

    #[test]
    fn test_nan_floor_rejected() {
        let err = SummarizerConfig::default()
            .with_budget_floor(f64::NAN)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBudgetParameter { .. }));
    }

    #[test]
    fn test_floor_above_cap_rejected() {
        let err = SummarizerConfig::default()
            .with_budget_floor(200.0)
            .with_budget_cap(100.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::FloorAboveCap { .. }));
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let err = SummarizerConfig::default()
            .with_min_significant_tokens(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::ZeroTokenThreshold));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = SummarizerConfig::from_json_str("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_sentence_char_len_counts_scalars() {
        let s = Sentence::new("café au lait", 0, 0);
        assert_eq!(s.char_len(), 12);
    }
}
