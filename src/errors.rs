//! Error types.
//!
//! Summarization itself is total and never fails. Errors only arise when a
//! [`SummarizerConfig`](crate::types::SummarizerConfig) is built from
//! untrusted input.

use thiserror::Error;

/// An invalid or unreadable summarizer configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A budget parameter is NaN, infinite, or negative.
    #[error("`{field}` must be a finite, non-negative number (got {value})")]
    InvalidBudgetParameter { field: &'static str, value: f64 },

    /// The budget floor exceeds the cap, so the cap would never apply.
    #[error("`budget_floor` ({floor}) must not exceed `budget_cap` ({cap})")]
    FloorAboveCap { floor: f64, cap: f64 },

    /// A zero threshold would let empty token bags score overlap.
    #[error("`min_significant_tokens` must be at least 1")]
    ZeroTokenThreshold,

    /// The configuration document is not valid JSON for this schema.
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}
