//! # revery-summarizer
//!
//! Extractive key-point summarization for a single document.
//!
//! Sentences are scored by their lexical overlap with the rest of the
//! document; the most central ones are taken greedily until a character
//! budget derived from the input length is filled, then returned in document
//! order as key points.
//!
//! ```
//! let points = revery_summarizer::summarize(
//!     "Cats are animals. Dogs are animals. The sky is blue.",
//! );
//! assert_eq!(points, vec!["Cats are animals.", "Dogs are animals.", "The sky is blue."]);
//! ```

pub mod errors;
pub mod nlp;
pub mod pipeline;
pub mod scoring;
pub mod summarizer;
pub mod types;

use rayon::prelude::*;

pub use errors::ConfigError;
pub use pipeline::artifacts::{SummaryPoint, SummaryResult};
pub use pipeline::runner::SummaryPipeline;
pub use types::{Sentence, SummarizerConfig};

/// Summarize `text` into key points using the default configuration.
///
/// Total and deterministic: empty or whitespace-only input yields an empty
/// list.
pub fn summarize(text: &str) -> Vec<String> {
    SummaryPipeline::new().summarize(text).into_key_points()
}

/// Summarize `text` with a custom configuration.
///
/// Fails only when `config` does not pass [`SummarizerConfig::validate`].
pub fn summarize_with_config(
    text: &str,
    config: &SummarizerConfig,
) -> Result<Vec<String>, ConfigError> {
    let pipeline = SummaryPipeline::with_config(config.clone())?;
    Ok(pipeline.summarize(text).into_key_points())
}

/// Summarize many documents in parallel. Output order matches input order.
pub fn summarize_batch<S>(texts: &[S]) -> Vec<Vec<String>>
where
    S: AsRef<str> + Sync,
{
    let pipeline = SummaryPipeline::new();
    texts
        .par_iter()
        .map(|text| pipeline.summarize(text.as_ref()).into_key_points())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_empty() {
        assert!(summarize("").is_empty());
        assert!(summarize("   \n\n  ").is_empty());
    }

    #[test]
    fn test_summarize_single_sentence() {
        assert_eq!(
            summarize("but the results were surprising"),
            vec!["The results were surprising."]
        );
    }

    #[test]
    fn test_summarize_with_config_matches_default() {
        let text = "Cats are animals. Dogs are animals. The sky is blue.";
        assert_eq!(
            summarize_with_config(text, &SummarizerConfig::default()).unwrap(),
            summarize(text)
        );
    }

    #[test]
    fn test_summarize_with_invalid_config_fails() {
        let text = "Cats are animals. Dogs are animals. The sky is blue.";
        let cfg = SummarizerConfig::default().with_budget_floor(f64::NAN);
        assert!(matches!(
            summarize_with_config(text, &cfg),
            Err(ConfigError::InvalidBudgetParameter { .. })
        ));
    }

    #[test]
    fn test_batch_preserves_order() {
        let docs = vec!["First doc.", "", "Second doc. And more."];
        let out = summarize_batch(&docs);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], summarize("First doc."));
        assert!(out[1].is_empty());
        assert_eq!(out[2], summarize("Second doc. And more."));
    }
}
