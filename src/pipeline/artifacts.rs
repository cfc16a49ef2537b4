//! Public-facing pipeline output.
//!
//! Everything before [`SummaryResult`] is internal to the pipeline and may
//! change; this type is the contract exposed to JSON consumers.

use serde::{Deserialize, Serialize};

/// One key point of a summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryPoint {
    /// Formatted sentence (connective stripped, period appended)
    pub text: String,
    /// Position of the source sentence in the document
    pub index: usize,
    /// Paragraph the source sentence came from
    pub paragraph: usize,
    /// Centrality rank of the source sentence (more negative = more central)
    pub rank: f64,
}

/// Formatted summary of one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Key points in document order
    pub points: Vec<SummaryPoint>,
    /// Character budget the selection ran against
    pub max_chars: f64,
    /// Number of sentences the document was segmented into
    pub sentence_count: usize,
}

impl SummaryResult {
    /// Key-point texts in document order
    pub fn key_points(&self) -> Vec<String> {
        self.points.iter().map(|p| p.text.clone()).collect()
    }

    /// Consume the result, keeping only the key-point texts
    pub fn into_key_points(self) -> Vec<String> {
        self.points.into_iter().map(|p| p.text).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
