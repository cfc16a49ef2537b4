//! Summarization components
//!
//! Provides the character budget, greedy sentence selection and key-point
//! formatting used by the summary pipeline.

pub mod budget;
pub mod formatter;
pub mod selector;
