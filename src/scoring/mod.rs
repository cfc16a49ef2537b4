//! Sentence scoring
//!
//! Pairwise token-bag overlap and the centrality ranks built from it.

pub mod centrality;
pub mod overlap;

pub use centrality::Ranking;
pub use overlap::overlap_score;
