//! noor-match
//!
//! Keyword relevance matching over small multilingual corpora. See `similarity`
//! for the scoring primitive and `matcher` for ranking; `examples/solve.rs`
//! runs the matcher against the built-in guidance set.
pub mod matcher;
pub mod similarity;

pub use matcher::{match_query, MatchOptions, MatchOutcome, RelevanceMatcher};
pub use similarity::{overlap, score_record, scoring_targets, ScoringTarget};
