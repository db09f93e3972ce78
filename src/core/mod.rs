// Core algorithm exports
pub mod explain;
pub mod matcher;
pub mod scoring;
pub mod similarity;

pub use explain::{describe, reasons};
pub use matcher::{rank, MatchResult, Matcher};
pub use scoring::{calculate_match_score, score, score_breakdown};
pub use similarity::similarity;
