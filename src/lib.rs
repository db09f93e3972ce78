//! B2B Matchmaker - explainable buyer/supplier matching
//!
//! This library provides the match scorer (Jaccard similarity over tag sets,
//! a fixed weighted sum and a typed breakdown rendered to reasons), the
//! in-memory party registry and the HTTP routes that expose them.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{rank, score, similarity, Matcher};
pub use models::{Party, PartyDraft, PartyId, ScoreBreakdown, ScoredMatch, ScoringWeights};
pub use services::{PartyRegistry, Vocabulary};
