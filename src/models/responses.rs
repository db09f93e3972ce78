use serde::{Deserialize, Serialize};
use crate::models::domain::{Contribution, PartyId, ScoredMatch};

/// Response for find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindMatchesResponse {
    pub buyer_id: PartyId,
    pub matches: Vec<ScoredMatch>,
    pub total_candidates: usize,
}

/// Response for scoring a single buyer/supplier pair
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorePairResponse {
    pub score: f64,
    pub reasons: Vec<String>,
    pub contributions: Vec<Contribution>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub parties: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
