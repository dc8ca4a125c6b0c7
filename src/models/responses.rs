use serde::{Deserialize, Serialize};
use crate::models::domain::Creator;

/// Creator augmented with the computed match score for a campaign
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCreator {
    #[serde(flatten)]
    pub creator: Creator,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub creators: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
