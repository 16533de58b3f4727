use serde::{Deserialize, Serialize};
use crate::core::assembler::TierCounts;
use crate::models::domain::DecoratedInstitution;

/// Response for the recommendation and search endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingResponse {
    #[serde(rename = "studentScore", skip_serializing_if = "Option::is_none")]
    pub student_score: Option<f64>,
    pub universities: Vec<DecoratedInstitution>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<TierCounts>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "catalogSize")]
    pub catalog_size: usize,
    #[serde(rename = "remoteCatalog")]
    pub remote_catalog: bool,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
