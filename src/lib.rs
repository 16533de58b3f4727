//! Gradmatch - academic fit scoring and university matching
//!
//! This library normalizes GRE, IELTS and CGPA scores onto a common scale,
//! aggregates them into one competitiveness score, and ranks a university
//! catalog either by eligibility fit or by tier.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{compute_normalized_score, rank_institutions, EngineError, RankedResult};
pub use models::{
    DecoratedInstitution, FitTier, Institution, PrestigeCategory, RankingMode, ScoreNormalization,
    StudentProfile, TierFilter,
};
