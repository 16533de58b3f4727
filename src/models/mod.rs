// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    DecoratedInstitution, Eligibility, FitTier, Institution, PrestigeCategory, RankingMode,
    ScoreNormalization, StudentProfile, TierFilter,
};
pub use requests::{NormalizeRequest, RecommendationRequest, SearchRequest};
pub use responses::{ErrorResponse, HealthResponse, RankingResponse};
