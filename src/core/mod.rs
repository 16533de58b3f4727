// Core algorithm exports
pub mod aggregate;
pub mod assembler;
pub mod eligibility;
pub mod error;
pub mod normalize;
pub mod tiers;
pub mod validation;

pub use aggregate::{aggregate, compute_normalized_score, institution_score};
pub use assembler::{assemble_by_fit, assemble_by_tier, rank_institutions, RankedResult, TierCounts};
pub use eligibility::{match_breakdown, match_score, MatchBreakdown};
pub use error::EngineError;
pub use normalize::{normalize, Metric};
pub use tiers::{categorize_by_ranking, classify_relative};
pub use validation::{validate_scores, validate_student, RawScores};
