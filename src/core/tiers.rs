use crate::models::{FitTier, PrestigeCategory};

/// Score gap separating Moderate from Safe and Ambitious
pub const TIER_MARGIN: f64 = 5.0;

pub const DREAM_MAX_RANKING: u32 = 40;
pub const COMPETITIVE_MAX_RANKING: u32 = 120;

/// Relative-score policy: compare the student's aggregate score with the
/// institution's normalized score
///
/// A difference of exactly +5 is Safe and exactly -5 is Moderate. The upper
/// boundary is inclusive on purpose, so a gap of exactly 5 points is Safe.
#[inline]
pub fn classify_relative(student_score: f64, institution_score: f64) -> FitTier {
    let difference = student_score - institution_score;

    if difference >= TIER_MARGIN {
        FitTier::Safe
    } else if difference >= -TIER_MARGIN {
        FitTier::Moderate
    } else {
        FitTier::Ambitious
    }
}

/// Absolute-ranking policy: bucket by global ranking, ignoring the student
#[inline]
pub fn categorize_by_ranking(ranking: u32) -> PrestigeCategory {
    match ranking {
        1..=DREAM_MAX_RANKING => PrestigeCategory::Dream,
        r if r > DREAM_MAX_RANKING && r <= COMPETITIVE_MAX_RANKING => PrestigeCategory::Competitive,
        _ => PrestigeCategory::Safe,
    }
}
