use serde::{Deserialize, Serialize};
use crate::models::{Institution, StudentProfile};

/// Maximum credit for a single test-score band
pub const SCORE_BAND_MAX: f64 = 0.3;
/// Credit awarded exactly at the published minimum
const SCORE_BAND_AT_MINIMUM: f64 = 0.15;

pub const GRE_RAMP_WIDTH: f64 = 10.0;
pub const IELTS_RAMP_WIDTH: f64 = 1.0;

pub const COUNTRY_BONUS: f64 = 0.2;
pub const UNIVERSITY_BONUS: f64 = 0.2;
pub const RANKING_BONUS_MAX: f64 = 0.1;
/// Rankings at or beyond this position earn no ranking bonus
pub const RANKING_BONUS_HORIZON: u32 = 100;

/// Per-band contributions to a match score
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub gre: f64,
    pub ielts: f64,
    pub country: f64,
    pub university: f64,
    pub ranking: f64,
}

impl MatchBreakdown {
    /// Plain sum of all bands, not renormalized
    #[inline]
    pub fn total(&self) -> f64 {
        self.gre + self.ielts + self.country + self.university + self.ranking
    }
}

/// Calculate a student's fit for one institution
///
/// Scoring formula:
/// score = (
///     gre_band            # up to 0.3, partial credit within 10 points of minGRE
///     + ielts_band        # up to 0.3, partial credit within 1 band of minIELTS
///     + country_bonus     # 0.2 if the country is preferred
///     + university_bonus  # 0.2 if a preferred name occurs in the institution name
///     + ranking_bonus     # up to 0.1, better ranking = higher
/// )
pub fn match_breakdown(student: &StudentProfile, institution: &Institution) -> MatchBreakdown {
    let eligibility = &institution.eligibility;

    MatchBreakdown {
        gre: gre_band(student.gre_score, eligibility.min_gre),
        ielts: ielts_band(student.ielts_score, eligibility.min_ielts),
        country: if student.prefers_country(&institution.country) {
            COUNTRY_BONUS
        } else {
            0.0
        },
        university: if student.prefers_university(&institution.name) {
            UNIVERSITY_BONUS
        } else {
            0.0
        },
        ranking: ranking_bonus(institution.ranking_position),
    }
}

/// Total match score; values `<= 0` mean the institution is not recommended
#[inline]
pub fn match_score(student: &StudentProfile, institution: &Institution) -> f64 {
    match_breakdown(student, institution).total()
}

#[inline]
pub fn gre_band(gre: f64, min_gre: f64) -> f64 {
    score_band(gre, min_gre, GRE_RAMP_WIDTH)
}

#[inline]
pub fn ielts_band(ielts: f64, min_ielts: f64) -> f64 {
    score_band(ielts, min_ielts, IELTS_RAMP_WIDTH)
}

/// Piecewise partial credit around a published minimum
///
/// Full credit from `minimum + width`, a linear ramp from 0.15 at the minimum
/// up to full credit, and a linear fall-off to zero at `minimum - width`.
#[inline]
fn score_band(value: f64, minimum: f64, width: f64) -> f64 {
    if value >= minimum + width {
        SCORE_BAND_MAX
    } else if value >= minimum {
        SCORE_BAND_AT_MINIMUM + SCORE_BAND_AT_MINIMUM * ((value - minimum) / width)
    } else if value >= minimum - width {
        SCORE_BAND_AT_MINIMUM * (1.0 - (minimum - value) / width)
    } else {
        0.0
    }
}

/// Bonus approaching 0.1 as ranking approaches 1; unranked (0) earns nothing
#[inline]
pub fn ranking_bonus(ranking: u32) -> f64 {
    if ranking == 0 {
        return 0.0;
    }
    let capped = ranking.min(RANKING_BONUS_HORIZON) as f64;
    RANKING_BONUS_MAX * (1.0 - capped / RANKING_BONUS_HORIZON as f64)
}
