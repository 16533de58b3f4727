use crate::core::normalize::{normalize_cgpa, normalize_gre, normalize_ielts};
use crate::models::{Institution, ScoreNormalization};

pub const GRE_WEIGHT: f64 = 0.5;
pub const IELTS_WEIGHT: f64 = 0.3;
pub const CGPA_WEIGHT: f64 = 0.2;

/// Combine normalized metrics into one competitiveness score
///
/// score = 0.5 * gre + 0.3 * ielts + 0.2 * cgpa
///
/// The result is unbounded and unrounded; it stays within 0-100 only for
/// in-domain inputs.
#[inline]
pub fn aggregate(normalized_gre: f64, normalized_ielts: f64, normalized_cgpa: f64) -> f64 {
    GRE_WEIGHT * normalized_gre + IELTS_WEIGHT * normalized_ielts + CGPA_WEIGHT * normalized_cgpa
}

/// Normalize raw scores and aggregate them into a breakdown
pub fn compute_normalized_score(gre: f64, ielts: f64, cgpa: f64) -> ScoreNormalization {
    let normalized_gre = normalize_gre(gre);
    let normalized_ielts = normalize_ielts(ielts);
    let normalized_cgpa = normalize_cgpa(cgpa);

    ScoreNormalization {
        normalized_gre,
        normalized_ielts,
        normalized_cgpa,
        final_score: aggregate(normalized_gre, normalized_ielts, normalized_cgpa),
    }
}

/// Normalized score of an institution on the student scale
///
/// Uses the catalog-supplied value when present, otherwise scores the
/// eligibility minimums with the same normalization as the student.
pub fn institution_score(institution: &Institution) -> f64 {
    institution.normalized_score.unwrap_or_else(|| {
        let eligibility = &institution.eligibility;
        compute_normalized_score(eligibility.min_gre, eligibility.min_ielts, eligibility.min_cgpa)
            .final_score
    })
}
