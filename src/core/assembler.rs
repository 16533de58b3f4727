use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::{
    aggregate::{compute_normalized_score, institution_score},
    eligibility::match_score,
    error::EngineError,
    tiers::{categorize_by_ranking, classify_relative},
    validation::validate_student,
};
use crate::models::{
    DecoratedInstitution, FitTier, Institution, PrestigeCategory, RankingMode,
    ScoreNormalization, StudentProfile, TierFilter,
};

/// Number of decorated institutions per label, before any filter is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TierCounts {
    pub dream: usize,
    pub competitive: usize,
    pub safe: usize,
    #[serde(rename = "fitSafe")]
    pub fit_safe: usize,
    pub moderate: usize,
    pub ambitious: usize,
}

impl TierCounts {
    pub fn tally(decorated: &[DecoratedInstitution]) -> Self {
        decorated.iter().fold(Self::default(), |mut counts, d| {
            match d.category {
                Some(PrestigeCategory::Dream) => counts.dream += 1,
                Some(PrestigeCategory::Competitive) => counts.competitive += 1,
                Some(PrestigeCategory::Safe) => counts.safe += 1,
                None => {}
            }
            match d.tier {
                Some(FitTier::Safe) => counts.fit_safe += 1,
                Some(FitTier::Moderate) => counts.moderate += 1,
                Some(FitTier::Ambitious) => counts.ambitious += 1,
                None => {}
            }
            counts
        })
    }
}

/// Result of ranking a catalog for one student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    /// Present whenever the student supplied a CGPA
    pub student_score: Option<ScoreNormalization>,
    pub institutions: Vec<DecoratedInstitution>,
    pub total_candidates: usize,
    /// Only produced in tier mode
    pub counts: Option<TierCounts>,
}

/// Rank a catalog for a student
///
/// # Pipeline Stages
/// 1. Validate the student's raw scores
/// 2. Normalize and aggregate them when a CGPA is present
/// 3. Decorate each institution according to `mode`
/// 4. Filter and order the decorated copies
///
/// The catalog is borrowed and never modified. An empty catalog or an empty
/// output is reported as [`EngineError::EmptyResult`].
pub fn rank_institutions(
    student: &StudentProfile,
    catalog: &[Institution],
    mode: &RankingMode,
) -> Result<RankedResult, EngineError> {
    validate_student(student)?;

    if catalog.is_empty() {
        return Err(EngineError::EmptyResult(
            "the catalog contains no institutions".to_string(),
        ));
    }

    let student_score = student
        .cgpa
        .map(|cgpa| compute_normalized_score(student.gre_score, student.ielts_score, cgpa));

    let (institutions, counts) = match mode {
        RankingMode::Fit => (assemble_by_fit(student, catalog), None),
        RankingMode::Tiered(filter) => {
            if matches!(filter, TierFilter::Tier(_)) && student_score.is_none() {
                return Err(EngineError::Validation(
                    "CGPA is required to filter by fit tier".to_string(),
                ));
            }

            let decorated = assemble_by_tier(catalog, student_score.map(|s| s.final_score));
            let counts = TierCounts::tally(&decorated);
            let filtered: Vec<DecoratedInstitution> = decorated
                .into_iter()
                .filter(|d| filter.accepts(d))
                .collect();

            (filtered, Some(counts))
        }
    };

    if institutions.is_empty() {
        let message = match mode {
            RankingMode::Fit => {
                "no institution is a positive match; try adjusting your scores or preferences"
            }
            RankingMode::Tiered(_) => {
                "no institution matches the selected filter; try a different category"
            }
        };
        return Err(EngineError::EmptyResult(message.to_string()));
    }

    tracing::debug!(
        "Ranked {} of {} institutions in {:?} mode",
        institutions.len(),
        catalog.len(),
        mode
    );

    Ok(RankedResult {
        student_score,
        institutions,
        total_candidates: catalog.len(),
        counts,
    })
}

/// Eligibility-fit output: best match first, non-positive matches dropped
///
/// Equal match scores keep the better-ranked institution first.
pub fn assemble_by_fit(
    student: &StudentProfile,
    catalog: &[Institution],
) -> Vec<DecoratedInstitution> {
    let mut decorated: Vec<DecoratedInstitution> = catalog
        .iter()
        .filter_map(|institution| {
            let score = match_score(student, institution);

            if score > 0.0 {
                Some(decorate(institution, institution_score(institution), |d| {
                    d.match_score = Some(score)
                }))
            } else {
                None
            }
        })
        .collect();

    decorated.sort_by(|a, b| {
        b.match_score
            .partial_cmp(&a.match_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.ranking().cmp(&b.ranking()))
    });

    decorated
}

/// Tier-mode output: best ranking first, every institution labelled
///
/// The relative tier is only assigned when the student's aggregate score is
/// known; the ranking category is always assigned.
pub fn assemble_by_tier(
    catalog: &[Institution],
    student_final_score: Option<f64>,
) -> Vec<DecoratedInstitution> {
    let mut decorated: Vec<DecoratedInstitution> = catalog
        .iter()
        .map(|institution| {
            let score = institution_score(institution);

            decorate(institution, score, |d| {
                d.category = Some(categorize_by_ranking(institution.ranking_position));
                d.tier = student_final_score.map(|student| classify_relative(student, score));
            })
        })
        .collect();

    decorated.sort_by_key(DecoratedInstitution::ranking);

    decorated
}

/// Copy an institution with its effective normalized score filled in
fn decorate(
    institution: &Institution,
    normalized_score: f64,
    label: impl FnOnce(&mut DecoratedInstitution),
) -> DecoratedInstitution {
    let mut copy = institution.clone();
    copy.normalized_score = Some(normalized_score);

    let mut decorated = DecoratedInstitution {
        institution: copy,
        match_score: None,
        tier: None,
        category: None,
    };
    label(&mut decorated);
    decorated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Eligibility;

    fn create_institution(id: &str, ranking: u32, min_gre: f64, normalized: f64) -> Institution {
        Institution {
            id: id.to_string(),
            name: format!("University {}", id),
            country: "United States".to_string(),
            location: String::new(),
            ranking_position: ranking,
            website: String::new(),
            eligibility: Eligibility {
                min_gre,
                min_ielts: 7.0,
                min_cgpa: 0.0,
            },
            programs: vec!["Computer Science".to_string()],
            normalized_score: Some(normalized),
        }
    }

    fn create_student() -> StudentProfile {
        StudentProfile::new(315.0, 7.5).with_cgpa(8.5)
    }

    #[test]
    fn test_fit_mode_sorted_descending() {
        let catalog = vec![
            create_institution("a", 150, 330.0, 80.0),
            create_institution("b", 10, 300.0, 60.0),
            create_institution("c", 60, 310.0, 70.0),
        ];

        let result = rank_institutions(&create_student(), &catalog, &RankingMode::Fit).unwrap();

        let scores: Vec<f64> = result
            .institutions
            .iter()
            .map(|d| d.match_score.unwrap())
            .collect();
        assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
        assert_eq!(result.institutions[0].institution.id, "b");
        assert!(result.counts.is_none());
    }

    #[test]
    fn test_fit_mode_drops_non_positive() {
        let mut out_of_reach = create_institution("out-of-reach", 200, 340.0, 95.0);
        out_of_reach.eligibility.min_ielts = 9.0;
        let catalog = vec![create_institution("qualified", 50, 300.0, 60.0), out_of_reach];

        let result = rank_institutions(&create_student(), &catalog, &RankingMode::Fit).unwrap();

        assert_eq!(result.institutions.len(), 1);
        assert_eq!(result.institutions[0].institution.id, "qualified");
        assert_eq!(result.total_candidates, 2);
    }

    #[test]
    fn test_fit_mode_ties_keep_better_ranking_first() {
        let catalog = vec![
            create_institution("worse", 150, 300.0, 60.0),
            create_institution("better", 120, 300.0, 60.0),
        ];

        let result = rank_institutions(&create_student(), &catalog, &RankingMode::Fit).unwrap();

        assert_eq!(result.institutions[0].institution.id, "better");
    }

    #[test]
    fn test_tier_mode_sorted_by_ranking() {
        let catalog = vec![
            create_institution("c", 130, 300.0, 60.0),
            create_institution("a", 5, 330.0, 90.0),
            create_institution("b", 70, 310.0, 75.0),
        ];

        let result = rank_institutions(
            &create_student(),
            &catalog,
            &RankingMode::Tiered(TierFilter::All),
        )
        .unwrap();

        let ids: Vec<&str> = result
            .institutions
            .iter()
            .map(|d| d.institution.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(result.institutions[0].category, Some(PrestigeCategory::Dream));
        assert_eq!(result.institutions[0].tier, Some(FitTier::Ambitious));
        assert_eq!(result.institutions[1].tier, Some(FitTier::Moderate));
        assert_eq!(result.institutions[2].tier, Some(FitTier::Safe));
    }

    #[test]
    fn test_tier_filter_counts() {
        let catalog = vec![
            create_institution("a", 5, 330.0, 90.0),
            create_institution("b", 30, 320.0, 85.0),
            create_institution("c", 70, 310.0, 75.0),
            create_institution("d", 130, 300.0, 60.0),
        ];

        let result = rank_institutions(
            &create_student(),
            &catalog,
            &RankingMode::Tiered(TierFilter::Category(PrestigeCategory::Dream)),
        )
        .unwrap();

        assert_eq!(result.institutions.len(), 2);
        let counts = result.counts.unwrap();
        assert_eq!(counts.dream, 2);
        assert_eq!(counts.competitive, 1);
        assert_eq!(counts.safe, 1);
    }

    #[test]
    fn test_tier_filter_requires_cgpa() {
        let catalog = vec![create_institution("a", 5, 330.0, 90.0)];
        let student = StudentProfile::new(315.0, 7.5);

        let err = rank_institutions(
            &student,
            &catalog,
            &RankingMode::Tiered(TierFilter::Tier(FitTier::Safe)),
        )
        .unwrap_err();

        assert!(matches!(err, EngineError::Validation(_)));
    }

    #[test]
    fn test_tier_mode_without_cgpa_assigns_categories_only() {
        let catalog = vec![create_institution("a", 5, 330.0, 90.0)];
        let student = StudentProfile::new(315.0, 7.5);

        let result =
            rank_institutions(&student, &catalog, &RankingMode::Tiered(TierFilter::All)).unwrap();

        assert!(result.student_score.is_none());
        assert!(result.institutions[0].tier.is_none());
        assert_eq!(result.institutions[0].category, Some(PrestigeCategory::Dream));
    }

    #[test]
    fn test_tier_uses_score_computed_from_minimums() {
        let mut institution = create_institution("a", 5, 340.0, 0.0);
        institution.normalized_score = None;
        institution.eligibility.min_cgpa = 9.0;

        let result = rank_institutions(
            &create_student(),
            &[institution],
            &RankingMode::Tiered(TierFilter::All),
        )
        .unwrap();

        let decorated = &result.institutions[0];
        let expected = compute_normalized_score(340.0, 7.0, 9.0).final_score;
        assert_eq!(decorated.institution.normalized_score, Some(expected));
        assert_eq!(decorated.tier, Some(FitTier::Ambitious));
    }

    #[test]
    fn test_empty_catalog_is_empty_result() {
        let err = rank_institutions(&create_student(), &[], &RankingMode::Fit).unwrap_err();
        assert!(matches!(err, EngineError::EmptyResult(_)));
    }

    #[test]
    fn test_invalid_student_rejected_before_scoring() {
        let catalog = vec![create_institution("a", 5, 330.0, 90.0)];
        let student = StudentProfile::new(200.0, 7.5);

        let err = rank_institutions(&student, &catalog, &RankingMode::Fit).unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
    }

    #[test]
    fn test_catalog_is_not_mutated() {
        let mut institution = create_institution("a", 5, 300.0, 0.0);
        institution.normalized_score = None;
        let catalog = vec![institution];
        let snapshot = catalog.clone();

        let result = rank_institutions(&create_student(), &catalog, &RankingMode::Fit).unwrap();

        assert_eq!(catalog, snapshot);
        assert!(result.institutions[0].institution.normalized_score.is_some());
    }
}
