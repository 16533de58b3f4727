use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::Validate;

/// Student scores and preferences for a single scoring request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct StudentProfile {
    #[validate(range(min = 260.0, max = 340.0, message = "GRE score must be between 260-340"))]
    #[serde(rename = "greScore", alias = "gre_score", alias = "gre")]
    pub gre_score: f64,
    #[validate(range(min = 0.0, max = 9.0, message = "IELTS score must be between 0-9"))]
    #[serde(rename = "ieltsScore", alias = "ielts_score", alias = "ielts")]
    pub ielts_score: f64,
    /// Absent in eligibility-fit requests
    #[validate(range(min = 0.0, max = 10.0, message = "CGPA must be between 0-10"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cgpa: Option<f64>,
    #[serde(rename = "preferredCountries", alias = "preferred_countries", default)]
    pub preferred_countries: BTreeSet<String>,
    #[serde(
        rename = "preferredUniversityNames",
        alias = "preferredUniversities",
        alias = "preferred_universities",
        default
    )]
    pub preferred_university_names: BTreeSet<String>,
    #[serde(rename = "reasonForStudying", alias = "reason_for_studying", default)]
    pub reason_for_studying: String,
}

impl StudentProfile {
    pub fn new(gre_score: f64, ielts_score: f64) -> Self {
        Self {
            gre_score,
            ielts_score,
            cgpa: None,
            preferred_countries: BTreeSet::new(),
            preferred_university_names: BTreeSet::new(),
            reason_for_studying: String::new(),
        }
    }

    pub fn with_cgpa(mut self, cgpa: f64) -> Self {
        self.cgpa = Some(cgpa);
        self
    }

    pub fn prefers_country(&self, country: &str) -> bool {
        self.preferred_countries.contains(country)
    }

    /// True when any non-blank preferred name occurs inside `name`
    pub fn prefers_university(&self, name: &str) -> bool {
        self.preferred_university_names
            .iter()
            .filter(|preferred| !preferred.trim().is_empty())
            .any(|preferred| name.contains(preferred.as_str()))
    }
}

/// Minimum admission requirements published by an institution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Eligibility {
    #[serde(rename = "minGRE", alias = "min_gre")]
    pub min_gre: f64,
    #[serde(rename = "minIELTS", alias = "min_ielts")]
    pub min_ielts: f64,
    #[serde(rename = "minCGPA", alias = "min_cgpa", default)]
    pub min_cgpa: f64,
}

/// University record as supplied by a catalog provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Institution {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub location: String,
    /// 1 is the best ranked institution
    #[serde(rename = "rankingPosition", alias = "ranking", alias = "ranking_position")]
    pub ranking_position: u32,
    #[serde(default)]
    pub website: String,
    pub eligibility: Eligibility,
    #[serde(default)]
    pub programs: Vec<String>,
    #[serde(
        rename = "normalizedScore",
        alias = "normalized_score",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub normalized_score: Option<f64>,
}

/// Normalized breakdown of a student's raw scores, every field on a 0-100 scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreNormalization {
    #[serde(rename = "normalizedGRE")]
    pub normalized_gre: f64,
    #[serde(rename = "normalizedIELTS")]
    pub normalized_ielts: f64,
    #[serde(rename = "normalizedCGPA")]
    pub normalized_cgpa: f64,
    #[serde(rename = "finalScore")]
    pub final_score: f64,
}

/// Fit of an institution relative to the student's own aggregate score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FitTier {
    Safe,
    Moderate,
    Ambitious,
}

/// Global prestige bucket derived from ranking alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PrestigeCategory {
    Dream,
    Competitive,
    Safe,
}

/// Output copy of an institution carrying whatever the ranking mode computed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecoratedInstitution {
    #[serde(flatten)]
    pub institution: Institution,
    #[serde(rename = "matchScore", default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<FitTier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<PrestigeCategory>,
}

impl DecoratedInstitution {
    pub fn ranking(&self) -> u32 {
        self.institution.ranking_position
    }
}

/// Restriction applied to tier-mode output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierFilter {
    #[default]
    All,
    Category(PrestigeCategory),
    Tier(FitTier),
}

impl TierFilter {
    pub fn accepts(&self, decorated: &DecoratedInstitution) -> bool {
        match self {
            TierFilter::All => true,
            TierFilter::Category(category) => decorated.category == Some(*category),
            TierFilter::Tier(tier) => decorated.tier == Some(*tier),
        }
    }
}

/// Selects how the catalog is scored and ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingMode {
    /// Eligibility match score, best fit first, non-positive scores dropped
    Fit,
    /// Tier and category labels, best ranked first
    Tiered(TierFilter),
}
