use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::Validate;

use crate::models::domain::{StudentProfile, TierFilter};

/// Request for a score breakdown before submitting a search
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NormalizeRequest {
    #[validate(range(min = 260.0, max = 340.0, message = "GRE score must be between 260-340"))]
    pub gre: f64,
    #[validate(range(min = 0.0, max = 9.0, message = "IELTS score must be between 0-9"))]
    pub ielts: f64,
    #[validate(range(min = 0.0, max = 10.0, message = "CGPA must be between 0-10"))]
    pub cgpa: f64,
}

/// Request for eligibility-fit recommendations from the local catalog
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationRequest {
    #[validate(range(min = 260.0, max = 340.0, message = "GRE score must be between 260-340"))]
    #[serde(rename = "greScore", alias = "gre_score", alias = "gre")]
    pub gre_score: f64,
    #[validate(range(min = 0.0, max = 9.0, message = "IELTS score must be between 0-9"))]
    #[serde(rename = "ieltsScore", alias = "ielts_score", alias = "ielts")]
    pub ielts_score: f64,
    #[validate(length(min = 1, message = "Please select a reason"))]
    #[serde(rename = "reasonForStudying", alias = "reason_for_studying", default)]
    pub reason_for_studying: String,
    #[validate(length(min = 1, message = "Please select at least one country"))]
    #[serde(rename = "preferredCountries", alias = "preferred_countries", default)]
    pub preferred_countries: BTreeSet<String>,
    #[serde(
        rename = "preferredUniversities",
        alias = "preferredUniversityNames",
        alias = "preferred_universities",
        default
    )]
    pub preferred_universities: BTreeSet<String>,
}

impl RecommendationRequest {
    pub fn into_profile(self) -> StudentProfile {
        StudentProfile {
            gre_score: self.gre_score,
            ielts_score: self.ielts_score,
            cgpa: None,
            preferred_countries: self.preferred_countries,
            preferred_university_names: self.preferred_universities,
            reason_for_studying: self.reason_for_studying,
        }
    }
}

/// Request for a tiered university search in one country
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(range(min = 260.0, max = 340.0, message = "GRE score must be between 260-340"))]
    pub gre: f64,
    #[validate(range(min = 0.0, max = 9.0, message = "IELTS score must be between 0-9"))]
    pub ielts: f64,
    #[validate(range(min = 0.0, max = 10.0, message = "CGPA must be between 0-10"))]
    pub cgpa: f64,
    #[validate(length(min = 1, message = "Please select a country"))]
    pub country: String,
    #[serde(default)]
    pub filter: TierFilter,
}

impl SearchRequest {
    pub fn to_profile(&self) -> StudentProfile {
        let mut profile = StudentProfile::new(self.gre, self.ielts).with_cgpa(self.cgpa);
        profile.preferred_countries.insert(self.country.clone());
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_request_range_validation() {
        let request = NormalizeRequest {
            gre: 250.0,
            ielts: 7.0,
            cgpa: 8.0,
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("gre"));
    }

    #[test]
    fn test_recommendation_request_requires_country() {
        let json = r#"{"greScore": 320, "ieltsScore": 7.5, "reasonForStudying": "Career"}"#;
        let request: RecommendationRequest = serde_json::from_str(json).unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("preferred_countries"));
    }

    #[test]
    fn test_search_request_defaults_to_all() {
        let json = r#"{"gre": 315, "ielts": 7.5, "cgpa": 8.5, "country": "USA"}"#;
        let request: SearchRequest = serde_json::from_str(json).unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.filter, TierFilter::All);
        assert_eq!(request.to_profile().cgpa, Some(8.5));
    }
}
