use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::models::{Eligibility, Institution};

/// Loosely-typed record as returned by an external catalog provider
pub type RawRecord = Map<String, Value>;

/// Institution fields that provider records are resolved into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    Id,
    Name,
    Country,
    Location,
    Ranking,
    Website,
    MinGre,
    MinIelts,
    MinCgpa,
    Programs,
    NormalizedScore,
}

/// Accepted keys per field, most preferred first
const FIELD_ALIASES: &[(CanonicalField, &[&str])] = &[
    (CanonicalField::Id, &["id", "_id", "college_id", "university_id"]),
    (
        CanonicalField::Name,
        &["name", "university", "university_name", "college", "college_name", "institution"],
    ),
    (CanonicalField::Country, &["country", "country_name", "nation"]),
    (CanonicalField::Location, &["location", "city", "state", "region"]),
    (
        CanonicalField::Ranking,
        &["ranking", "rankingPosition", "rank", "world_rank", "qs_rank", "global_rank"],
    ),
    (CanonicalField::Website, &["website", "url", "web", "homepage", "site"]),
    (CanonicalField::MinGre, &["minGRE", "min_gre", "gre", "gre_min", "required_gre"]),
    (
        CanonicalField::MinIelts,
        &["minIELTS", "min_ielts", "ielts", "ielts_min", "required_ielts"],
    ),
    (
        CanonicalField::MinCgpa,
        &["minCGPA", "min_cgpa", "cgpa", "gpa", "cgpa_min", "required_cgpa"],
    ),
    (CanonicalField::Programs, &["programs", "programmes", "courses"]),
    (
        CanonicalField::NormalizedScore,
        &[
            "normalizedScore",
            "normalized_score",
            "normalised_score",
            "overall_normalised_score",
            "overall_normalized_score",
            "score",
        ],
    ),
];

static ALIAS_INDEX: OnceLock<HashMap<String, CanonicalField>> = OnceLock::new();

fn alias_index() -> &'static HashMap<String, CanonicalField> {
    ALIAS_INDEX.get_or_init(|| {
        FIELD_ALIASES
            .iter()
            .flat_map(|(field, aliases)| aliases.iter().map(move |alias| (normalize_key(alias), *field)))
            .collect()
    })
}

/// Lowercase and drop separators so `Min_GRE`, `min gre` and `minGRE` agree
fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl CanonicalField {
    pub fn aliases(self) -> &'static [&'static str] {
        FIELD_ALIASES
            .iter()
            .find(|(field, _)| *field == self)
            .map(|(_, aliases)| *aliases)
            .unwrap_or(&[])
    }

    /// Canonical field for an arbitrary provider key, if it is a known alias
    pub fn for_key(key: &str) -> Option<Self> {
        alias_index().get(&normalize_key(key)).copied()
    }
}

/// Look up a field in a record, trying exact aliases in preference order and
/// then any key that normalizes to a known alias. Nulls count as absent.
pub fn resolve<'a>(record: &'a RawRecord, field: CanonicalField) -> Option<&'a Value> {
    field
        .aliases()
        .iter()
        .filter_map(|alias| record.get(*alias))
        .find(|value| !value.is_null())
        .or_else(|| {
            record
                .iter()
                .filter(|(_, value)| !value.is_null())
                .find(|(key, _)| CanonicalField::for_key(key) == Some(field))
                .map(|(_, value)| value)
        })
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
    .filter(|s| !s.is_empty())
}

fn as_programs(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(as_text).collect(),
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn slug(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Build an institution from a provider record
///
/// Returns `None` for records without a name or without a ranking of at
/// least 1 after rounding. Missing eligibility minimums default to 0; they are
/// read from a nested `eligibility` object when the provider sends one.
pub fn institution_from_record(record: &RawRecord) -> Option<Institution> {
    let name = resolve(record, CanonicalField::Name).and_then(as_text)?;

    let ranking = resolve(record, CanonicalField::Ranking)
        .and_then(as_number)
        .map(f64::round)
        .filter(|r| *r >= 1.0 && *r <= u32::MAX as f64)? as u32;

    let text = |field| resolve(record, field).and_then(as_text).unwrap_or_default();

    let nested = record
        .get("eligibility")
        .and_then(Value::as_object);
    let minimum = |field| {
        nested
            .and_then(|eligibility| resolve(eligibility, field))
            .or_else(|| resolve(record, field))
            .and_then(as_number)
            .unwrap_or(0.0)
    };

    let id = resolve(record, CanonicalField::Id)
        .and_then(as_text)
        .unwrap_or_else(|| slug(&name));

    Some(Institution {
        id,
        country: text(CanonicalField::Country),
        location: text(CanonicalField::Location),
        ranking_position: ranking,
        website: text(CanonicalField::Website),
        eligibility: Eligibility {
            min_gre: minimum(CanonicalField::MinGre),
            min_ielts: minimum(CanonicalField::MinIelts),
            min_cgpa: minimum(CanonicalField::MinCgpa),
        },
        programs: resolve(record, CanonicalField::Programs)
            .map(as_programs)
            .unwrap_or_default(),
        normalized_score: resolve(record, CanonicalField::NormalizedScore).and_then(as_number),
        name,
    })
}
