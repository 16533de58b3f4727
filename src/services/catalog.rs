use crate::models::Institution;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or fetching a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Catalog service returned status {0}")]
    ApiError(reqwest::StatusCode),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("No usable institution records in response")]
    NoUsableRecords,

    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Accepted layouts for a local dataset file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Table { institutions: Vec<Institution> },
    List(Vec<Institution>),
}

impl CatalogFile {
    fn into_institutions(self) -> Vec<Institution> {
        match self {
            CatalogFile::Table { institutions } => institutions,
            CatalogFile::List(institutions) => institutions,
        }
    }
}

/// Load a local catalog from a `.json` or `.toml` file
///
/// JSON may be a bare array or an object with an `institutions` array; TOML
/// uses `[[institutions]]` tables. Institutions without an id get their
/// position in the file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Institution>, CatalogError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let file: CatalogFile = if is_toml {
        toml::from_str(&contents)?
    } else {
        serde_json::from_str(&contents)?
    };

    let mut institutions = file.into_institutions();
    for (index, institution) in institutions.iter_mut().enumerate() {
        if institution.id.is_empty() {
            institution.id = (index + 1).to_string();
        }
    }

    tracing::debug!(
        "Loaded {} institutions from {}",
        institutions.len(),
        path.display()
    );

    Ok(institutions)
}

/// Local catalog entries located in `country`, compared case-insensitively
pub fn in_country(catalog: &[Institution], country: &str) -> Vec<Institution> {
    catalog
        .iter()
        .filter(|institution| institution.country.eq_ignore_ascii_case(country))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_catalog(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_json_list() {
        let file = write_catalog(
            ".json",
            r#"[
                {"name": "MIT", "country": "United States", "ranking": 1,
                 "eligibility": {"minGRE": 325, "minIELTS": 7.5}},
                {"id": "ox", "name": "University of Oxford", "country": "United Kingdom",
                 "ranking": 3, "eligibility": {"minGRE": 320, "minIELTS": 7.5, "minCGPA": 8.5}}
            ]"#,
        );

        let catalog = load_catalog(file.path()).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].id, "1");
        assert_eq!(catalog[1].id, "ox");
        assert_eq!(catalog[0].eligibility.min_cgpa, 0.0);
    }

    #[test]
    fn test_load_json_table() {
        let file = write_catalog(
            ".json",
            r#"{"institutions": [
                {"name": "ETH Zurich", "country": "Switzerland", "rankingPosition": 7,
                 "eligibility": {"minGRE": 315, "minIELTS": 7.0}}
            ]}"#,
        );

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog[0].ranking_position, 7);
    }

    #[test]
    fn test_load_toml() {
        let file = write_catalog(
            ".toml",
            r#"
[[institutions]]
id = "uoft"
name = "University of Toronto"
country = "Canada"
ranking = 21
programs = ["Computer Science"]

[institutions.eligibility]
minGRE = 310
minIELTS = 7.0
"#,
        );

        let catalog = load_catalog(file.path()).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].eligibility.min_gre, 310.0);
        assert_eq!(catalog[0].programs, vec!["Computer Science"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_catalog("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn test_in_country_case_insensitive() {
        let file = write_catalog(
            ".json",
            r#"[
                {"name": "McGill University", "country": "Canada", "ranking": 30,
                 "eligibility": {"minGRE": 310, "minIELTS": 6.5}},
                {"name": "UCL", "country": "United Kingdom", "ranking": 9,
                 "eligibility": {"minGRE": 315, "minIELTS": 7.0}}
            ]"#,
        );
        let catalog = load_catalog(file.path()).unwrap();

        let canadian = in_country(&catalog, "canada");
        assert_eq!(canadian.len(), 1);
        assert_eq!(canadian[0].name, "McGill University");
    }
}
