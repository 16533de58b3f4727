use crate::models::Institution;
use crate::services::aliases::institution_from_record;
use crate::services::catalog::CatalogError;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Short country labels expanded to the names the catalog service expects
const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("USA", "United States"),
    ("US", "United States"),
    ("UK", "United Kingdom"),
    ("UAE", "United Arab Emirates"),
];

/// Full country name for a form label; unknown labels pass through unchanged
pub fn full_country_name(country: &str) -> &str {
    let trimmed = country.trim();
    COUNTRY_NAMES
        .iter()
        .find(|(short, _)| short.eq_ignore_ascii_case(trimmed))
        .map(|(_, full)| *full)
        .unwrap_or(trimmed)
}

/// Query body sent to the catalog service
#[derive(Debug, Clone, Serialize)]
pub struct CatalogQuery<'a> {
    pub country: &'a str,
    pub overall_normalised_score: f64,
}

/// Remote university catalog client
///
/// Sends the student's country and aggregate score, and turns the
/// loosely-typed response into institutions via the field-alias table.
pub struct RemoteCatalogClient {
    endpoint: String,
    client: Client,
}

impl RemoteCatalogClient {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, CatalogError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch candidate institutions for a country and overall score
    pub async fn find_colleges(
        &self,
        country: &str,
        overall_score: f64,
    ) -> Result<Vec<Institution>, CatalogError> {
        let query = CatalogQuery {
            country: full_country_name(country),
            overall_normalised_score: overall_score,
        };

        tracing::debug!(
            "Querying catalog service {} for {} (score {:.2})",
            self.endpoint,
            query.country,
            overall_score
        );

        let response = self.client.post(&self.endpoint).json(&query).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Catalog service returned {} for {}", status, query.country);
            return Err(CatalogError::ApiError(status));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| CatalogError::InvalidResponse(format!("body is not JSON: {}", e)))?;

        institutions_from_payload(&payload)
    }
}

/// Locate the record array in a provider payload
///
/// Looks at `results.colleges`, then top-level `colleges`, `universities`, and
/// `results` when it is itself an array.
fn record_array(payload: &Value) -> Option<&Vec<Value>> {
    payload
        .get("results")
        .and_then(|results| results.get("colleges"))
        .and_then(Value::as_array)
        .or_else(|| payload.get("colleges").and_then(Value::as_array))
        .or_else(|| payload.get("universities").and_then(Value::as_array))
        .or_else(|| payload.get("results").and_then(Value::as_array))
}

/// Convert a provider payload into institutions, dropping unusable records
pub fn institutions_from_payload(payload: &Value) -> Result<Vec<Institution>, CatalogError> {
    let records = record_array(payload).ok_or_else(|| {
        CatalogError::InvalidResponse("missing results.colleges array".to_string())
    })?;

    let institutions: Vec<Institution> = records
        .iter()
        .filter_map(Value::as_object)
        .filter_map(institution_from_record)
        .collect();

    let dropped = records.len() - institutions.len();
    if dropped > 0 {
        tracing::warn!("Dropped {} unusable catalog records", dropped);
    }

    if institutions.is_empty() {
        return Err(CatalogError::NoUsableRecords);
    }

    Ok(institutions)
}
