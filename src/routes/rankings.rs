use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{compute_normalized_score, rank_institutions, EngineError, RankedResult};
use crate::models::{
    HealthResponse, Institution, NormalizeRequest, RankingMode, RankingResponse,
    RecommendationRequest, SearchRequest,
};
use crate::services::{full_country_name, in_country, RemoteCatalogClient};

/// Application state shared across all handlers
///
/// The local catalog is loaded once and only ever read.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Vec<Institution>>,
    pub remote: Option<Arc<RemoteCatalogClient>>,
}

/// Configure all ranking-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/scores/normalize", web::post().to(normalize_scores))
        .route("/recommendations", web::post().to(recommend))
        .route("/search", web::post().to(search));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        catalog_size: state.catalog.len(),
        remote_catalog: state.remote.is_some(),
    })
}

/// Score breakdown endpoint
///
/// POST /api/v1/scores/normalize
///
/// Request body:
/// ```json
/// { "gre": 315, "ielts": 7.5, "cgpa": 8.5 }
/// ```
async fn normalize_scores(
    req: web::Json<NormalizeRequest>,
) -> Result<HttpResponse, EngineError> {
    req.validate()?;

    Ok(HttpResponse::Ok().json(compute_normalized_score(req.gre, req.ielts, req.cgpa)))
}

/// Eligibility-fit recommendations from the local catalog
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "greScore": 320,
///   "ieltsScore": 7.5,
///   "reasonForStudying": "Career Advancement",
///   "preferredCountries": ["Canada"],
///   "preferredUniversities": ["Toronto"]
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendationRequest>,
) -> Result<HttpResponse, EngineError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommendation request: {}", errors);
        return Err(errors.into());
    }

    let mut student = req.into_inner().into_profile();
    student.preferred_countries = student
        .preferred_countries
        .iter()
        .map(|country| full_country_name(country).to_string())
        .collect();

    tracing::info!(
        "Recommending universities for GRE {} / IELTS {} across {} preferred countries",
        student.gre_score,
        student.ielts_score,
        student.preferred_countries.len()
    );

    let result = rank_institutions(&student, &state.catalog, &RankingMode::Fit)?;

    Ok(respond(result))
}

/// Tiered search in one country
///
/// POST /api/v1/search
///
/// Request body:
/// ```json
/// {
///   "gre": 315,
///   "ielts": 7.5,
///   "cgpa": 8.5,
///   "country": "USA",
///   "filter": { "category": "Dream" }
/// }
/// ```
async fn search(
    state: web::Data<AppState>,
    req: web::Json<SearchRequest>,
) -> Result<HttpResponse, EngineError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: {}", errors);
        return Err(errors.into());
    }

    let score = compute_normalized_score(req.gre, req.ielts, req.cgpa);
    let country = full_country_name(&req.country);

    tracing::info!("Searching {} with normalized score {:.2}", country, score.final_score);

    let catalog = match &state.remote {
        Some(remote) => remote
            .find_colleges(country, score.final_score)
            .await
            .map_err(|e| {
                tracing::error!("Catalog service request failed: {}", e);
                EngineError::UpstreamUnavailable(e.to_string())
            })?,
        None => in_country(&state.catalog, country),
    };

    tracing::debug!("Catalog returned {} candidates for {}", catalog.len(), country);

    let result = rank_institutions(&req.to_profile(), &catalog, &RankingMode::Tiered(req.filter))?;

    Ok(respond(result))
}

fn respond(result: RankedResult) -> HttpResponse {
    tracing::info!(
        "Returning {} universities (from {} candidates)",
        result.institutions.len(),
        result.total_candidates
    );

    HttpResponse::Ok().json(RankingResponse {
        student_score: result.student_score.map(|s| s.final_score),
        universities: result.institutions,
        total_candidates: result.total_candidates,
        counts: result.counts,
    })
}
