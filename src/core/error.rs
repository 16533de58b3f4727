use thiserror::Error;

/// Failures surfaced to the caller of the scoring pipeline
///
/// None of these are retried inside the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("No universities found: {0}")]
    EmptyResult(String),

    #[error("Catalog service unavailable: {0}")]
    UpstreamUnavailable(String),
}

impl EngineError {
    /// Short machine-readable label used in error responses
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::Validation(_) => "validation_error",
            EngineError::EmptyResult(_) => "empty_result",
            EngineError::UpstreamUnavailable(_) => "upstream_unavailable",
        }
    }
}

impl From<validator::ValidationErrors> for EngineError {
    fn from(errors: validator::ValidationErrors) -> Self {
        EngineError::Validation(errors.to_string())
    }
}
