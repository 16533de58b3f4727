use validator::Validate;

use crate::core::error::EngineError;
use crate::models::StudentProfile;

/// Raw admission scores checked against their documented domains
#[derive(Debug, Clone, Copy, Validate)]
pub struct RawScores {
    #[validate(range(min = 260.0, max = 340.0, message = "GRE score must be between 260-340"))]
    pub gre: f64,
    #[validate(range(min = 0.0, max = 9.0, message = "IELTS score must be between 0-9"))]
    pub ielts: f64,
    #[validate(range(min = 0.0, max = 10.0, message = "CGPA must be between 0-10"))]
    pub cgpa: Option<f64>,
}

/// Reject raw scores outside their documented domains
///
/// Every violation is reported. NaN and infinities fail the range rules.
pub fn validate_scores(gre: f64, ielts: f64, cgpa: Option<f64>) -> Result<(), EngineError> {
    RawScores { gre, ielts, cgpa }.validate()?;
    Ok(())
}

#[inline]
pub fn validate_student(student: &StudentProfile) -> Result<(), EngineError> {
    student.validate()?;
    Ok(())
}
