use axum::http::StatusCode;

/// Rejections raised while turning a raw ingestion payload into a
/// validated sensor reading. Every variant names the offending field;
/// values are never clamped or coerced, a bad value is a hard rejection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    EmptyIdentifier { field: &'static str },

    #[error("{field} must be a positive integer")]
    InvalidIdentifier { field: &'static str },

    #[error("{field} must be one of CABIN, ENGINE")]
    InvalidEnum { field: &'static str },

    #[error("{field} must be {expected}")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
    },

    #[error("{field} is required when {dependent} is provided")]
    MissingDependentField {
        field: &'static str,
        dependent: &'static str,
    },

    #[error("latitude and longitude must be provided together")]
    IncompleteCoordinatePair,

    #[error("Invalid timestamp format. Use ISO 8601 format")]
    InvalidTimestamp,

    #[error("At least one sensor reading must be provided")]
    EmptyReading,
}

impl ValidationError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}
