use super::{AuthError, TelemetryError, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("Authentication error: {0}")]
    AuthError(#[from] AuthError),

    #[error("Telemetry error: {0}")]
    TelemetryError(#[from] TelemetryError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}
