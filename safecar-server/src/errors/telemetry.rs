use axum::http::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TelemetryError {
    #[error("Reading not found")]
    ReadingNotFound,
}

impl TelemetryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TelemetryError::ReadingNotFound => StatusCode::NOT_FOUND,
        }
    }
}
