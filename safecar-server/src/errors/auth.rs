use axum::http::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Missing authentication headers: X-Device-Id and X-API-Key required")]
    MissingCredentials,

    #[error("Device not found or invalid API key")]
    InvalidCredentials,

    #[error("Device ID cannot be empty")]
    EmptyDeviceId,

    #[error("API key cannot be empty")]
    EmptyApiKey,

    #[error("API key must be at least 8 characters long")]
    ApiKeyTooShort,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingCredentials => StatusCode::UNAUTHORIZED,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::EmptyDeviceId => StatusCode::BAD_REQUEST,
            AuthError::EmptyApiKey => StatusCode::BAD_REQUEST,
            AuthError::ApiKeyTooShort => StatusCode::BAD_REQUEST,
        }
    }
}
