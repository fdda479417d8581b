use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request};
use axum::middleware::Next;
use axum::response::IntoResponse;

use crate::errors::{ApiError, AuthError};
use crate::services::AuthService;

pub const DEVICE_ID_HEADER: &str = "x-device-id";
pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Clone)]
pub struct DeviceAuthState {
    pub auth_service: Arc<AuthService>,
}

/// Authenticate the reporting device from its `X-Device-Id` /
/// `X-API-Key` headers and make it available to handlers as a request
/// extension.
pub async fn device_auth(
    State(state): State<DeviceAuthState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let (device_id, api_key) = extract_credentials(req.headers())?;

    let device = state
        .auth_service
        .authenticate(&device_id, &api_key)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    req.extensions_mut().insert(device);

    Ok(next.run(req).await)
}

fn extract_credentials(headers: &HeaderMap) -> Result<(String, String), AuthError> {
    let device_id = headers
        .get(DEVICE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.trim().is_empty())
        .ok_or(AuthError::MissingCredentials)?;

    let api_key = headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.trim().is_empty())
        .ok_or(AuthError::MissingCredentials)?;

    Ok((device_id.to_string(), api_key.to_string()))
}
