use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use safecar_api::models::{DeviceResponse, ValidateDeviceResponse};
use safecar_api::restful::{RegisterDeviceRequest, ValidateDeviceRequest};

use crate::errors::{ApiError, AuthError};
use crate::services::AuthService;

#[derive(Clone)]
pub struct DeviceState {
    pub auth_service: Arc<AuthService>,
}

pub fn device_router(device_state: DeviceState) -> Router {
    Router::new()
        .route("/api/v1/auth/devices", post(register_device))
        .route("/api/v1/auth/devices/validate", post(validate_device))
        .with_state(device_state)
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/devices",
    tag = "auth",
    request_body = RegisterDeviceRequest,
    responses(
        (status = 201, description = "Device registered successfully", body = DeviceResponse),
        (status = 400, description = "Invalid device id or API key"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn register_device(
    State(state): State<DeviceState>,
    Json(body): Json<RegisterDeviceRequest>,
) -> Result<(StatusCode, Json<DeviceResponse>), ApiError> {
    let device = state
        .auth_service
        .register(&body.device_id, &body.api_key)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DeviceResponse {
            device_id: device.device_id,
            created_at: device.created_at,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/devices/validate",
    tag = "auth",
    request_body = ValidateDeviceRequest,
    responses(
        (status = 200, description = "Device credentials are valid", body = ValidateDeviceResponse),
        (status = 401, description = "Invalid device credentials"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn validate_device(
    State(state): State<DeviceState>,
    Json(body): Json<ValidateDeviceRequest>,
) -> Result<Json<ValidateDeviceResponse>, ApiError> {
    let device = state
        .auth_service
        .authenticate(&body.device_id, &body.api_key)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    Ok(Json(ValidateDeviceResponse {
        valid: true,
        device_id: device.device_id,
        created_at: device.created_at,
    }))
}
