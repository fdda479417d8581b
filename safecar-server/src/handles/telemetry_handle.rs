use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Extension, Json, Router, middleware};
use safecar_api::models::{
    DeviceStatisticsResponse, ReadingIngestResponse, ReadingResponse, VehicleReadingsResponse,
};
use safecar_api::restful::{CreateReadingRequest, ReadingRangeQuery};

use crate::errors::ApiError;
use crate::middlewares::{DeviceAuthState, device_auth};
use crate::models::Device;
use crate::services::TelemetryService;

#[derive(Clone)]
pub struct TelemetryState {
    pub telemetry_service: Arc<TelemetryService>,
}

pub fn telemetry_router(telemetry_state: TelemetryState, auth_state: DeviceAuthState) -> Router {
    Router::new()
        .route(
            "/api/v1/telemetry/readings",
            post(create_reading)
                .route_layer(middleware::from_fn_with_state(auth_state.clone(), device_auth)),
        )
        .route(
            "/api/v1/telemetry/stats",
            get(get_device_statistics)
                .route_layer(middleware::from_fn_with_state(auth_state.clone(), device_auth)),
        )
        .route("/api/v1/telemetry/readings/:reading_id", get(get_reading_by_id))
        .route(
            "/api/v1/telemetry/vehicles/:vehicle_id/readings",
            get(get_vehicle_readings),
        )
        .with_state(telemetry_state)
}

#[utoipa::path(
    post,
    path = "/api/v1/telemetry/readings",
    tag = "telemetry",
    request_body = CreateReadingRequest,
    security(
        ("device_api_key" = [])
    ),
    responses(
        (status = 201, description = "Reading recorded successfully", body = ReadingIngestResponse),
        (status = 400, description = "Invalid sensor payload"),
        (status = 401, description = "Missing or invalid device credentials"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_reading(
    Extension(device): Extension<Device>,
    State(state): State<TelemetryState>,
    Json(body): Json<CreateReadingRequest>,
) -> Result<(StatusCode, Json<ReadingIngestResponse>), ApiError> {
    let result = state.telemetry_service.record_reading(&device, &body).await?;

    Ok((StatusCode::CREATED, Json(result)))
}

#[utoipa::path(
    get,
    path = "/api/v1/telemetry/readings/{reading_id}",
    tag = "telemetry",
    params(
        ("reading_id" = i32, Path, description = "Reading ID")
    ),
    responses(
        (status = 200, description = "Reading found", body = ReadingResponse),
        (status = 404, description = "Reading not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_reading_by_id(
    Path(reading_id): Path<i32>,
    State(state): State<TelemetryState>,
) -> Result<Json<ReadingResponse>, ApiError> {
    let reading = state.telemetry_service.get_reading(reading_id).await?;

    Ok(Json(reading))
}

#[utoipa::path(
    get,
    path = "/api/v1/telemetry/vehicles/{vehicle_id}/readings",
    tag = "telemetry",
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle ID"),
        ("start" = Option<String>, Query, description = "Inclusive range start, ISO-8601"),
        ("end" = Option<String>, Query, description = "Inclusive range end, ISO-8601"),
        ("limit" = Option<i64>, Query, description = "Maximum number of readings")
    ),
    responses(
        (status = 200, description = "Readings for the vehicle", body = VehicleReadingsResponse),
        (status = 400, description = "Invalid time range"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_vehicle_readings(
    Path(vehicle_id): Path<i32>,
    Query(query): Query<ReadingRangeQuery>,
    State(state): State<TelemetryState>,
) -> Result<Json<VehicleReadingsResponse>, ApiError> {
    let readings = state
        .telemetry_service
        .get_vehicle_readings(vehicle_id, &query)
        .await?;

    Ok(Json(readings))
}

#[utoipa::path(
    get,
    path = "/api/v1/telemetry/stats",
    tag = "telemetry",
    security(
        ("device_api_key" = [])
    ),
    responses(
        (status = 200, description = "Statistics for the authenticated device", body = DeviceStatisticsResponse),
        (status = 401, description = "Missing or invalid device credentials"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_device_statistics(
    Extension(device): Extension<Device>,
    State(state): State<TelemetryState>,
) -> Result<Json<DeviceStatisticsResponse>, ApiError> {
    let statistics = state.telemetry_service.get_device_statistics(&device).await?;

    Ok(Json(statistics))
}
