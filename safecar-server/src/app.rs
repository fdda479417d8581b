use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::configs::{SchemaManager, Settings, Storage};
use crate::handles::*;
use crate::middlewares::DeviceAuthState;
use crate::repositories::{DeviceRepository, SensorReadingRepository};
use crate::services::{AuthService, BackendService, TelemetryService};

pub async fn create_app(settings: &Arc<Settings>) -> Router {
    let storage = Arc::new(
        Storage::new(settings.database.clone(), SchemaManager::default())
            .await
            .unwrap(),
    );

    let device_repository = Arc::new(DeviceRepository::new(storage.clone()));
    let reading_repository = Arc::new(SensorReadingRepository::new(storage.clone()));

    let auth_service = Arc::new(AuthService::new(device_repository.clone()));
    let backend_service = Arc::new(BackendService::new(settings.backend.clone()).unwrap());
    let telemetry_service = Arc::new(TelemetryService::new(
        reading_repository.clone(),
        backend_service.clone(),
    ));

    let health_service = backend_service.clone();
    tokio::spawn(async move {
        if health_service.check_health().await {
            tracing::info!("telemetry backend reachable");
        } else {
            tracing::warn!("telemetry backend not reachable at startup");
        }
    });

    let auth_state = DeviceAuthState {
        auth_service: auth_service.clone(),
    };

    Router::new()
        .route("/", get(about))
        .merge(device_router(DeviceState { auth_service }))
        .merge(telemetry_router(
            TelemetryState { telemetry_service },
            auth_state,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn about() -> &'static str {
    "SafeCar Edge Service - Vehicle Telemetry Collection. \
     POST sensor data to /api/v1/telemetry/readings."
}
