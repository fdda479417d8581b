use std::sync::Arc;

use axum::Router;
use safecar_server::configs::{Backend, Database, SchemaManager, Storage};
use safecar_server::handles::{DeviceState, TelemetryState, device_router, telemetry_router};
use safecar_server::middlewares::DeviceAuthState;
use safecar_server::models::Device;
use safecar_server::repositories::{DeviceRepository, SensorReadingRepository};
use safecar_server::services::{AuthService, BackendService, TelemetryService};

pub const TEST_DEVICE_ID: &str = "AA:BB:CC:DD:EE:01";
pub const TEST_API_KEY: &str = "test-api-key-12345";

pub struct MockApp {
    pub router: Router,
    pub storage: Arc<Storage>,
    pub device: Device,
}

impl MockApp {
    pub async fn new() -> Self {
        let storage = Arc::new(
            Storage::new(
                Database {
                    migration_path: None,
                    clean_start: true,
                    url: String::from("sqlite::memory:"),
                },
                SchemaManager::default(),
            )
            .await
            .unwrap(),
        );

        let device_repository = Arc::new(DeviceRepository::new(storage.clone()));
        let reading_repository = Arc::new(SensorReadingRepository::new(storage.clone()));

        let auth_service = Arc::new(AuthService::new(device_repository.clone()));
        // Unroutable backend: transmission always fails fast, so tests see
        // backend_synced = false deterministically.
        let backend_service = Arc::new(
            BackendService::new(Backend {
                url: String::from("http://127.0.0.1:9"),
                api_key: String::from("test-backend-key"),
                timeout_secs: 1,
            })
            .unwrap(),
        );
        let telemetry_service = Arc::new(TelemetryService::new(
            reading_repository.clone(),
            backend_service.clone(),
        ));

        let device = auth_service
            .register(TEST_DEVICE_ID, TEST_API_KEY)
            .await
            .unwrap();

        let auth_state = DeviceAuthState {
            auth_service: auth_service.clone(),
        };

        let router = Router::new()
            .merge(device_router(DeviceState { auth_service }))
            .merge(telemetry_router(TelemetryState { telemetry_service }, auth_state));

        Self {
            router,
            storage,
            device,
        }
    }
}
