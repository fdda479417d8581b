use std::time::Duration;

use reqwest::StatusCode;
use safecar_api::models::CreateTelemetryResource;

use crate::configs::Backend;

/// HTTP client for the SafeCar cloud backend.
///
/// Transmission failure is never fatal to ingestion: every outcome folds
/// into a bool and the caller decides what to do with it. Retry policy is
/// deliberately not implemented here.
#[derive(Clone)]
pub struct BackendService {
    client: reqwest::Client,
    telemetry_endpoint: String,
    health_endpoint: String,
    api_key: String,
}

impl BackendService {
    pub fn new(backend: Backend) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(backend.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            telemetry_endpoint: format!("{}/api/v1/telemetry", backend.url),
            health_endpoint: format!("{}/actuator/health", backend.url),
            api_key: backend.api_key,
        })
    }

    /// Post one telemetry sample; true when the backend acknowledged with
    /// 201.
    pub async fn send_telemetry(&self, payload: &CreateTelemetryResource) -> bool {
        let response = self
            .client
            .post(&self.telemetry_endpoint)
            .header("X-API-Key", &self.api_key)
            .json(payload)
            .send()
            .await;

        match response {
            Ok(response) if response.status() == StatusCode::CREATED => true,
            Ok(response) => {
                tracing::warn!(status = %response.status(), "backend rejected telemetry sample");
                false
            }
            Err(e) => {
                tracing::warn!("failed to reach telemetry backend: {}", e);
                false
            }
        }
    }

    pub async fn check_health(&self) -> bool {
        match self.client.get(&self.health_endpoint).send().await {
            Ok(response) => response.status() == StatusCode::OK,
            Err(_) => false,
        }
    }
}
