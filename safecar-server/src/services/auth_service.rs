use std::sync::Arc;

use time::OffsetDateTime;

use crate::errors::{ApiError, AuthError};
use crate::models::Device;
use crate::repositories::DeviceRepository;

const MIN_API_KEY_LENGTH: usize = 8;

/// Device registration and credential checks. Credentials are a plain
/// device id + API key equality match against the registry.
#[derive(Clone)]
pub struct AuthService {
    device_repository: Arc<DeviceRepository>,
}

impl AuthService {
    pub fn new(device_repository: Arc<DeviceRepository>) -> Self {
        Self { device_repository }
    }

    /// Register a new device, or re-key an existing one.
    pub async fn register(&self, device_id: &str, api_key: &str) -> Result<Device, ApiError> {
        let device_id = device_id.trim();
        let api_key = api_key.trim();

        if device_id.is_empty() {
            return Err(AuthError::EmptyDeviceId.into());
        }
        if api_key.is_empty() {
            return Err(AuthError::EmptyApiKey.into());
        }
        if api_key.len() < MIN_API_KEY_LENGTH {
            return Err(AuthError::ApiKeyTooShort.into());
        }

        let device = Device {
            device_id: device_id.to_string(),
            api_key: api_key.to_string(),
            created_at: OffsetDateTime::now_utc(),
        };

        let saved = self.device_repository.save(&device).await?;

        tracing::info!(device_id = %saved.device_id, "device registered");

        Ok(saved)
    }

    /// Look a device up by id and key; `None` means the credentials do not
    /// match any registered device.
    pub async fn authenticate(
        &self,
        device_id: &str,
        api_key: &str,
    ) -> Result<Option<Device>, sqlx::Error> {
        self.device_repository
            .find_by_id_and_api_key(device_id, api_key)
            .await
    }
}
