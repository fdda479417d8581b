use std::sync::Arc;

use sqlx::{Error, SqlitePool};

use crate::configs::Storage;
use crate::models::Device;

pub struct DeviceRepository {
    storage: Arc<Storage>,
}

impl DeviceRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub fn get_pool(&self) -> &SqlitePool {
        self.storage.get_pool()
    }

    // Insert a device, or re-key it when the id already exists
    pub async fn save(&self, item: &Device) -> Result<Device, Error> {
        let device: Device = sqlx::query_as(
            r#"
            INSERT INTO devices (device_id, api_key, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (device_id) DO UPDATE
                SET api_key = excluded.api_key, created_at = excluded.created_at
            RETURNING *
            "#,
        )
        .bind(&item.device_id)
        .bind(&item.api_key)
        .bind(item.created_at)
        .fetch_one(self.storage.get_pool())
        .await?;

        Ok(device)
    }

    pub async fn find_by_id(&self, device_id: &str) -> Result<Option<Device>, Error> {
        let device: Option<Device> = sqlx::query_as("SELECT * FROM devices WHERE device_id = $1")
            .bind(device_id)
            .fetch_optional(self.storage.get_pool())
            .await?;

        Ok(device)
    }

    // Credential check: id and key must both match
    pub async fn find_by_id_and_api_key(
        &self,
        device_id: &str,
        api_key: &str,
    ) -> Result<Option<Device>, Error> {
        let device: Option<Device> =
            sqlx::query_as("SELECT * FROM devices WHERE device_id = $1 AND api_key = $2")
                .bind(device_id)
                .bind(api_key)
                .fetch_optional(self.storage.get_pool())
                .await?;

        Ok(device)
    }
}
