use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::Table;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Device {
    pub device_id: String,
    pub api_key: String,
    pub created_at: OffsetDateTime,
}

#[derive(Clone)]
pub struct DeviceTable;

impl Table for DeviceTable {
    fn name(&self) -> &'static str {
        "devices"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS devices (
                device_id VARCHAR(100) PRIMARY KEY,
                api_key VARCHAR(255) NOT NULL,
                created_at DATETIME NOT NULL
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS devices;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec![]
    }
}
