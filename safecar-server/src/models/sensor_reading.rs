use safecar_api::models::{ReadingResponse, SensorLocation};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::Table;

/// One validated sensor sample from a device.
///
/// Constructed only by the reading validator; immutable afterwards. `id`
/// is 0 until the row is persisted and `created_at` is stamped at insert
/// time by the repository.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SensorReading {
    pub id: i32,
    pub device_id: String,
    pub vehicle_id: i32,
    pub driver_id: i32,
    pub sensor_location: Option<String>,
    pub cabin_temperature_celsius: Option<f64>,
    pub cabin_humidity_percent: Option<f64>,
    pub engine_temperature_celsius: Option<f64>,
    pub engine_humidity_percent: Option<f64>,
    pub gas_type: Option<String>,
    pub gas_concentration_ppm: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub current_amperes: Option<f64>,
    pub timestamp: OffsetDateTime,
    pub created_at: OffsetDateTime,
}

impl SensorReading {
    pub fn has_temperature_reading(&self) -> bool {
        self.cabin_temperature_celsius.is_some() || self.engine_temperature_celsius.is_some()
    }

    pub fn has_humidity_reading(&self) -> bool {
        self.cabin_humidity_percent.is_some() || self.engine_humidity_percent.is_some()
    }

    /// Gas readings only count as a complete type + concentration pair.
    pub fn has_gas_reading(&self) -> bool {
        self.gas_type.is_some() && self.gas_concentration_ppm.is_some()
    }

    /// GPS readings only count as a complete latitude + longitude pair.
    pub fn has_location_reading(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    pub fn has_current_reading(&self) -> bool {
        self.current_amperes.is_some()
    }

    pub fn has_any_sensor_reading(&self) -> bool {
        self.has_temperature_reading()
            || self.has_humidity_reading()
            || self.has_gas_reading()
            || self.has_location_reading()
            || self.has_current_reading()
    }
}

impl From<SensorReading> for ReadingResponse {
    fn from(reading: SensorReading) -> Self {
        ReadingResponse {
            id: reading.id,
            sensor_location: reading
                .sensor_location
                .as_deref()
                .and_then(|raw| raw.parse::<SensorLocation>().ok()),
            device_id: reading.device_id,
            vehicle_id: reading.vehicle_id,
            driver_id: reading.driver_id,
            cabin_temperature_celsius: reading.cabin_temperature_celsius,
            cabin_humidity_percent: reading.cabin_humidity_percent,
            engine_temperature_celsius: reading.engine_temperature_celsius,
            engine_humidity_percent: reading.engine_humidity_percent,
            gas_type: reading.gas_type,
            gas_concentration_ppm: reading.gas_concentration_ppm,
            latitude: reading.latitude,
            longitude: reading.longitude,
            current_amperes: reading.current_amperes,
            timestamp: reading.timestamp,
            created_at: reading.created_at,
        }
    }
}

#[derive(Clone)]
pub struct SensorReadingTable;

impl Table for SensorReadingTable {
    fn name(&self) -> &'static str {
        "sensor_readings"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS sensor_readings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                device_id VARCHAR(100) NOT NULL,
                vehicle_id INTEGER NOT NULL,
                driver_id INTEGER NOT NULL,
                sensor_location TEXT,
                cabin_temperature_celsius REAL,
                cabin_humidity_percent REAL,
                engine_temperature_celsius REAL,
                engine_humidity_percent REAL,
                gas_type VARCHAR(50),
                gas_concentration_ppm REAL,
                latitude REAL,
                longitude REAL,
                current_amperes REAL,
                timestamp DATETIME NOT NULL,
                created_at DATETIME NOT NULL,
                FOREIGN KEY (device_id) REFERENCES devices (device_id) ON DELETE CASCADE
            );
            CREATE INDEX IF NOT EXISTS idx_sensor_readings_vehicle_time
                ON sensor_readings (vehicle_id, timestamp);
            CREATE INDEX IF NOT EXISTS idx_sensor_readings_device_time
                ON sensor_readings (device_id, timestamp);
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS sensor_readings;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["devices"]
    }
}
