use std::sync::Arc;

use sqlx::{Error, Sqlite, SqlitePool, Transaction};
use time::OffsetDateTime;

use crate::configs::Storage;
use crate::models::SensorReading;

pub struct SensorReadingRepository {
    storage: Arc<Storage>,
}

impl SensorReadingRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub fn get_pool(&self) -> &SqlitePool {
        self.storage.get_pool()
    }

    // Persist a validated reading; created_at is stamped here, not by the
    // validator
    pub async fn create(
        &self,
        item: &SensorReading,
        transaction: &mut Transaction<'_, Sqlite>,
    ) -> Result<i32, Error> {
        let id = sqlx::query(
            r#"
            INSERT INTO sensor_readings (
                device_id, vehicle_id, driver_id, sensor_location,
                cabin_temperature_celsius, cabin_humidity_percent,
                engine_temperature_celsius, engine_humidity_percent,
                gas_type, gas_concentration_ppm, latitude, longitude,
                current_amperes, timestamp, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            "#,
        )
        .bind(&item.device_id)
        .bind(item.vehicle_id)
        .bind(item.driver_id)
        .bind(&item.sensor_location)
        .bind(item.cabin_temperature_celsius)
        .bind(item.cabin_humidity_percent)
        .bind(item.engine_temperature_celsius)
        .bind(item.engine_humidity_percent)
        .bind(&item.gas_type)
        .bind(item.gas_concentration_ppm)
        .bind(item.latitude)
        .bind(item.longitude)
        .bind(item.current_amperes)
        .bind(item.timestamp)
        .bind(OffsetDateTime::now_utc())
        .execute(&mut **transaction)
        .await?
        .last_insert_rowid();

        Ok(id as i32)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<SensorReading>, Error> {
        let reading: Option<SensorReading> =
            sqlx::query_as("SELECT * FROM sensor_readings WHERE id = $1")
                .bind(id)
                .fetch_optional(self.storage.get_pool())
                .await?;

        Ok(reading)
    }

    // Readings for a vehicle, newest first, with an optional time window
    pub async fn find_by_vehicle(
        &self,
        vehicle_id: i32,
        start: Option<OffsetDateTime>,
        end: Option<OffsetDateTime>,
        limit: i64,
    ) -> Result<Vec<SensorReading>, Error> {
        let mut sql = String::from("SELECT * FROM sensor_readings WHERE vehicle_id = ?");
        if start.is_some() {
            sql.push_str(" AND timestamp >= ?");
        }
        if end.is_some() {
            sql.push_str(" AND timestamp <= ?");
        }
        sql.push_str(" ORDER BY timestamp DESC LIMIT ?");

        let mut query = sqlx::query_as::<_, SensorReading>(&sql).bind(vehicle_id);
        if let Some(start) = start {
            query = query.bind(start);
        }
        if let Some(end) = end {
            query = query.bind(end);
        }

        let readings = query.bind(limit).fetch_all(self.storage.get_pool()).await?;

        Ok(readings)
    }

    // Latest N readings reported by a device
    pub async fn find_recent_by_device(
        &self,
        device_id: &str,
        limit: i64,
    ) -> Result<Vec<SensorReading>, Error> {
        let readings: Vec<SensorReading> = sqlx::query_as(
            r#"
            SELECT * FROM sensor_readings
            WHERE device_id = $1
            ORDER BY timestamp DESC
            LIMIT $2
            "#,
        )
        .bind(device_id)
        .bind(limit)
        .fetch_all(self.storage.get_pool())
        .await?;

        Ok(readings)
    }

    pub async fn count_by_vehicle(&self, vehicle_id: i32) -> Result<i64, Error> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM sensor_readings WHERE vehicle_id = $1")
                .bind(vehicle_id)
                .fetch_one(self.storage.get_pool())
                .await?;

        Ok(count)
    }
}
