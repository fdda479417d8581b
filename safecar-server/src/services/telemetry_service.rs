use std::sync::Arc;

use anyhow::anyhow;
use safecar_api::models::{
    DeviceStatisticsResponse, FieldStatistics, ReadingIngestResponse, ReadingResponse,
    VehicleReadingsResponse,
};
use safecar_api::restful::{CreateReadingRequest, ReadingRangeQuery};
use time::OffsetDateTime;

use crate::errors::{ApiError, TelemetryError, ValidationError};
use crate::models::Device;
use crate::repositories::SensorReadingRepository;
use crate::services::backend_mapper::BackendPayloadMapper;
use crate::services::backend_service::BackendService;
use crate::services::reading_validator::ReadingValidator;
use crate::services::severity_classifier::SeverityClassifier;

const DEFAULT_QUERY_LIMIT: i64 = 100;
const STATISTICS_WINDOW: i64 = 100;

/// Ingestion pipeline: validate, persist, classify, map, forward.
///
/// Authentication happens before this service is reached; handlers pass
/// the already-authenticated device in.
pub struct TelemetryService {
    reading_repository: Arc<SensorReadingRepository>,
    backend_service: Arc<BackendService>,
}

impl TelemetryService {
    pub fn new(
        reading_repository: Arc<SensorReadingRepository>,
        backend_service: Arc<BackendService>,
    ) -> Self {
        Self {
            reading_repository,
            backend_service,
        }
    }

    pub async fn record_reading(
        &self,
        device: &Device,
        request: &CreateReadingRequest,
    ) -> Result<ReadingIngestResponse, ApiError> {
        let reading = ReadingValidator::validate(&device.device_id, request)?;

        let mut tx = self.reading_repository.get_pool().begin().await?;
        let id = self.reading_repository.create(&reading, &mut tx).await?;
        tx.commit().await?;

        let saved = self
            .reading_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| anyhow!("reading {} vanished after insert", id))?;

        let (severity, telemetry_type) = SeverityClassifier::classify(&saved);
        let payload = BackendPayloadMapper::to_backend_payload(&saved, severity, telemetry_type);

        // The reading is already ingested locally; a backend failure only
        // flips the sync flag.
        let backend_synced = self.backend_service.send_telemetry(&payload).await;

        tracing::debug!(
            reading_id = saved.id,
            severity = %severity,
            telemetry_type = %telemetry_type,
            backend_synced,
            "reading recorded"
        );

        Ok(ReadingIngestResponse {
            id: saved.id,
            device_id: saved.device_id,
            vehicle_id: saved.vehicle_id,
            driver_id: saved.driver_id,
            timestamp: saved.timestamp,
            severity,
            telemetry_type,
            backend_synced,
            created_at: saved.created_at,
        })
    }

    pub async fn get_reading(&self, reading_id: i32) -> Result<ReadingResponse, ApiError> {
        let reading = self
            .reading_repository
            .find_by_id(reading_id)
            .await?
            .ok_or(TelemetryError::ReadingNotFound)?;

        Ok(reading.into())
    }

    pub async fn get_vehicle_readings(
        &self,
        vehicle_id: i32,
        query: &ReadingRangeQuery,
    ) -> Result<VehicleReadingsResponse, ApiError> {
        let start = Self::parse_query_timestamp(query.start.as_deref())?;
        let end = Self::parse_query_timestamp(query.end.as_deref())?;
        let limit = query.limit.unwrap_or(DEFAULT_QUERY_LIMIT);

        let readings = self
            .reading_repository
            .find_by_vehicle(vehicle_id, start, end, limit)
            .await?;

        Ok(VehicleReadingsResponse {
            vehicle_id,
            count: readings.len(),
            data: readings.into_iter().map(ReadingResponse::from).collect(),
        })
    }

    pub async fn get_device_statistics(
        &self,
        device: &Device,
    ) -> Result<DeviceStatisticsResponse, ApiError> {
        let recent = self
            .reading_repository
            .find_recent_by_device(&device.device_id, STATISTICS_WINDOW)
            .await?;

        let cabin_temperatures: Vec<f64> = recent
            .iter()
            .filter_map(|reading| reading.cabin_temperature_celsius)
            .collect();
        let engine_temperatures: Vec<f64> = recent
            .iter()
            .filter_map(|reading| reading.engine_temperature_celsius)
            .collect();
        let gas_concentrations: Vec<f64> = recent
            .iter()
            .filter(|reading| reading.has_gas_reading())
            .filter_map(|reading| reading.gas_concentration_ppm)
            .collect();
        let currents: Vec<f64> = recent
            .iter()
            .filter_map(|reading| reading.current_amperes)
            .collect();

        Ok(DeviceStatisticsResponse {
            device_id: device.device_id.clone(),
            total_readings: recent.len(),
            latest_reading: recent.into_iter().next().map(ReadingResponse::from),
            cabin_temperature_stats: Self::field_statistics(&cabin_temperatures),
            engine_temperature_stats: Self::field_statistics(&engine_temperatures),
            gas_stats: Self::field_statistics(&gas_concentrations),
            current_stats: Self::field_statistics(&currents),
        })
    }

    fn parse_query_timestamp(
        raw: Option<&str>,
    ) -> Result<Option<OffsetDateTime>, ValidationError> {
        match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => ReadingValidator::parse_utc_timestamp(raw)
                .map(Some)
                .map_err(|_| ValidationError::InvalidTimestamp),
            None => Ok(None),
        }
    }

    fn field_statistics(values: &[f64]) -> Option<FieldStatistics> {
        if values.is_empty() {
            return None;
        }

        let count = values.len();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let avg = values.iter().sum::<f64>() / count as f64;

        Some(FieldStatistics { min, max, avg, count })
    }
}
