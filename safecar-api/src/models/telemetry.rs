use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::Id;

/// Physical sensor cluster that produced a reading.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SensorLocation {
    /// Cabin cluster (DHT11, MQ2, GPS)
    Cabin,
    /// Engine compartment cluster (DHT11, ACS712)
    Engine,
}

impl FromStr for SensorLocation {
    type Err = ();

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "CABIN" => Ok(SensorLocation::Cabin),
            "ENGINE" => Ok(SensorLocation::Engine),
            _ => Err(()),
        }
    }
}

impl fmt::Display for SensorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorLocation::Cabin => write!(f, "CABIN"),
            SensorLocation::Engine => write!(f, "ENGINE"),
        }
    }
}

/// Alert level derived from sensor values. Variants are declared in
/// escalation order so `Ord` gives INFO < WARNING < CRITICAL.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Categorical label describing what produced an alert.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TelemetryType {
    /// Gas detected in the cabin
    CabinGasDetected,
    /// Engine compartment over temperature
    EngineOverheat,
    /// Electrical current out of its normal band
    ElectricalFault,
    /// Position report without any alerting sensor value
    LocationUpdate,
    /// Temperature present but not an overheat condition
    TemperatureAnomaly,
    /// Nothing more specific applies
    General,
}

impl fmt::Display for TelemetryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TelemetryType::CabinGasDetected => "CABIN_GAS_DETECTED",
            TelemetryType::EngineOverheat => "ENGINE_OVERHEAT",
            TelemetryType::ElectricalFault => "ELECTRICAL_FAULT",
            TelemetryType::LocationUpdate => "LOCATION_UPDATE",
            TelemetryType::TemperatureAnomaly => "TEMPERATURE_ANOMALY",
            TelemetryType::General => "GENERAL",
        };
        write!(f, "{label}")
    }
}

/// A persisted sensor reading as returned by the query endpoints.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingResponse {
    /// Reading identifier
    pub id: Id,
    /// Reporting device identifier
    pub device_id: String,
    /// Vehicle identifier
    pub vehicle_id: Id,
    /// Driver identifier
    pub driver_id: Id,
    /// Sensor cluster that produced the reading, when declared
    pub sensor_location: Option<SensorLocation>,
    /// Cabin temperature in Celsius
    pub cabin_temperature_celsius: Option<f64>,
    /// Cabin relative humidity percentage
    pub cabin_humidity_percent: Option<f64>,
    /// Engine compartment temperature in Celsius
    pub engine_temperature_celsius: Option<f64>,
    /// Engine compartment relative humidity percentage
    pub engine_humidity_percent: Option<f64>,
    /// Gas label reported by the MQ2 sensor
    pub gas_type: Option<String>,
    /// Gas concentration in parts per million
    pub gas_concentration_ppm: Option<f64>,
    /// GPS latitude in degrees
    pub latitude: Option<f64>,
    /// GPS longitude in degrees
    pub longitude: Option<f64>,
    /// Electrical current in amperes
    pub current_amperes: Option<f64>,
    /// When the reading was taken (UTC)
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// When the reading was persisted (UTC)
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Outcome of ingesting one reading.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingIngestResponse {
    /// Identifier assigned to the stored reading
    pub id: Id,
    /// Reporting device identifier
    pub device_id: String,
    /// Vehicle identifier
    pub vehicle_id: Id,
    /// Driver identifier
    pub driver_id: Id,
    /// When the reading was taken (UTC)
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Derived alert level
    pub severity: Severity,
    /// Derived telemetry category
    pub telemetry_type: TelemetryType,
    /// Whether the sample reached the cloud backend
    pub backend_synced: bool,
    /// When the reading was persisted (UTC)
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Readings recorded for one vehicle.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleReadingsResponse {
    /// Vehicle identifier
    pub vehicle_id: Id,
    /// Number of readings returned
    pub count: usize,
    /// Readings, newest first
    pub data: Vec<ReadingResponse>,
}

/// min/max/avg summary over one sensor series.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldStatistics {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub count: usize,
}

/// Rolling statistics for one device.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceStatisticsResponse {
    /// Device identifier
    pub device_id: String,
    /// Readings considered by the summary
    pub total_readings: usize,
    /// Most recent reading, if any exist
    pub latest_reading: Option<ReadingResponse>,
    /// Cabin temperature summary
    pub cabin_temperature_stats: Option<FieldStatistics>,
    /// Engine temperature summary
    pub engine_temperature_stats: Option<FieldStatistics>,
    /// Gas concentration summary
    pub gas_stats: Option<FieldStatistics>,
    /// Electrical current summary
    pub current_stats: Option<FieldStatistics>,
}
