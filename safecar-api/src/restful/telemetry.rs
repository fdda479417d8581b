use serde::{Deserialize, Serialize};

use crate::models::Id;

/// Raw ingestion payload as posted by an edge device.
///
/// Every field is optional on the wire; validation decides which
/// combinations are acceptable. Enum-like and timestamp fields arrive as
/// plain strings so a malformed value is reported as a field-level
/// validation error rather than a deserialization failure.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateReadingRequest {
    /// Vehicle the device is installed in
    pub vehicle_id: Option<Id>,
    /// Driver currently assigned to the vehicle
    pub driver_id: Option<Id>,
    /// Sensor cluster, "CABIN" or "ENGINE"
    pub sensor_location: Option<String>,
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
    /// Sample time as an ISO-8601 timestamp
    pub timestamp: Option<String>,
}

/// Time-range filter for vehicle reading queries.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadingRangeQuery {
    /// Inclusive range start, ISO-8601
    pub start: Option<String>,
    /// Inclusive range end, ISO-8601
    pub end: Option<String>,
    /// Maximum number of readings to return (default 100)
    pub limit: Option<i64>,
}
