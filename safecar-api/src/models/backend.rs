use core::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{Severity, TelemetryType};

/// Gas classification understood by the SafeCar backend.
///
/// The MQ2 sensor reports free-form labels; egress maps them onto this
/// closed set, with [`BackendGasType::Unknown`] as the fallback.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BackendGasType {
    FuelVapor,
    Co,
    Co2,
    Smoke,
    Unknown,
}

impl BackendGasType {
    /// Map a raw sensor label onto the backend's closed set.
    /// Lookup is case-insensitive; unrecognized labels become `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "methane" | "propane" | "butane" | "lpg" | "alcohol" | "hydrogen" => {
                BackendGasType::FuelVapor
            }
            _ => BackendGasType::Unknown,
        }
    }
}

impl fmt::Display for BackendGasType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BackendGasType::FuelVapor => "FUEL_VAPOR",
            BackendGasType::Co => "CO",
            BackendGasType::Co2 => "CO2",
            BackendGasType::Smoke => "SMOKE",
            BackendGasType::Unknown => "UNKNOWN",
        };
        write!(f, "{label}")
    }
}

/// Flat telemetry resource posted to the SafeCar backend.
///
/// The backend identifies devices by MAC address and expects a flat
/// camelCase body; absent sensor values omit their key entirely.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTelemetryResource {
    /// Reporting device, identified by its MAC-address-shaped id
    pub mac_address: String,
    /// Telemetry category
    #[serde(rename = "type")]
    pub telemetry_type: TelemetryType,
    /// Alert level
    pub severity: Severity,
    /// Sample time, ISO-8601 UTC
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cabin_temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cabin_humidity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cabin_gas_type: Option<BackendGasType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cabin_gas_concentration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electrical_current: Option<f64>,
}
