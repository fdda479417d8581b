use safecar_api::models::{Severity, TelemetryType};

use crate::models::SensorReading;

/// Derives the alert severity and telemetry category for a validated
/// reading. Pure: same reading in, same classification out.
///
/// Each sensor rule produces its own severity and the final level is the
/// fold of all outcomes through INFO < WARNING < CRITICAL, so a rule can
/// escalate but never downgrade another rule's verdict.
pub struct SeverityClassifier;

impl SeverityClassifier {
    // Cabin temperature thresholds (Celsius)
    pub const CABIN_TEMP_CRITICAL_HIGH: f64 = 50.0;
    pub const CABIN_TEMP_CRITICAL_LOW: f64 = -10.0;
    pub const CABIN_TEMP_WARNING_HIGH: f64 = 40.0;

    // Engine temperature thresholds (Celsius)
    pub const ENGINE_TEMP_CRITICAL_HIGH: f64 = 110.0;
    pub const ENGINE_TEMP_WARNING_HIGH: f64 = 95.0;

    // Humidity thresholds (percent)
    pub const HUMIDITY_WARNING_HIGH: f64 = 90.0;
    pub const HUMIDITY_WARNING_LOW: f64 = 20.0;

    // Gas concentration thresholds (PPM)
    pub const GAS_CRITICAL_PPM: f64 = 5000.0;
    pub const GAS_WARNING_PPM: f64 = 1000.0;

    // Current thresholds (Amperes)
    pub const CURRENT_WARNING_HIGH: f64 = 4.0;
    pub const CURRENT_WARNING_LOW: f64 = 0.5;

    pub fn classify(reading: &SensorReading) -> (Severity, TelemetryType) {
        let severity = Self::alert_severity(reading);
        (severity, Self::telemetry_type(reading, severity))
    }

    fn alert_severity(reading: &SensorReading) -> Severity {
        let outcomes = [
            reading
                .cabin_temperature_celsius
                .map(Self::cabin_temperature_severity),
            reading
                .engine_temperature_celsius
                .map(Self::engine_temperature_severity),
            reading.cabin_humidity_percent.map(Self::humidity_severity),
            reading.engine_humidity_percent.map(Self::humidity_severity),
            reading.gas_concentration_ppm.map(Self::gas_severity),
            reading.current_amperes.map(Self::current_severity),
        ];

        outcomes
            .into_iter()
            .flatten()
            .fold(Severity::Info, Severity::max)
    }

    fn cabin_temperature_severity(temperature: f64) -> Severity {
        if temperature >= Self::CABIN_TEMP_CRITICAL_HIGH
            || temperature <= Self::CABIN_TEMP_CRITICAL_LOW
        {
            Severity::Critical
        } else if temperature >= Self::CABIN_TEMP_WARNING_HIGH {
            Severity::Warning
        } else {
            Severity::Info
        }
    }

    fn engine_temperature_severity(temperature: f64) -> Severity {
        if temperature >= Self::ENGINE_TEMP_CRITICAL_HIGH {
            Severity::Critical
        } else if temperature >= Self::ENGINE_TEMP_WARNING_HIGH {
            Severity::Warning
        } else {
            Severity::Info
        }
    }

    // Humidity on its own never goes past WARNING
    fn humidity_severity(humidity: f64) -> Severity {
        if humidity >= Self::HUMIDITY_WARNING_HIGH || humidity <= Self::HUMIDITY_WARNING_LOW {
            Severity::Warning
        } else {
            Severity::Info
        }
    }

    fn gas_severity(concentration_ppm: f64) -> Severity {
        if concentration_ppm >= Self::GAS_CRITICAL_PPM {
            Severity::Critical
        } else if concentration_ppm >= Self::GAS_WARNING_PPM {
            Severity::Warning
        } else {
            Severity::Info
        }
    }

    // Current on its own never goes past WARNING; the low band flags a
    // possible battery drain
    fn current_severity(current: f64) -> Severity {
        if current >= Self::CURRENT_WARNING_HIGH || current <= Self::CURRENT_WARNING_LOW {
            Severity::Warning
        } else {
            Severity::Info
        }
    }

    fn telemetry_type(reading: &SensorReading, severity: Severity) -> TelemetryType {
        // Critical readings name their most urgent source first.
        if severity == Severity::Critical {
            if reading.has_gas_reading() {
                return TelemetryType::CabinGasDetected;
            }
            if reading.engine_temperature_celsius.is_some() {
                return TelemetryType::EngineOverheat;
            }
            if reading.has_current_reading() {
                return TelemetryType::ElectricalFault;
            }
        }

        if reading.has_gas_reading() {
            TelemetryType::CabinGasDetected
        } else if reading.has_location_reading() {
            TelemetryType::LocationUpdate
        } else if reading.has_temperature_reading() {
            TelemetryType::TemperatureAnomaly
        } else if reading.has_current_reading() {
            TelemetryType::ElectricalFault
        } else {
            TelemetryType::General
        }
    }
}
