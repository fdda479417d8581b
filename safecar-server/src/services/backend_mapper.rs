use safecar_api::models::{BackendGasType, CreateTelemetryResource, Severity, TelemetryType};
use time::UtcOffset;

use crate::models::SensorReading;

/// Maps a classified reading onto the flat resource the SafeCar backend
/// ingests. Pure and total: every validated reading maps.
pub struct BackendPayloadMapper;

impl BackendPayloadMapper {
    pub fn to_backend_payload(
        reading: &SensorReading,
        severity: Severity,
        telemetry_type: TelemetryType,
    ) -> CreateTelemetryResource {
        // Coordinates only travel as a complete pair.
        let (latitude, longitude) = if reading.has_location_reading() {
            (reading.latitude, reading.longitude)
        } else {
            (None, None)
        };

        let (cabin_gas_type, cabin_gas_concentration) = if reading.has_gas_reading() {
            (
                reading.gas_type.as_deref().map(BackendGasType::from_label),
                reading.gas_concentration_ppm,
            )
        } else {
            (None, None)
        };

        CreateTelemetryResource {
            mac_address: reading.device_id.clone(),
            telemetry_type,
            severity,
            timestamp: reading.timestamp.to_offset(UtcOffset::UTC),
            cabin_temperature: reading.cabin_temperature_celsius,
            engine_temperature: reading.engine_temperature_celsius,
            cabin_humidity: reading.cabin_humidity_percent,
            cabin_gas_type,
            cabin_gas_concentration,
            latitude,
            longitude,
            // The backend schema has no engine humidity field; that value
            // stays local.
            electrical_current: reading.current_amperes,
        }
    }
}

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;
    use time::macros::datetime;

    use super::*;

    fn empty_reading() -> SensorReading {
        let now = OffsetDateTime::now_utc();
        SensorReading {
            id: 0,
            device_id: String::from("AA:BB:CC:DD:EE:01"),
            vehicle_id: 1,
            driver_id: 1,
            sensor_location: None,
            cabin_temperature_celsius: None,
            cabin_humidity_percent: None,
            engine_temperature_celsius: None,
            engine_humidity_percent: None,
            gas_type: None,
            gas_concentration_ppm: None,
            latitude: None,
            longitude: None,
            current_amperes: None,
            timestamp: now,
            created_at: now,
        }
    }

    #[test]
    fn test_maps_device_id_to_mac_address() {
        let reading = SensorReading {
            current_amperes: Some(2.3),
            ..empty_reading()
        };

        let payload = BackendPayloadMapper::to_backend_payload(
            &reading,
            Severity::Info,
            TelemetryType::ElectricalFault,
        );

        assert_eq!(payload.mac_address, "AA:BB:CC:DD:EE:01");
        assert_eq!(payload.severity, Severity::Info);
        assert_eq!(payload.telemetry_type, TelemetryType::ElectricalFault);
        assert_eq!(payload.electrical_current, Some(2.3));
    }

    #[test]
    fn test_known_gas_label_maps_to_fuel_vapor() {
        let reading = SensorReading {
            gas_type: Some(String::from("propane")),
            gas_concentration_ppm: Some(1250.0),
            ..empty_reading()
        };

        let payload = BackendPayloadMapper::to_backend_payload(
            &reading,
            Severity::Warning,
            TelemetryType::CabinGasDetected,
        );

        assert_eq!(payload.cabin_gas_type, Some(BackendGasType::FuelVapor));
        assert_eq!(payload.cabin_gas_concentration, Some(1250.0));
    }

    #[test]
    fn test_unrecognized_gas_label_maps_to_unknown() {
        let reading = SensorReading {
            gas_type: Some(String::from("unknowngas")),
            gas_concentration_ppm: Some(300.0),
            ..empty_reading()
        };

        let payload = BackendPayloadMapper::to_backend_payload(
            &reading,
            Severity::Info,
            TelemetryType::CabinGasDetected,
        );

        assert_eq!(payload.cabin_gas_type, Some(BackendGasType::Unknown));
    }

    #[test]
    fn test_absent_fields_stay_absent() {
        let reading = SensorReading {
            cabin_temperature_celsius: Some(25.0),
            ..empty_reading()
        };

        let payload = BackendPayloadMapper::to_backend_payload(
            &reading,
            Severity::Info,
            TelemetryType::TemperatureAnomaly,
        );

        assert_eq!(payload.cabin_temperature, Some(25.0));
        assert_eq!(payload.engine_temperature, None);
        assert_eq!(payload.cabin_gas_type, None);
        assert_eq!(payload.cabin_gas_concentration, None);
        assert_eq!(payload.latitude, None);
        assert_eq!(payload.longitude, None);
        assert_eq!(payload.electrical_current, None);
    }

    #[test]
    fn test_engine_humidity_is_not_forwarded() {
        let reading = SensorReading {
            engine_temperature_celsius: Some(92.0),
            engine_humidity_percent: Some(75.0),
            cabin_humidity_percent: Some(40.0),
            ..empty_reading()
        };

        let payload = BackendPayloadMapper::to_backend_payload(
            &reading,
            Severity::Info,
            TelemetryType::TemperatureAnomaly,
        );

        assert_eq!(payload.cabin_humidity, Some(40.0));
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("engineHumidity"));
    }

    #[test]
    fn test_timestamp_is_emitted_as_utc() {
        let reading = SensorReading {
            cabin_temperature_celsius: Some(25.0),
            timestamp: datetime!(2025-11-13 05:30:00 -05:00),
            ..empty_reading()
        };

        let payload = BackendPayloadMapper::to_backend_payload(
            &reading,
            Severity::Info,
            TelemetryType::TemperatureAnomaly,
        );

        assert_eq!(payload.timestamp, datetime!(2025-11-13 10:30:00 UTC));
        assert_eq!(payload.timestamp.offset(), UtcOffset::UTC);
    }

    #[test]
    fn test_mapping_is_pure() {
        let reading = SensorReading {
            gas_type: Some(String::from("methane")),
            gas_concentration_ppm: Some(1250.0),
            latitude: Some(-12.0464),
            longitude: Some(-77.0428),
            ..empty_reading()
        };

        let first = BackendPayloadMapper::to_backend_payload(
            &reading,
            Severity::Critical,
            TelemetryType::CabinGasDetected,
        );
        let second = BackendPayloadMapper::to_backend_payload(
            &reading,
            Severity::Critical,
            TelemetryType::CabinGasDetected,
        );

        assert_eq!(first, second);
    }
}
