use safecar_api::models::SensorLocation;
use safecar_api::restful::CreateReadingRequest;
use time::format_description::well_known::Iso8601;
use time::{OffsetDateTime, UtcOffset};

use crate::errors::ValidationError;
use crate::models::SensorReading;

/// Turns a raw ingestion payload into a validated [`SensorReading`].
///
/// Checks run in a fixed order and the first failure wins, so a payload
/// with several problems always reports the same field. String fields are
/// trimmed before storage.
pub struct ReadingValidator;

impl ReadingValidator {
    pub const CABIN_TEMPERATURE_RANGE: (f64, f64) = (-40.0, 80.0);
    pub const ENGINE_TEMPERATURE_RANGE: (f64, f64) = (-40.0, 125.0);
    pub const HUMIDITY_RANGE: (f64, f64) = (0.0, 100.0);
    pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
    pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);
    pub const CURRENT_RANGE: (f64, f64) = (0.0, 5.0);

    pub fn validate(
        device_id: &str,
        request: &CreateReadingRequest,
    ) -> Result<SensorReading, ValidationError> {
        let device_id = device_id.trim();
        if device_id.is_empty() {
            return Err(ValidationError::EmptyIdentifier { field: "device_id" });
        }

        let vehicle_id = match request.vehicle_id {
            Some(id) if id > 0 => id,
            _ => return Err(ValidationError::InvalidIdentifier { field: "vehicle_id" }),
        };
        let driver_id = match request.driver_id {
            Some(id) if id > 0 => id,
            _ => return Err(ValidationError::InvalidIdentifier { field: "driver_id" }),
        };

        let sensor_location = match request.sensor_location.as_deref().map(str::trim) {
            None => None,
            Some(raw) => Some(raw.parse::<SensorLocation>().map_err(|_| {
                ValidationError::InvalidEnum { field: "sensor_location" }
            })?),
        };

        Self::check_range(
            "cabin_temperature_celsius",
            request.cabin_temperature_celsius,
            Self::CABIN_TEMPERATURE_RANGE,
            "between -40 and 80",
        )?;
        Self::check_range(
            "cabin_humidity_percent",
            request.cabin_humidity_percent,
            Self::HUMIDITY_RANGE,
            "between 0 and 100",
        )?;
        Self::check_range(
            "engine_temperature_celsius",
            request.engine_temperature_celsius,
            Self::ENGINE_TEMPERATURE_RANGE,
            "between -40 and 125",
        )?;
        Self::check_range(
            "engine_humidity_percent",
            request.engine_humidity_percent,
            Self::HUMIDITY_RANGE,
            "between 0 and 100",
        )?;
        if request.gas_concentration_ppm.is_some_and(|ppm| ppm < 0.0) {
            return Err(ValidationError::OutOfRange {
                field: "gas_concentration_ppm",
                expected: "non-negative",
            });
        }
        Self::check_range("latitude", request.latitude, Self::LATITUDE_RANGE, "between -90 and 90")?;
        Self::check_range(
            "longitude",
            request.longitude,
            Self::LONGITUDE_RANGE,
            "between -180 and 180",
        )?;
        Self::check_range(
            "current_amperes",
            request.current_amperes,
            Self::CURRENT_RANGE,
            "between 0 and 5",
        )?;

        // A gas reading is only meaningful as a type + concentration pair.
        let gas_type = request
            .gas_type
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty());
        match (gas_type, request.gas_concentration_ppm) {
            (None, Some(_)) => {
                return Err(ValidationError::MissingDependentField {
                    field: "gas_type",
                    dependent: "gas_concentration_ppm",
                });
            }
            (Some(_), None) => {
                return Err(ValidationError::MissingDependentField {
                    field: "gas_concentration_ppm",
                    dependent: "gas_type",
                });
            }
            _ => {}
        }

        // Presence is Option-based on purpose: latitude 0.0 is a reading,
        // not an absence.
        if request.latitude.is_some() != request.longitude.is_some() {
            return Err(ValidationError::IncompleteCoordinatePair);
        }

        let timestamp = match request.timestamp.as_deref().map(str::trim).filter(|raw| !raw.is_empty())
        {
            Some(raw) => {
                Self::parse_utc_timestamp(raw).map_err(|_| ValidationError::InvalidTimestamp)?
            }
            None => OffsetDateTime::now_utc(),
        };

        let reading = SensorReading {
            id: 0,
            device_id: device_id.to_string(),
            vehicle_id,
            driver_id,
            sensor_location: sensor_location.map(|location| location.to_string()),
            cabin_temperature_celsius: request.cabin_temperature_celsius,
            cabin_humidity_percent: request.cabin_humidity_percent,
            engine_temperature_celsius: request.engine_temperature_celsius,
            engine_humidity_percent: request.engine_humidity_percent,
            gas_type: gas_type.map(str::to_string),
            gas_concentration_ppm: request.gas_concentration_ppm,
            latitude: request.latitude,
            longitude: request.longitude,
            current_amperes: request.current_amperes,
            timestamp,
            created_at: OffsetDateTime::now_utc(),
        };

        if !reading.has_any_sensor_reading() {
            return Err(ValidationError::EmptyReading);
        }

        Ok(reading)
    }

    /// Parse an ISO-8601 timestamp and normalize it to UTC.
    pub fn parse_utc_timestamp(raw: &str) -> Result<OffsetDateTime, time::error::Parse> {
        OffsetDateTime::parse(raw, &Iso8601::DEFAULT)
            .map(|timestamp| timestamp.to_offset(UtcOffset::UTC))
    }

    fn check_range(
        field: &'static str,
        value: Option<f64>,
        (min, max): (f64, f64),
        expected: &'static str,
    ) -> Result<(), ValidationError> {
        match value {
            Some(value) if value < min || value > max => {
                Err(ValidationError::OutOfRange { field, expected })
            }
            _ => Ok(()),
        }
    }
}
