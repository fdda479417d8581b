use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Registered device summary.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceResponse {
    /// Device identifier (MAC-address-shaped)
    pub device_id: String,
    /// When the device was registered (UTC)
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Result of a credential validation request.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateDeviceResponse {
    /// Whether the supplied credentials matched
    pub valid: bool,
    /// Device identifier
    pub device_id: String,
    /// When the device was registered (UTC)
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
