use serde::{Deserialize, Serialize};

/// Register (or re-key) a device.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterDeviceRequest {
    /// Device identifier (MAC-address-shaped)
    pub device_id: String,
    /// API key, at least 8 characters
    pub api_key: String,
}

/// Check a device credential pair.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateDeviceRequest {
    /// Device identifier
    pub device_id: String,
    /// API key to check
    pub api_key: String,
}
