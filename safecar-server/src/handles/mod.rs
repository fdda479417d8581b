mod device_handle;
mod telemetry_handle;

pub use device_handle::*;
pub use telemetry_handle::*;
