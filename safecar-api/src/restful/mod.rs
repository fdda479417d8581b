mod device;
mod telemetry;

pub use device::*;
pub use telemetry::*;
