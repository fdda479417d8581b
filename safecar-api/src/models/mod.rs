mod backend;
mod device;
mod telemetry;

pub use backend::*;
pub use device::*;
pub use telemetry::*;

pub type Id = i32;
