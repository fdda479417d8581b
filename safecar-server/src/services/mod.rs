mod auth_service;
mod backend_mapper;
mod backend_service;
mod reading_validator;
mod severity_classifier;
mod telemetry_service;

pub use auth_service::*;
pub use backend_mapper::*;
pub use backend_service::*;
pub use reading_validator::*;
pub use severity_classifier::*;
pub use telemetry_service::*;
