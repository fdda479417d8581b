//! Shared wire types for the SafeCar edge telemetry service.
//!
//! Everything that crosses an HTTP boundary lives here: the ingestion
//! request/response DTOs, the closed telemetry enums, and the flat resource
//! posted to the SafeCar cloud backend.

pub mod models;
pub mod restful;

pub use models::*;
