pub mod error;
pub mod telemetry;
pub mod track;
