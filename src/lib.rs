pub mod configuration;
pub mod errors;
pub mod listing;
pub mod pagination;
pub mod schedule;
pub mod tags;
pub mod telemetry;
