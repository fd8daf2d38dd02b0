// Domain layer - Pure data and invariants
pub mod alert;
pub mod command;
pub mod dashboard;
pub mod error;
pub mod locale;
pub mod notification;
pub mod recording;
pub mod sensors;
pub mod telemetry;
pub mod wifi;
