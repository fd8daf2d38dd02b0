// Errors raised at the dashboard's API boundary
use thiserror::Error;

/// Rejected input from the presentation layer. Engine steps themselves never fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("unknown sensor: {0}")]
    UnknownSensor(String),

    #[error("unknown direction: {0}")]
    UnknownDirection(String),

    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("unknown network: {0}")]
    UnknownNetwork(String),
}
