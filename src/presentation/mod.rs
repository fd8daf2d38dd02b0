// Presentation layer - HTTP adapter over the dashboard controller
pub mod app_state;
pub mod handlers;
pub mod ndjson;
pub mod router;
