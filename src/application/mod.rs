// Application layer - Engine behavior and scheduling
pub mod alert_engine;
pub mod clock;
pub mod commands;
pub mod controller;
pub mod engine;
pub mod scheduler;
pub mod update_engine;
