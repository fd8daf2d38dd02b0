// Dashboard snapshot - Everything the presentation layer reads
use super::alert::Alert;
use super::recording::RecordingState;
use super::sensors::SensorMask;
use super::telemetry::TelemetryState;
use super::wifi::WifiState;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub telemetry: TelemetryState,
    pub sensors: SensorMask,
    pub alerts: Vec<Alert>,
    pub recording: RecordingState,
    /// Stopwatch as `MM:SS`.
    pub recording_time: String,
    pub language: String,
    pub wifi: WifiState,
}
