// Dashboard engine - Owns all mutable dashboard state
use crate::application::alert_engine;
use crate::application::clock::Clock;
use crate::application::commands;
use crate::application::update_engine;
use crate::domain::alert::{AlertKind, AlertLog};
use crate::domain::command::{MoveDirection, RotateDirection};
use crate::domain::dashboard::DashboardSnapshot;
use crate::domain::error::DashboardError;
use crate::domain::locale::{Catalog, Translations};
use crate::domain::notification::{Notification, NotificationKind};
use crate::domain::recording::RecordingState;
use crate::domain::sensors::{SensorId, SensorMask};
use crate::domain::telemetry::TelemetryState;
use crate::domain::wifi::{self, WifiState};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// RNG seed for reproducible telemetry. None = entropy.
    pub seed: Option<u64>,
    pub language: String,
    /// Raise a "system connected" alert at construction.
    pub announce_connection: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            seed: None,
            language: "en".to_string(),
            announce_connection: true,
        }
    }
}

/// Result of starting a wifi connect.
#[derive(Debug, Clone, PartialEq)]
pub enum WifiAttempt {
    /// Succeeds once the connect delay elapses.
    Pending,
    Failed(Notification),
}

pub struct DashboardEngine {
    state: TelemetryState,
    mask: SensorMask,
    alerts: AlertLog,
    recording: RecordingState,
    wifi: WifiState,
    language: String,
    catalog: Catalog,
    translations: Translations,
    rng: StdRng,
    clock: Arc<dyn Clock>,
}

impl DashboardEngine {
    pub fn new(
        options: EngineOptions,
        translations: Translations,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, DashboardError> {
        let catalog = translations.catalog(&options.language)?.clone();

        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut engine = Self {
            state: TelemetryState::default(),
            mask: SensorMask::default(),
            alerts: AlertLog::new(),
            recording: RecordingState::default(),
            wifi: WifiState::default(),
            language: options.language,
            catalog,
            translations,
            rng,
            clock,
        };

        if options.announce_connection {
            let now = engine.clock.now();
            engine
                .alerts
                .push(AlertKind::SystemConnected, &engine.catalog, now);
        }

        Ok(engine)
    }

    fn evaluate_alerts(&mut self) -> Vec<AlertKind> {
        let now = self.clock.now();
        alert_engine::evaluate(&self.state, &mut self.alerts, &self.catalog, now)
    }

    /// Fast tick: one random walk step, then alert evaluation.
    pub fn telemetry_tick(&mut self) -> Vec<AlertKind> {
        self.state = update_engine::tick(&self.state, &self.mask, &mut self.rng);
        tracing::debug!(
            depth = self.state.depth,
            compass = self.state.compass,
            leak = self.state.leak_detected,
            "telemetry tick"
        );
        self.evaluate_alerts()
    }

    /// Slow tick: drain the battery, then alert evaluation.
    pub fn battery_tick(&mut self) -> Vec<AlertKind> {
        self.state = update_engine::battery_tick(&self.state);
        tracing::debug!(battery = self.state.battery, "battery tick");
        self.evaluate_alerts()
    }

    /// Recording tick: advance the stopwatch if it is running.
    pub fn recording_tick(&mut self) {
        if self.recording.is_recording {
            self.recording.elapsed_seconds += 1;
        }
    }

    /// Takes effect on the next telemetry tick.
    pub fn toggle_sensor(&mut self, id: SensorId, enabled: bool) {
        self.mask.set(id, enabled);
        tracing::info!(sensor = %id, enabled, "sensor toggled");
    }

    pub fn move_drone(&mut self, direction: MoveDirection) {
        commands::apply_move(&mut self.state, direction);
    }

    pub fn ascend(&mut self) {
        commands::apply_ascend(&mut self.state);
    }

    pub fn descend(&mut self) {
        commands::apply_descend(&mut self.state);
    }

    pub fn rotate(&mut self, direction: RotateDirection) {
        commands::apply_rotate(&mut self.state, direction);
    }

    /// Flip between idle and recording; stopping resets the stopwatch.
    pub fn toggle_recording(&mut self) -> bool {
        self.recording = if self.recording.is_recording {
            tracing::info!(elapsed = self.recording.elapsed_seconds, "recording stopped");
            RecordingState::default()
        } else {
            tracing::info!("recording started");
            RecordingState {
                is_recording: true,
                elapsed_seconds: 0,
            }
        };
        self.recording.is_recording
    }

    pub fn take_picture(&self) -> Notification {
        Notification::render(NotificationKind::Snapshot, &self.catalog)
    }

    pub fn surface(&self) -> Notification {
        Notification::render(NotificationKind::Surface, &self.catalog)
    }

    /// Switch display language and re-render held alerts in place.
    pub fn set_language(&mut self, code: &str) -> Result<(), DashboardError> {
        let catalog = self.translations.catalog(code)?.clone();
        self.alerts.relocalize(&catalog);
        self.catalog = catalog;
        self.language = code.to_string();
        tracing::info!(language = code, "display language changed");
        Ok(())
    }

    pub fn begin_wifi_connect(&mut self, network: &str) -> Result<WifiAttempt, DashboardError> {
        let network = wifi::lookup_network(network)?;
        if network == wifi::DRONE_ACCESS_POINT {
            self.wifi.connecting = true;
            tracing::info!(network, "wifi connect started");
            Ok(WifiAttempt::Pending)
        } else {
            tracing::info!(network, "wifi connect refused");
            Ok(WifiAttempt::Failed(Notification::render(
                NotificationKind::ConnectionFailed,
                &self.catalog,
            )))
        }
    }

    /// Complete a pending connect. Rendered in the language active at completion.
    pub fn finish_wifi_connect(&mut self) -> Notification {
        self.wifi.connecting = false;
        Notification::render(NotificationKind::Connected, &self.catalog)
    }

    /// Drop a pending connect without announcing an outcome.
    pub fn cancel_wifi_connect(&mut self) {
        if self.wifi.connecting {
            self.wifi.connecting = false;
            tracing::info!("wifi connect cancelled");
        }
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            telemetry: self.state.clone(),
            sensors: self.mask,
            alerts: self.alerts.to_vec(),
            recording: self.recording,
            recording_time: self.recording.display(),
            language: self.language.clone(),
            wifi: self.wifi,
        }
    }
}

#[cfg(test)]
impl DashboardEngine {
    pub fn state(&self) -> &TelemetryState {
        &self.state
    }

    pub fn alerts(&self) -> &AlertLog {
        &self.alerts
    }

    pub fn recording(&self) -> RecordingState {
        self.recording
    }
}
