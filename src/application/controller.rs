// Dashboard controller - The command API the presentation layer calls into
use crate::application::engine::{DashboardEngine, WifiAttempt};
use crate::application::scheduler::{EngineHandle, Scheduler, TickPeriods};
use crate::domain::command::{MoveDirection, RotateDirection};
use crate::domain::dashboard::DashboardSnapshot;
use crate::domain::error::DashboardError;
use crate::domain::notification::Notification;
use crate::domain::sensors::SensorId;
use std::time::Duration;
use tokio::sync::{broadcast, watch, Mutex};

pub struct DashboardController {
    handle: EngineHandle,
    scheduler: Mutex<Scheduler>,
    wifi_connect_delay: Duration,
}

impl DashboardController {
    pub fn new(engine: DashboardEngine, periods: TickPeriods, wifi_connect_delay: Duration) -> Self {
        let handle = EngineHandle::new(engine);
        let scheduler = Scheduler::new(handle.clone(), periods);
        Self {
            handle,
            scheduler: Mutex::new(scheduler),
            wifi_connect_delay,
        }
    }

    /// Mount: start the periodic ticks.
    pub async fn start(&self) {
        self.scheduler.lock().await.start();
    }

    /// Unmount: stop every timer, including recording and pending wifi.
    pub async fn shutdown(&self) {
        self.scheduler.lock().await.shutdown().await;
    }

    pub async fn snapshot(&self) -> DashboardSnapshot {
        self.handle.snapshot().await
    }

    pub fn subscribe_snapshots(&self) -> watch::Receiver<DashboardSnapshot> {
        self.handle.subscribe_snapshots()
    }

    pub fn subscribe_notifications(&self) -> broadcast::Receiver<Notification> {
        self.handle.subscribe_notifications()
    }

    pub async fn toggle_sensor(&self, id: SensorId, enabled: bool) -> DashboardSnapshot {
        self.handle
            .apply(|engine| {
                engine.toggle_sensor(id, enabled);
                engine.snapshot()
            })
            .await
    }

    pub async fn move_drone(&self, direction: MoveDirection) -> DashboardSnapshot {
        self.handle
            .apply(|engine| {
                engine.move_drone(direction);
                engine.snapshot()
            })
            .await
    }

    pub async fn ascend(&self) -> DashboardSnapshot {
        self.handle
            .apply(|engine| {
                engine.ascend();
                engine.snapshot()
            })
            .await
    }

    pub async fn descend(&self) -> DashboardSnapshot {
        self.handle
            .apply(|engine| {
                engine.descend();
                engine.snapshot()
            })
            .await
    }

    pub async fn rotate(&self, direction: RotateDirection) -> DashboardSnapshot {
        self.handle
            .apply(|engine| {
                engine.rotate(direction);
                engine.snapshot()
            })
            .await
    }

    /// Start or stop the recording stopwatch and its one-second timer.
    pub async fn toggle_recording(&self) -> DashboardSnapshot {
        // Scheduler first, then engine: timer tasks only ever take the engine lock.
        let mut scheduler = self.scheduler.lock().await;
        let (recording, snapshot) = self
            .handle
            .apply(|engine| (engine.toggle_recording(), engine.snapshot()))
            .await;
        if recording {
            scheduler.start_recording();
        } else {
            scheduler.stop_recording();
        }
        snapshot
    }

    pub async fn take_picture(&self) -> Notification {
        let notification = self.handle.apply(|engine| engine.take_picture()).await;
        self.handle.notify(notification.clone());
        notification
    }

    pub async fn surface(&self) -> Notification {
        let notification = self.handle.apply(|engine| engine.surface()).await;
        self.handle.notify(notification.clone());
        notification
    }

    pub async fn set_language(&self, code: &str) -> Result<DashboardSnapshot, DashboardError> {
        self.handle
            .apply(|engine| {
                engine.set_language(code)?;
                Ok::<_, DashboardError>(engine.snapshot())
            })
            .await
    }

    /// Simulated access point connect. Only the drone's own AP succeeds, after a delay.
    pub async fn connect_wifi(&self, network: &str) -> Result<DashboardSnapshot, DashboardError> {
        let mut scheduler = self.scheduler.lock().await;
        let (attempt, snapshot) = self
            .handle
            .apply(|engine| {
                let attempt = engine.begin_wifi_connect(network)?;
                Ok::<_, DashboardError>((attempt, engine.snapshot()))
            })
            .await?;
        match attempt {
            WifiAttempt::Pending => scheduler.schedule_wifi_connect(self.wifi_connect_delay),
            WifiAttempt::Failed(notification) => self.handle.notify(notification),
        }
        Ok(snapshot)
    }
}
