// Scheduler - Periodic engine steps on tokio intervals
use crate::application::engine::DashboardEngine;
use crate::domain::dashboard::DashboardSnapshot;
use crate::domain::notification::Notification;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickPeriods {
    pub telemetry: Duration,
    pub battery: Duration,
    pub recording: Duration,
}

impl Default for TickPeriods {
    fn default() -> Self {
        Self {
            telemetry: Duration::from_millis(2_000),
            battery: Duration::from_millis(15_000),
            recording: Duration::from_millis(1_000),
        }
    }
}

/// Shared engine plus the channels its changes are published on.
///
/// Every mutation goes through [`EngineHandle::apply`], which holds the lock
/// for one synchronous step and publishes the resulting snapshot.
#[derive(Clone)]
pub struct EngineHandle {
    engine: Arc<Mutex<DashboardEngine>>,
    snapshots: watch::Sender<DashboardSnapshot>,
    notifications: broadcast::Sender<Notification>,
}

impl EngineHandle {
    pub fn new(engine: DashboardEngine) -> Self {
        let (snapshots, _) = watch::channel(engine.snapshot());
        let (notifications, _) = broadcast::channel(32);
        Self {
            engine: Arc::new(Mutex::new(engine)),
            snapshots,
            notifications,
        }
    }

    pub async fn apply<T>(&self, step: impl FnOnce(&mut DashboardEngine) -> T) -> T {
        let mut engine = self.engine.lock().await;
        let output = step(&mut engine);
        self.snapshots.send_replace(engine.snapshot());
        output
    }

    pub async fn snapshot(&self) -> DashboardSnapshot {
        self.engine.lock().await.snapshot()
    }

    /// Fire and forget: dropped when nobody is listening.
    pub fn notify(&self, notification: Notification) {
        let _ = self.notifications.send(notification);
    }

    pub fn subscribe_snapshots(&self) -> watch::Receiver<DashboardSnapshot> {
        self.snapshots.subscribe()
    }

    pub fn subscribe_notifications(&self) -> broadcast::Receiver<Notification> {
        self.notifications.subscribe()
    }
}

/// Owns every timer task. Aborts them all on shutdown or drop.
pub struct Scheduler {
    handle: EngineHandle,
    periods: TickPeriods,
    telemetry: Option<JoinHandle<()>>,
    battery: Option<JoinHandle<()>>,
    recording: Option<JoinHandle<()>>,
    wifi: Option<JoinHandle<()>>,
}

/// Run `step` every `period`, first one period from now, like `setInterval`.
fn every(
    handle: EngineHandle,
    period: Duration,
    step: fn(&mut DashboardEngine),
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            handle.apply(step).await;
        }
    })
}

fn abort(task: &mut Option<JoinHandle<()>>) -> Option<JoinHandle<()>> {
    let task = task.take()?;
    task.abort();
    Some(task)
}

impl Scheduler {
    pub fn new(handle: EngineHandle, periods: TickPeriods) -> Self {
        Self {
            handle,
            periods,
            telemetry: None,
            battery: None,
            recording: None,
            wifi: None,
        }
    }

    /// Start the telemetry and battery ticks. Restarting replaces running ones.
    pub fn start(&mut self) {
        abort(&mut self.telemetry);
        abort(&mut self.battery);

        self.telemetry = Some(every(self.handle.clone(), self.periods.telemetry, |engine| {
            engine.telemetry_tick();
        }));
        self.battery = Some(every(self.handle.clone(), self.periods.battery, |engine| {
            engine.battery_tick();
        }));
        tracing::info!(
            telemetry_ms = self.periods.telemetry.as_millis() as u64,
            battery_ms = self.periods.battery.as_millis() as u64,
            "scheduler started"
        );
    }

    pub fn start_recording(&mut self) {
        abort(&mut self.recording);
        self.recording = Some(every(
            self.handle.clone(),
            self.periods.recording,
            DashboardEngine::recording_tick,
        ));
    }

    pub fn stop_recording(&mut self) {
        abort(&mut self.recording);
    }

    /// Finish a wifi connect after `delay`. A newer attempt replaces a pending one.
    pub fn schedule_wifi_connect(&mut self, delay: Duration) {
        abort(&mut self.wifi);
        let handle = self.handle.clone();
        self.wifi = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let notification = handle.apply(DashboardEngine::finish_wifi_connect).await;
            handle.notify(notification);
        }));
    }

    /// Abort every task and wait until none of them can run again.
    pub async fn shutdown(&mut self) {
        let wifi = abort(&mut self.wifi);
        let wifi_pending = wifi.is_some();
        let tasks = [
            abort(&mut self.telemetry),
            abort(&mut self.battery),
            abort(&mut self.recording),
            wifi,
        ];
        for task in tasks.into_iter().flatten() {
            // Cancelled tasks resolve to a JoinError; that is the expected outcome.
            let _ = task.await;
        }
        // An aborted connect never reports back, so the flag is cleared here.
        if wifi_pending {
            self.handle.apply(DashboardEngine::cancel_wifi_connect).await;
        }
        tracing::info!("scheduler stopped");
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        abort(&mut self.telemetry);
        abort(&mut self.battery);
        abort(&mut self.recording);
        abort(&mut self.wifi);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::engine::tests::test_engine;

    fn periods() -> TickPeriods {
        TickPeriods::default()
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_period() {
        let handle = EngineHandle::new(test_engine(1));
        let initial = handle.snapshot().await.telemetry;
        let mut scheduler = Scheduler::new(handle.clone(), periods());
        scheduler.start();

        tokio::time::sleep(Duration::from_millis(1_500)).await;
        assert_eq!(handle.snapshot().await.telemetry, initial);

        tokio::time::sleep(Duration::from_millis(1_000)).await;
        assert_ne!(handle.snapshot().await.telemetry, initial);

        scheduler.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_battery_drains_every_fifteen_seconds() {
        let handle = EngineHandle::new(test_engine(2));
        let mut scheduler = Scheduler::new(handle.clone(), periods());
        scheduler.start();

        tokio::time::sleep(Duration::from_millis(45_500)).await;
        assert_eq!(handle.snapshot().await.telemetry.battery, 85.0);

        scheduler.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_steps_after_shutdown() {
        let handle = EngineHandle::new(test_engine(3));
        let mut scheduler = Scheduler::new(handle.clone(), periods());
        scheduler.start();
        tokio::time::sleep(Duration::from_millis(4_500)).await;
        scheduler.shutdown().await;

        let frozen = handle.snapshot().await;
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(handle.snapshot().await, frozen);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_tasks() {
        let handle = EngineHandle::new(test_engine(4));
        {
            let mut scheduler = Scheduler::new(handle.clone(), periods());
            scheduler.start();
        }
        let initial = handle.snapshot().await;
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(handle.snapshot().await, initial);
    }

    #[tokio::test(start_paused = true)]
    async fn test_apply_publishes_snapshot() {
        let handle = EngineHandle::new(test_engine(5));
        let mut snapshots = handle.subscribe_snapshots();
        handle.apply(|engine| engine.ascend()).await;

        assert!(snapshots.has_changed().unwrap());
        assert_eq!(snapshots.borrow_and_update().telemetry.position.z, 5.0);
    }
}
