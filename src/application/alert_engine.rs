// Alert engine - Derive alerts from the latest snapshot
use crate::domain::alert::{AlertKind, AlertLog};
use crate::domain::locale::Catalog;
use crate::domain::telemetry::TelemetryState;
use chrono::{DateTime, Utc};

pub const LOW_BATTERY_THRESHOLD: f64 = 20.0;

/// Conditions that currently hold for `state`, in evaluation order.
pub fn triggered(state: &TelemetryState) -> Vec<AlertKind> {
    let mut kinds = Vec::new();
    if state.battery < LOW_BATTERY_THRESHOLD {
        kinds.push(AlertKind::LowBattery);
    }
    if state.leak_detected {
        kinds.push(AlertKind::LeakDetected);
    }
    kinds
}

/// Append an alert for each triggered condition not already held.
///
/// Returns the kinds that were raised.
pub fn evaluate(
    state: &TelemetryState,
    log: &mut AlertLog,
    catalog: &Catalog,
    now: DateTime<Utc>,
) -> Vec<AlertKind> {
    let mut raised = Vec::new();
    for kind in triggered(state) {
        if log.holds(kind) {
            continue;
        }
        let alert = log.push(kind, catalog, now);
        tracing::info!(id = alert.id, kind = ?kind, "alert raised: {}", alert.message);
        raised.push(kind);
    }
    raised
}
