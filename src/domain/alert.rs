// Alert domain model
use crate::domain::locale::Catalog;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;

pub const MAX_ALERTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AlertKind {
    SystemConnected,
    LowBattery,
    LeakDetected,
}

impl AlertKind {
    pub fn severity(&self) -> Severity {
        match self {
            AlertKind::SystemConnected => Severity::Info,
            AlertKind::LowBattery => Severity::Warning,
            AlertKind::LeakDetected => Severity::Error,
        }
    }

    pub fn message<'a>(&self, catalog: &'a Catalog) -> &'a str {
        match self {
            AlertKind::SystemConnected => &catalog.alerts.system_connected,
            AlertKind::LowBattery => &catalog.alerts.low_battery,
            AlertKind::LeakDetected => &catalog.alerts.leak_detected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub id: i64,
    pub kind: AlertKind,
    pub message: String,
    pub severity: Severity,
    pub timestamp: DateTime<Utc>,
}

/// The most recent alerts, oldest first.
#[derive(Debug, Clone, Default)]
pub struct AlertLog {
    alerts: VecDeque<Alert>,
    last_id: Option<i64>,
}

impl AlertLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn holds(&self, kind: AlertKind) -> bool {
        self.alerts.iter().any(|a| a.kind == kind)
    }

    /// Append an alert of `kind`, evicting the oldest beyond [`MAX_ALERTS`].
    ///
    /// Ids derive from the timestamp in milliseconds but are bumped when
    /// needed so they stay strictly increasing.
    pub fn push(&mut self, kind: AlertKind, catalog: &Catalog, timestamp: DateTime<Utc>) -> &Alert {
        let millis = timestamp.timestamp_millis();
        let id = match self.last_id {
            Some(last) if last >= millis => last + 1,
            _ => millis,
        };
        self.last_id = Some(id);

        self.alerts.push_back(Alert {
            id,
            kind,
            message: kind.message(catalog).to_string(),
            severity: kind.severity(),
            timestamp,
        });
        while self.alerts.len() > MAX_ALERTS {
            self.alerts.pop_front();
        }

        &self.alerts[self.alerts.len() - 1]
    }

    /// Re-render every held message in another language without touching ids or order.
    pub fn relocalize(&mut self, catalog: &Catalog) {
        for alert in self.alerts.iter_mut() {
            alert.message = alert.kind.message(catalog).to_string();
        }
    }

    pub fn to_vec(&self) -> Vec<Alert> {
        self.alerts.iter().cloned().collect()
    }
}

#[cfg(test)]
impl AlertLog {
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn test_fourth_alert_evicts_oldest() {
        let catalog = Catalog::english();
        let mut log = AlertLog::new();
        log.push(AlertKind::SystemConnected, &catalog, at(1_000));
        log.push(AlertKind::LowBattery, &catalog, at(2_000));
        log.push(AlertKind::LeakDetected, &catalog, at(3_000));
        log.push(AlertKind::LeakDetected, &catalog, at(4_000));

        assert_eq!(log.len(), MAX_ALERTS);
        assert!(!log.holds(AlertKind::SystemConnected));
        let ids: Vec<i64> = log.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2_000, 3_000, 4_000]);
    }

    #[test]
    fn test_ids_strictly_increase_within_same_millisecond() {
        let catalog = Catalog::english();
        let mut log = AlertLog::new();
        let first = log.push(AlertKind::LowBattery, &catalog, at(5_000)).id;
        let second = log.push(AlertKind::LeakDetected, &catalog, at(5_000)).id;
        let third = log.push(AlertKind::LeakDetected, &catalog, at(4_000)).id;

        assert_eq!(first, 5_000);
        assert_eq!(second, 5_001);
        assert_eq!(third, 5_002);
    }

    #[test]
    fn test_relocalize_keeps_identity() {
        let mut log = AlertLog::new();
        log.push(AlertKind::LowBattery, &Catalog::english(), at(1_000));
        let before = log.to_vec();

        log.relocalize(&Catalog::arabic());

        let after = log.to_vec();
        assert_eq!(after[0].id, before[0].id);
        assert_eq!(after[0].severity, Severity::Warning);
        assert_eq!(after[0].message, Catalog::arabic().alerts.low_battery);
        assert!(log.holds(AlertKind::LowBattery));
    }
}
