// Sensor enablement mask
use crate::domain::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorId {
    Camera,
    Sonar,
    Temp,
    Ph,
    Pressure,
    Leak,
}

impl SensorId {
    pub const ALL: [SensorId; 6] = [
        SensorId::Camera,
        SensorId::Sonar,
        SensorId::Temp,
        SensorId::Ph,
        SensorId::Pressure,
        SensorId::Leak,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SensorId::Camera => "camera",
            SensorId::Sonar => "sonar",
            SensorId::Temp => "temp",
            SensorId::Ph => "ph",
            SensorId::Pressure => "pressure",
            SensorId::Leak => "leak",
        }
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SensorId {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SensorId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownSensor(s.to_string()))
    }
}

/// Which sensors are live. A disabled sensor pins its field to zero on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SensorMask {
    pub camera: bool,
    pub sonar: bool,
    pub temp: bool,
    pub ph: bool,
    pub pressure: bool,
    pub leak: bool,
}

impl Default for SensorMask {
    fn default() -> Self {
        Self {
            camera: true,
            sonar: true,
            temp: true,
            ph: true,
            pressure: true,
            leak: true,
        }
    }
}

impl SensorMask {
    pub fn set(&mut self, id: SensorId, enabled: bool) {
        let slot = match id {
            SensorId::Camera => &mut self.camera,
            SensorId::Sonar => &mut self.sonar,
            SensorId::Temp => &mut self.temp,
            SensorId::Ph => &mut self.ph,
            SensorId::Pressure => &mut self.pressure,
            SensorId::Leak => &mut self.leak,
        };
        *slot = enabled;
    }
}

#[cfg(test)]
impl SensorMask {
    pub fn is_enabled(&self, id: SensorId) -> bool {
        match id {
            SensorId::Camera => self.camera,
            SensorId::Sonar => self.sonar,
            SensorId::Temp => self.temp,
            SensorId::Ph => self.ph,
            SensorId::Pressure => self.pressure,
            SensorId::Leak => self.leak,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sensor_id() {
        assert_eq!("ph".parse::<SensorId>().unwrap(), SensorId::Ph);
        assert_eq!("leak".parse::<SensorId>().unwrap(), SensorId::Leak);
        assert!(matches!(
            "lidar".parse::<SensorId>(),
            Err(DashboardError::UnknownSensor(_))
        ));
    }

    #[test]
    fn test_set_only_touches_one_sensor() {
        let mut mask = SensorMask::default();
        mask.set(SensorId::Pressure, false);

        for id in SensorId::ALL {
            assert_eq!(mask.is_enabled(id), id != SensorId::Pressure);
        }
    }
}
