// Telemetry domain models
use serde::Serialize;

pub const DEPTH_RANGE: (f64, f64) = (0.0, 100.0);
pub const BATTERY_RANGE: (f64, f64) = (0.0, 100.0);
pub const TEMPERATURE_RANGE: (f64, f64) = (5.0, 30.0);
pub const PH_RANGE: (f64, f64) = (0.0, 14.0);

pub const DRIFT_X_RANGE: (f64, f64) = (-60.0, 60.0);
pub const DRIFT_Y_RANGE: (f64, f64) = (-40.0, 40.0);
pub const DRIFT_Z_RANGE: (f64, f64) = (-30.0, 30.0);

pub const PITCH_RANGE: (f64, f64) = (-25.0, 25.0);
pub const ROLL_RANGE: (f64, f64) = (-20.0, 20.0);

/// Clamp `value` into the inclusive `(lower, upper)` range.
pub fn clamp(value: f64, (lower, upper): (f64, f64)) -> f64 {
    value.max(lower).min(upper)
}

/// Wrap an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(value: f64) -> f64 {
    let wrapped = value.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Heading-like angle in degrees, only changed by rotate commands.
    pub orientation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FishOrientation {
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryState {
    pub depth: f64,
    pub battery: f64,
    pub temperature: f64,
    pub pressure: f64,
    pub ph: f64,
    pub compass: f64,
    pub connection: u8,
    pub leak_detected: bool,
    pub position: Position,
    pub fish_orientation: FishOrientation,
}

impl Default for TelemetryState {
    /// Seed values the dashboard mounts with.
    fn default() -> Self {
        Self {
            depth: 25.1,
            battery: 88.0,
            temperature: 15.3,
            pressure: 1024.0,
            ph: 7.2,
            compass: 45.0,
            connection: 4,
            leak_detected: false,
            position: Position {
                x: 0.0,
                y: 0.0,
                z: 0.0,
                orientation: 0.0,
            },
            fish_orientation: FishOrientation {
                yaw: 0.0,
                pitch: 0.0,
                roll: 0.0,
            },
        }
    }
}
