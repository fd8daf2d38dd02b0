// Telemetry update engine - One bounded random walk step per tick
use crate::domain::sensors::SensorMask;
use crate::domain::telemetry::{
    clamp, wrap_degrees, FishOrientation, Position, TelemetryState, BATTERY_RANGE, DEPTH_RANGE,
    DRIFT_X_RANGE, DRIFT_Y_RANGE, DRIFT_Z_RANGE, PH_RANGE, PITCH_RANGE, ROLL_RANGE,
    TEMPERATURE_RANGE,
};
use rand::Rng;

const LEAK_PROBABILITY: f64 = 0.01;
const BATTERY_DRAIN_PER_TICK: f64 = 1.0;

/// Uniform delta in `[-span/2, span/2)`.
fn spread<R: Rng>(rng: &mut R, span: f64) -> f64 {
    (rng.r#gen::<f64>() - 0.5) * span
}

/// Compute the next snapshot from `prev`.
///
/// Every field reads only `prev`, and every field consumes exactly one draw
/// in declaration order whether or not its sensor is enabled, so a fixed seed
/// gives the same sequence for any mask.
pub fn tick<R: Rng>(prev: &TelemetryState, mask: &SensorMask, rng: &mut R) -> TelemetryState {
    let depth = clamp(prev.depth + spread(rng, 2.0), DEPTH_RANGE);

    let temperature_step = spread(rng, 0.5);
    let temperature = if mask.temp {
        clamp(prev.temperature + temperature_step, TEMPERATURE_RANGE)
    } else {
        0.0
    };

    let pressure_step = spread(rng, 5.0);
    let pressure = if mask.pressure {
        prev.pressure + pressure_step
    } else {
        0.0
    };

    let ph_step = spread(rng, 0.1);
    let ph = if mask.ph {
        clamp(prev.ph + ph_step, PH_RANGE)
    } else {
        0.0
    };

    // Centered on 0.4 rather than 0.5: slight clockwise drift.
    let compass = wrap_degrees(prev.compass + (rng.r#gen::<f64>() - 0.4) * 10.0);

    let connection = 3 + (rng.r#gen::<f64>() * 2.0).floor() as u8;

    let leak_draw = rng.r#gen::<f64>();
    let leak_detected = mask.leak && leak_draw < LEAK_PROBABILITY;

    let position = Position {
        x: clamp(prev.position.x + spread(rng, 4.0), DRIFT_X_RANGE),
        y: clamp(prev.position.y + spread(rng, 3.0), DRIFT_Y_RANGE),
        z: clamp(prev.position.z + spread(rng, 3.0), DRIFT_Z_RANGE),
        orientation: prev.position.orientation,
    };

    let fish_orientation = FishOrientation {
        yaw: wrap_degrees(prev.fish_orientation.yaw + spread(rng, 8.0)),
        pitch: clamp(prev.fish_orientation.pitch + spread(rng, 4.0), PITCH_RANGE),
        roll: clamp(prev.fish_orientation.roll + spread(rng, 3.0), ROLL_RANGE),
    };

    TelemetryState {
        depth,
        battery: prev.battery,
        temperature,
        pressure,
        ph,
        compass,
        connection,
        leak_detected,
        position,
        fish_orientation,
    }
}

/// Slow battery drain; no recovery path.
pub fn battery_tick(prev: &TelemetryState) -> TelemetryState {
    TelemetryState {
        battery: clamp(prev.battery - BATTERY_DRAIN_PER_TICK, BATTERY_RANGE),
        ..prev.clone()
    }
}
