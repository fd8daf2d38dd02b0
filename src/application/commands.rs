// Command handlers - Discrete pose mutations from manual controls
use crate::domain::command::{MoveDirection, RotateDirection};
use crate::domain::telemetry::{clamp, wrap_degrees, TelemetryState};

const MOVE_STEP: f64 = 5.0;
const MOVE_X_RANGE: (f64, f64) = (-100.0, 100.0);
const MOVE_ROLL_NUDGE: f64 = 3.0;
const MOVE_ROLL_RANGE: (f64, f64) = (-15.0, 15.0);

const LIFT_STEP: f64 = 5.0;
const LIFT_Z_RANGE: (f64, f64) = (-50.0, 50.0);

const ROTATE_STEP: f64 = 15.0;

/// Step along x, snap yaw to the travel heading and bank slightly.
pub fn apply_move(state: &mut TelemetryState, direction: MoveDirection) {
    let (dx, yaw, roll) = match direction {
        MoveDirection::Forward => (MOVE_STEP, 0.0, MOVE_ROLL_NUDGE),
        MoveDirection::Backward => (-MOVE_STEP, 180.0, -MOVE_ROLL_NUDGE),
    };

    state.position.x = clamp(state.position.x + dx, MOVE_X_RANGE);
    state.fish_orientation.yaw = yaw;
    state.fish_orientation.roll = clamp(state.fish_orientation.roll + roll, MOVE_ROLL_RANGE);
}

pub fn apply_ascend(state: &mut TelemetryState) {
    state.position.z = clamp(state.position.z + LIFT_STEP, LIFT_Z_RANGE);
}

pub fn apply_descend(state: &mut TelemetryState) {
    state.position.z = clamp(state.position.z - LIFT_STEP, LIFT_Z_RANGE);
}

pub fn apply_rotate(state: &mut TelemetryState, direction: RotateDirection) {
    let delta = match direction {
        RotateDirection::Left => -ROTATE_STEP,
        RotateDirection::Right => ROTATE_STEP,
    };
    state.position.orientation = wrap_degrees(state.position.orientation + delta);
}
