//! Flight dynamics integrator.
//!
//! [`step`] advances a [`FlightState`] by exactly one fixed tick. It is a
//! pure function of the previous state, the held-control snapshot and the
//! flight-model switches: no world access, no randomness, no rounding.
//!
//! Step order matters. Thrust uses the attitude updated this tick, the
//! ground clamp runs before instruments are derived, and vertical speed is
//! measured from the pre-tick height to the clamped new height.

use glam::DVec3;

use skylark_core::components::FlightState;
use skylark_core::config::FlightModelConfig;
use skylark_core::constants::*;
use skylark_core::controls::{Control, ControlInputSet};
use skylark_core::enums::EngineStatus;
use skylark_core::state::{AircraftKinematics, FlightReadings, ResourceState};

/// Advance the flight state by one tick.
pub fn step(
    state: &FlightState,
    controls: ControlInputSet,
    model: &FlightModelConfig,
) -> FlightState {
    let mut resources = sanitize_resources(state.resources);
    let mut kinematics = sanitize_kinematics(state.kinematics);

    let previous_height = kinematics.position.y;
    let tank_empty = model.fuel_consumption && resources.fuel <= 0.0;

    // 1. Throttle
    resources.throttle = (resources.throttle
        + THROTTLE_STEP * controls.axis(Control::ThrottleUp, Control::ThrottleDown))
    .clamp(0.0, THROTTLE_MAX);

    // 2. Flaps
    if model.flaps {
        resources.flaps = (resources.flaps
            + FLAPS_STEP * controls.axis(Control::FlapsExtend, Control::FlapsRetract))
        .clamp(0.0, FLAPS_MAX);
    }

    // 3. Attitude. Pitching up lowers pitch; a roll command always brings yaw with it.
    let attitude = &mut kinematics.attitude;
    attitude.pitch = (attitude.pitch
        + PITCH_RATE * controls.axis(Control::PitchDown, Control::PitchUp))
    .clamp(-PITCH_LIMIT, PITCH_LIMIT);
    let roll_input = controls.axis(Control::RollLeft, Control::RollRight);
    attitude.roll = (attitude.roll + ROLL_RATE * roll_input).clamp(-ROLL_LIMIT, ROLL_LIMIT);
    attitude.yaw += YAW_COUPLING_RATE * roll_input;

    // 4. Thrust along the updated nose direction
    let thrust = if tank_empty && model.fuel_starvation {
        0.0
    } else {
        resources.throttle / THROTTLE_MAX * MAX_THRUST
    };
    kinematics.velocity += kinematics.attitude.forward() * thrust;

    // 5. Lift
    if model.lift {
        kinematics.velocity.y += lift(
            kinematics.velocity,
            kinematics.attitude.pitch,
            resources.flaps,
        );
    }

    // 6. Gravity
    if model.gravity {
        kinematics.velocity.y -= GRAVITY;
    }

    // 7. Drag
    let drag_divisor = if model.flap_drag {
        1.0 + resources.flaps / FLAP_DRAG_DIVISOR
    } else {
        1.0
    };
    kinematics.velocity *= DRAG_FACTOR / drag_divisor;

    // 8. Integrate
    kinematics.position += kinematics.velocity;

    // 9. Ground collision: hard floor, vertical momentum discarded
    if kinematics.position.y < GROUND_LEVEL {
        kinematics.position.y = GROUND_LEVEL;
        kinematics.velocity.y = 0.0;
    }

    // 10. Resources, settled first so engine status reflects this tick's fuel
    if model.fuel_consumption {
        resources.fuel =
            (resources.fuel - resources.throttle / THROTTLE_MAX * FUEL_BURN_RATE).max(0.0);
    }
    if model.engine_temperature {
        let target = ENGINE_TEMP_IDLE + resources.throttle / THROTTLE_MAX * ENGINE_TEMP_RANGE;
        resources.engine_temperature +=
            (target - resources.engine_temperature) * ENGINE_TEMP_SMOOTHING;
    }

    // 11. Instruments
    let readings = derive_readings(&kinematics, &resources, previous_height);

    FlightState {
        kinematics,
        resources,
        readings,
    }
}

/// Lift along world up for the given velocity, pitch and flap setting.
pub fn lift(velocity: DVec3, pitch: f64, flaps: f64) -> f64 {
    velocity.length() * (-pitch).sin() * (1.0 + flaps / FLAP_LIFT_DIVISOR) * LIFT_COEFFICIENT
}

/// Full-precision instrument values for a resolved tick.
fn derive_readings(
    kinematics: &AircraftKinematics,
    resources: &ResourceState,
    previous_height: f64,
) -> FlightReadings {
    let vertical_speed = (kinematics.position.y - previous_height) * VERTICAL_SPEED_SCALE;
    FlightReadings {
        speed: kinematics.velocity.length() * SPEED_DISPLAY_SCALE,
        altitude: (kinematics.position.y * ALTITUDE_DISPLAY_SCALE).max(0.0),
        heading: kinematics.attitude.heading_degrees(),
        vertical_speed,
        g_force: vertical_speed.abs() / G_FORCE_DIVISOR + 1.0,
        engine_status: EngineStatus::from_resources(resources.fuel, resources.throttle),
    }
}

/// Clamp externally supplied resources into range.
fn sanitize_resources(resources: ResourceState) -> ResourceState {
    ResourceState {
        throttle: resources.throttle.clamp(0.0, THROTTLE_MAX),
        flaps: resources.flaps.clamp(0.0, FLAPS_MAX),
        fuel: resources.fuel.clamp(0.0, FUEL_MAX),
        engine_temperature: resources.engine_temperature,
    }
}

/// Clamp externally supplied attitude and height into range.
fn sanitize_kinematics(mut kinematics: AircraftKinematics) -> AircraftKinematics {
    kinematics.attitude.pitch = kinematics.attitude.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    kinematics.attitude.roll = kinematics.attitude.roll.clamp(-ROLL_LIMIT, ROLL_LIMIT);
    kinematics.position.y = kinematics.position.y.max(GROUND_LEVEL);
    kinematics
}
