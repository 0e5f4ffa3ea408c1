//! Flight system.
//!
//! Runs the integrator on every aircraft and reports notable transitions
//! (engine status, fuel exhaustion, touchdown) as events.

use hecs::World;
use tracing::debug;

use skylark_core::components::{Aircraft, FlightState};
use skylark_core::config::FlightModelConfig;
use skylark_core::constants::GROUND_LEVEL;
use skylark_core::controls::ControlInputSet;
use skylark_core::events::SimEvent;

use crate::integrator;

/// Advance every aircraft by one tick with the same control snapshot.
pub fn run(
    world: &mut World,
    controls: ControlInputSet,
    model: &FlightModelConfig,
    events: &mut Vec<SimEvent>,
) {
    for (_entity, (_aircraft, state)) in world.query_mut::<(&Aircraft, &mut FlightState)>() {
        let next = integrator::step(state, controls, model);
        detect_transitions(state, &next, events);
        *state = next;
    }
}

fn detect_transitions(previous: &FlightState, next: &FlightState, events: &mut Vec<SimEvent>) {
    let from = previous.readings.engine_status;
    let to = next.readings.engine_status;
    if from != to {
        debug!(?from, ?to, "engine status changed");
        events.push(SimEvent::EngineStatusChanged { from, to });
    }

    if previous.resources.fuel > 0.0 && next.resources.fuel <= 0.0 {
        debug!("fuel exhausted");
        events.push(SimEvent::FuelExhausted);
    }

    let was_airborne = previous.kinematics.position.y > GROUND_LEVEL;
    let on_ground = next.kinematics.position.y <= GROUND_LEVEL;
    if was_airborne && on_ground {
        let vertical_speed = next.readings.vertical_speed;
        debug!(vertical_speed, "touchdown");
        events.push(SimEvent::Touchdown { vertical_speed });
    }
}
