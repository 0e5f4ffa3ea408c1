//! Snapshot system: queries the ECS world and builds a complete FrameSnapshot.
//!
//! This system is read-only: it never modifies the world.

use hecs::World;

use skylark_core::components::*;
use skylark_core::enums::*;
use skylark_core::events::SimEvent;
use skylark_core::state::*;
use skylark_core::types::SimTime;

/// Everything outside the world that goes into a snapshot.
pub struct FrameContext {
    pub time: SimTime,
    pub phase: SimPhase,
    pub camera_mode: CameraMode,
    pub camera: Option<CameraTransform>,
    pub weather: WeatherReport,
}

/// Build a complete FrameSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    context: &FrameContext,
    events: Vec<SimEvent>,
) -> FrameSnapshot {
    let aircraft = world
        .query::<(&Aircraft, &FlightState, &LandingGear)>()
        .iter()
        .next()
        .map(|(_, (_, state, gear))| (*state, gear.down));

    let (kinematics, instruments) = match aircraft {
        Some((state, gear_down)) => (
            Some(state.kinematics),
            Some(InstrumentSnapshot::from_readings(
                &state.readings,
                &state.resources,
                gear_down,
                context.weather,
            )),
        ),
        None => (None, None),
    };

    FrameSnapshot {
        time: context.time,
        phase: context.phase,
        camera_mode: context.camera_mode,
        camera: context.camera,
        aircraft: kinematics,
        instruments,
        events,
    }
}
