//! Camera placement system.
//!
//! Places the camera around the aircraft for program-driven modes. With no
//! aircraft in the world the previous transform is left untouched.

use hecs::World;

use skylark_camera::fsm;
use skylark_core::components::{Aircraft, FlightState};
use skylark_core::enums::CameraMode;
use skylark_core::state::CameraTransform;

/// Update `camera` for the current mode. Read-only on the world.
pub fn run(world: &World, mode: CameraMode, camera: &mut Option<CameraTransform>) {
    let position = world
        .query::<(&Aircraft, &FlightState)>()
        .iter()
        .next()
        .map(|(_, (_, state))| state.kinematics.position);

    if let Some(position) = position {
        *camera = fsm::place(mode, position);
    }
}
