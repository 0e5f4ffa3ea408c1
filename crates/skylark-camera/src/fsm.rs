//! Camera mode finite state machine.
//!
//! Pure functions: no ECS dependency, no stored state. The engine owns the
//! current mode and calls [`cycle`] when the pilot asks for the next view.

use glam::DVec3;

use skylark_core::enums::CameraMode;
use skylark_core::state::CameraTransform;

use crate::rigs::{get_rig, LookAt};

/// Next mode in the fixed cycle CHASE → COCKPIT → FREE → CHASE.
pub fn cycle(mode: CameraMode) -> CameraMode {
    match mode {
        CameraMode::Chase => CameraMode::Cockpit,
        CameraMode::Cockpit => CameraMode::Free,
        CameraMode::Free => CameraMode::Chase,
    }
}

/// Whether the simulation places the camera in this mode.
pub fn is_program_driven(mode: CameraMode) -> bool {
    get_rig(mode).is_some()
}

/// Camera transform for `mode` around an aircraft at `aircraft_position`.
/// Returns `None` in free-look, where the user's orbit input owns the camera.
pub fn place(mode: CameraMode, aircraft_position: DVec3) -> Option<CameraTransform> {
    let rig = get_rig(mode)?;
    let target = match rig.look_at {
        LookAt::Aircraft => aircraft_position,
        LookAt::WorldOffset(offset) => aircraft_position + offset,
    };
    Some(CameraTransform {
        eye: aircraft_position + rig.eye_offset,
        target,
    })
}
