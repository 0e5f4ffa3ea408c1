//! Mode-specific camera rigs.
//!
//! Consolidates per-mode offsets for the camera state machine.

use glam::DVec3;

use skylark_core::enums::CameraMode;

/// What the camera looks at, relative to the aircraft position.
pub enum LookAt {
    /// The aircraft itself.
    Aircraft,
    /// A fixed world-space offset from the aircraft, ignoring heading.
    WorldOffset(DVec3),
}

/// Placement rule for a program-driven camera mode.
pub struct CameraRig {
    /// Eye point relative to the aircraft, in world axes.
    pub eye_offset: DVec3,
    pub look_at: LookAt,
}

/// Get the rig for a camera mode, or `None` for free-look.
pub fn get_rig(mode: CameraMode) -> Option<CameraRig> {
    use skylark_core::constants::*;

    match mode {
        CameraMode::Chase => Some(CameraRig {
            eye_offset: CHASE_EYE_OFFSET,
            look_at: LookAt::Aircraft,
        }),
        // TODO: look along the aircraft heading instead of world +Z once the
        // cockpit view is expected to follow turns.
        CameraMode::Cockpit => Some(CameraRig {
            eye_offset: COCKPIT_EYE_OFFSET,
            look_at: LookAt::WorldOffset(COCKPIT_LOOK_OFFSET),
        }),
        CameraMode::Free => None,
    }
}
