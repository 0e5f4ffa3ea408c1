//! Pilot commands sent from the input source to the simulation.
//!
//! Commands are queued and applied in arrival order at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::controls::Control;

/// All possible pilot actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Flight controls ---
    /// A control was pressed and is now held.
    PressControl { control: Control },
    /// A held control was released.
    ReleaseControl { control: Control },
    /// Drop every held control (e.g. the input window lost focus).
    ReleaseAllControls,

    // --- Cockpit switches ---
    /// Advance the camera to the next viewpoint.
    CycleCamera,
    /// Raise or lower the landing gear. Cosmetic only.
    ToggleLandingGear,

    // --- Simulation control ---
    /// Spawn the aircraft and start ticking. Ignored once a flight exists.
    StartFlight,
    /// Suspend ticking.
    Pause,
    /// Resume ticking.
    Resume,
    /// Start if stopped, otherwise flip between running and paused.
    TogglePause,
}
