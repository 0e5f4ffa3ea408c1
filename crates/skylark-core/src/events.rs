//! Events emitted by the simulation for HUD and audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Discrete things that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// Derived engine status changed.
    EngineStatusChanged { from: EngineStatus, to: EngineStatus },
    /// The tank ran dry this tick.
    FuelExhausted,
    /// The aircraft reached the ground this tick, sinking at `vertical_speed`.
    Touchdown { vertical_speed: f64 },
    /// Camera viewpoint changed.
    CameraModeChanged { mode: CameraMode },
    /// Landing gear moved. `down` is the new position.
    LandingGearToggled { down: bool },
}
