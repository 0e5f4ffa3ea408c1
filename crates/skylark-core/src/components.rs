//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::state::{AircraftKinematics, FlightReadings, ResourceState};

/// Marks the player's aircraft.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Aircraft;

/// Everything the flight integrator carries from one tick to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    pub kinematics: AircraftKinematics,
    pub resources: ResourceState,
    /// Derived on the last tick. Never fed back into dynamics.
    pub readings: FlightReadings,
}

/// Landing gear position. No effect on dynamics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LandingGear {
    pub down: bool,
}
