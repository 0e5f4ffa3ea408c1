//! Flight-model configuration and start conditions.
//!
//! One integrator serves every variant: each optional effect is a switch
//! here, so effects can be enabled and tested independently.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::components::FlightState;
use crate::constants::{ENGINE_TEMP_IDLE, FUEL_MAX};
use crate::state::{AircraftKinematics, ResourceState};
use crate::types::Attitude;

/// Which optional effects the integrator applies.
///
/// Throttle, attitude, thrust, base drag, Euler integration, the ground
/// clamp and instrument derivation always run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightModelConfig {
    /// Flap controls move the flaps. Off: flap inputs are ignored.
    pub flaps: bool,
    /// Constant downward pull each tick.
    pub gravity: bool,
    /// Speed- and pitch-dependent lift along world up.
    pub lift: bool,
    /// Extended flaps add drag.
    pub flap_drag: bool,
    /// Throttle burns fuel.
    pub fuel_consumption: bool,
    /// Engine temperature lags toward a throttle-dependent target.
    pub engine_temperature: bool,
    /// An empty tank produces no thrust. Only meaningful with `fuel_consumption`.
    pub fuel_starvation: bool,
}

impl FlightModelConfig {
    /// Thrust and drag only.
    pub fn baseline() -> Self {
        Self {
            flaps: false,
            gravity: false,
            lift: false,
            flap_drag: false,
            fuel_consumption: false,
            engine_temperature: false,
            fuel_starvation: false,
        }
    }

    /// Every effect enabled except fuel starvation, which must be asked for.
    pub fn aerodynamic() -> Self {
        Self {
            flaps: true,
            gravity: true,
            lift: true,
            flap_drag: true,
            fuel_consumption: true,
            engine_temperature: true,
            fuel_starvation: false,
        }
    }
}

impl Default for FlightModelConfig {
    fn default() -> Self {
        Self::aerodynamic()
    }
}

/// Initial aircraft state for a new flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartConditions {
    pub position: DVec3,
    pub attitude: Attitude,
    /// World units per tick.
    pub velocity: DVec3,
    pub throttle: f64,
    pub flaps: f64,
    pub fuel: f64,
    pub engine_temperature: f64,
    pub landing_gear_down: bool,
}

impl Default for StartConditions {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            attitude: Attitude::default(),
            velocity: DVec3::ZERO,
            throttle: 0.0,
            flaps: 0.0,
            fuel: FUEL_MAX,
            engine_temperature: ENGINE_TEMP_IDLE,
            landing_gear_down: true,
        }
    }
}

impl StartConditions {
    /// At rest at `height` world units above the origin, gear up.
    pub fn airborne(height: f64) -> Self {
        Self {
            position: DVec3::new(0.0, height, 0.0),
            landing_gear_down: false,
            ..Default::default()
        }
    }

    /// The integrator state these conditions describe. Readings are left at
    /// their defaults until the first tick derives them.
    pub fn flight_state(&self) -> FlightState {
        FlightState {
            kinematics: AircraftKinematics {
                position: self.position,
                attitude: self.attitude,
                velocity: self.velocity,
            },
            resources: ResourceState {
                throttle: self.throttle,
                flaps: self.flaps,
                fuel: self.fuel,
                engine_temperature: self.engine_temperature,
            },
            readings: Default::default(),
        }
    }
}
