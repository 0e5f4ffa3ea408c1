//! Flight state and the per-tick frame snapshot handed to the presentation layer.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::{ENGINE_TEMP_IDLE, FUEL_MAX};
use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{Attitude, SimTime};

/// Aircraft pose and motion. Velocity is in world units per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AircraftKinematics {
    pub position: DVec3,
    pub attitude: Attitude,
    pub velocity: DVec3,
}

/// Accumulated engine and control-surface state, kept at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceState {
    /// Throttle setting, 0–100.
    pub throttle: f64,
    /// Flap deflection, 0–40 degrees.
    pub flaps: f64,
    /// Fuel remaining, 0–100.
    pub fuel: f64,
    /// Engine temperature (°C).
    pub engine_temperature: f64,
}

impl Default for ResourceState {
    fn default() -> Self {
        Self {
            throttle: 0.0,
            flaps: 0.0,
            fuel: FUEL_MAX,
            engine_temperature: ENGINE_TEMP_IDLE,
        }
    }
}

/// Instrument values derived during a tick, before display rounding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightReadings {
    /// Knots.
    pub speed: f64,
    /// Feet above ground.
    pub altitude: f64,
    /// Degrees in [0, 360).
    pub heading: f64,
    /// Feet per minute, positive climbing.
    pub vertical_speed: f64,
    pub g_force: f64,
    pub engine_status: EngineStatus,
}

/// Cosmetic weather shown on the HUD. Rolled once per flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub condition: WeatherCondition,
    /// Direction the wind blows from (degrees).
    pub wind_direction: u16,
    /// Knots.
    pub wind_speed: u32,
    /// Kilometres.
    pub visibility: u32,
    /// Outside air temperature (°C).
    pub temperature: i32,
}

/// What the HUD displays. Rebuilt in full every tick; all rounding happens here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InstrumentSnapshot {
    pub speed: i32,
    pub altitude: i32,
    /// 0–359.
    pub heading: u16,
    pub vertical_speed: i32,
    pub g_force: i32,
    /// 0–100.
    pub throttle: i32,
    /// 0–40.
    pub flaps: i32,
    /// 0–100, one decimal.
    pub fuel: f64,
    pub engine_temperature: i32,
    pub engine_status: EngineStatus,
    pub landing_gear_down: bool,
    pub weather: WeatherReport,
}

impl InstrumentSnapshot {
    pub fn from_readings(
        readings: &FlightReadings,
        resources: &ResourceState,
        landing_gear_down: bool,
        weather: WeatherReport,
    ) -> Self {
        Self {
            speed: readings.speed.round() as i32,
            altitude: readings.altitude.max(0.0).round() as i32,
            heading: (readings.heading.round() as i64).rem_euclid(360) as u16,
            vertical_speed: readings.vertical_speed.round() as i32,
            g_force: readings.g_force.round() as i32,
            throttle: resources.throttle.round() as i32,
            flaps: resources.flaps.round() as i32,
            fuel: round_to_tenth(resources.fuel),
            engine_temperature: resources.engine_temperature.round() as i32,
            engine_status: readings.engine_status,
            landing_gear_down,
            weather,
        }
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Where the simulation wants the camera this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraTransform {
    pub eye: DVec3,
    pub target: DVec3,
}

/// Complete frame state broadcast to the presentation layer after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: SimPhase,
    pub camera_mode: CameraMode,
    /// `None` in free-look, or before the first placement.
    pub camera: Option<CameraTransform>,
    /// `None` until a flight has started.
    pub aircraft: Option<AircraftKinematics>,
    /// `None` until a flight has started.
    pub instruments: Option<InstrumentSnapshot>,
    pub events: Vec<SimEvent>,
}
