//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Engine state shown on the HUD.
///
/// Never stored on its own: always derived from fuel and throttle with
/// [`EngineStatus::from_resources`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineStatus {
    /// Throttle closed, fuel remaining.
    #[default]
    Idle,
    /// Throttle open, fuel remaining.
    Running,
    /// Tank empty, regardless of throttle.
    FuelOut,
}

impl EngineStatus {
    pub fn from_resources(fuel: f64, throttle: f64) -> Self {
        if fuel <= 0.0 {
            EngineStatus::FuelOut
        } else if throttle > 0.0 {
            EngineStatus::Running
        } else {
            EngineStatus::Idle
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Running => "RUNNING",
            Self::FuelOut => "FUEL OUT",
        }
    }
}

/// Camera viewpoint selected by the pilot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraMode {
    /// Behind and above the aircraft, looking at it.
    #[default]
    Chase,
    /// Just above the aircraft, looking ahead.
    Cockpit,
    /// User-driven orbit; the simulation does not place the camera.
    Free,
}

impl CameraMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chase => "CHASE",
            Self::Cockpit => "COCKPIT",
            Self::Free => "FREE",
        }
    }
}

/// Top-level simulation state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    /// No flight started yet; no aircraft exists.
    #[default]
    Stopped,
    Running,
    /// Ticks are suspended; nothing advances.
    Paused,
}

/// Cosmetic sky condition for the HUD weather panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherCondition {
    #[default]
    Clear,
    Scattered,
    Overcast,
    Haze,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 4] = [
        WeatherCondition::Clear,
        WeatherCondition::Scattered,
        WeatherCondition::Overcast,
        WeatherCondition::Haze,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Scattered => "Scattered",
            Self::Overcast => "Overcast",
            Self::Haze => "Haze",
        }
    }
}
