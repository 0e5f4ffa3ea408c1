//! Fundamental geometric and simulation types.

use glam::{DQuat, DVec3, EulerRot};
use serde::{Deserialize, Serialize};

/// Aircraft orientation in radians.
///
/// World axes: y = up, z = forward at zero yaw; positive yaw swings the
/// nose toward +x. Nose-up is negative pitch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attitude {
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Attitude {
    pub fn new(pitch: f64, roll: f64, yaw: f64) -> Self {
        Self { pitch, roll, yaw }
    }

    /// Rotation applying pitch about X, then yaw about Y, then roll about Z
    /// (intrinsic XYZ).
    pub fn rotation(&self) -> DQuat {
        DQuat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, self.roll)
    }

    /// Unit vector along the aircraft's nose.
    pub fn forward(&self) -> DVec3 {
        self.rotation() * DVec3::Z
    }

    /// Yaw in degrees, normalized to [0, 360).
    pub fn heading_degrees(&self) -> f64 {
        (self.yaw.to_degrees() + 360.0).rem_euclid(360.0)
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
