//! Simulation constants and tuning parameters.
//!
//! Dynamics values are per tick, in world units. The HUD scales them to
//! display units.

use glam::DVec3;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Throttle & flaps ---

/// Throttle change per tick while a throttle control is held (percent).
pub const THROTTLE_STEP: f64 = 2.0;

/// Full throttle (percent).
pub const THROTTLE_MAX: f64 = 100.0;

/// Flap change per tick while a flap control is held (degrees).
pub const FLAPS_STEP: f64 = 10.0;

/// Full flap deflection (degrees).
pub const FLAPS_MAX: f64 = 40.0;

// --- Attitude ---

/// Pitch change per tick (radians).
pub const PITCH_RATE: f64 = 0.02;

/// Pitch limit either side of level (radians, 45°).
pub const PITCH_LIMIT: f64 = std::f64::consts::FRAC_PI_4;

/// Roll change per tick (radians).
pub const ROLL_RATE: f64 = 0.03;

/// Roll limit either side of level (radians, 30°).
pub const ROLL_LIMIT: f64 = std::f64::consts::FRAC_PI_6;

/// Yaw injected per tick while a roll control is held (radians).
pub const YAW_COUPLING_RATE: f64 = 0.01;

// --- Forces ---

/// Thrust at full throttle (world units / tick²).
pub const MAX_THRUST: f64 = 0.5;

/// Lift per unit of speed at 90° nose-up with flaps retracted.
pub const LIFT_COEFFICIENT: f64 = 0.1;

/// Lift gain per degree of flap: lift *= 1 + flaps / FLAP_LIFT_DIVISOR.
pub const FLAP_LIFT_DIVISOR: f64 = 100.0;

/// Downward velocity change per tick.
pub const GRAVITY: f64 = 0.01;

/// Velocity retained per tick with flaps retracted.
pub const DRAG_FACTOR: f64 = 0.98;

/// Drag gain per degree of flap: drag divisor = 1 + flaps / FLAP_DRAG_DIVISOR.
pub const FLAP_DRAG_DIVISOR: f64 = 200.0;

/// Height of the ground plane.
pub const GROUND_LEVEL: f64 = 0.0;

// --- Fuel & engine ---

/// Full tank (percent).
pub const FUEL_MAX: f64 = 100.0;

/// Fuel burned per tick at full throttle (percent).
pub const FUEL_BURN_RATE: f64 = 0.02;

/// Engine temperature target with the throttle closed (°C).
pub const ENGINE_TEMP_IDLE: f64 = 75.0;

/// Extra target temperature at full throttle (°C).
pub const ENGINE_TEMP_RANGE: f64 = 50.0;

/// Fraction of the gap to the target temperature closed each tick.
pub const ENGINE_TEMP_SMOOTHING: f64 = 0.1;

// --- HUD scaling ---

/// World units/tick to displayed knots.
pub const SPEED_DISPLAY_SCALE: f64 = 100.0;

/// World units to displayed feet.
pub const ALTITUDE_DISPLAY_SCALE: f64 = 10.0;

/// Height change per tick to displayed feet per minute.
pub const VERTICAL_SPEED_SCALE: f64 = 600.0;

/// Displayed vertical speed per additional g.
pub const G_FORCE_DIVISOR: f64 = 100.0;

// --- Camera rigs ---

/// Cockpit eye point relative to the aircraft.
pub const COCKPIT_EYE_OFFSET: DVec3 = DVec3::new(0.0, 2.0, 1.0);

/// Cockpit look target relative to the aircraft (world +Z, not heading).
pub const COCKPIT_LOOK_OFFSET: DVec3 = DVec3::new(0.0, 0.0, 10.0);

/// Chase eye point relative to the aircraft.
pub const CHASE_EYE_OFFSET: DVec3 = DVec3::new(0.0, 5.0, -15.0);

// --- Weather ---

/// Upper bound for rolled surface wind (knots).
pub const WEATHER_MAX_WIND_KTS: u32 = 25;

/// Visibility range rolled for the weather panel (km).
pub const WEATHER_VISIBILITY_KM: (u32, u32) = (5, 30);

/// Outside air temperature range rolled for the weather panel (°C).
pub const WEATHER_TEMPERATURE_C: (i32, i32) = (-5, 32);
