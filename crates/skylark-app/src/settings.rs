//! TOML settings file.
//!
//! Every section is optional. A minimal file might look like:
//!
//! ```toml
//! seed = 7
//! hud_interval_ticks = 30
//!
//! [flight_model]
//! preset = "baseline"
//! gravity = true
//!
//! [start]
//! position = [0.0, 20.0, 0.0]
//! throttle = 60.0
//!
//! [keys]
//! k = "PitchUp"
//! space = "TogglePause"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use skylark_core::config::{FlightModelConfig, StartConditions};
use skylark_core::constants::*;
use skylark_core::controls::Control;
use skylark_sim::engine::SimConfig;

use crate::keymap::{KeyAction, KeyBindings};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("Key `{key}` is bound to an unknown control")]
    UnknownControl { key: String },
}

/// Named starting points for `[flight_model]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightModelPreset {
    Baseline,
    Aerodynamic,
}

impl FlightModelPreset {
    pub fn config(self) -> FlightModelConfig {
        match self {
            FlightModelPreset::Baseline => FlightModelConfig::baseline(),
            FlightModelPreset::Aerodynamic => FlightModelConfig::aerodynamic(),
        }
    }
}

/// `[flight_model]`: a preset plus individual effect overrides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FlightModelSettings {
    /// Defaults to aerodynamic.
    pub preset: Option<FlightModelPreset>,
    pub flaps: Option<bool>,
    pub gravity: Option<bool>,
    pub lift: Option<bool>,
    pub flap_drag: Option<bool>,
    pub fuel_consumption: Option<bool>,
    pub engine_temperature: Option<bool>,
    pub fuel_starvation: Option<bool>,
}

impl FlightModelSettings {
    pub fn from_preset(preset: FlightModelPreset) -> Self {
        Self {
            preset: Some(preset),
            ..Default::default()
        }
    }

    pub fn resolve(&self) -> FlightModelConfig {
        let base = self
            .preset
            .unwrap_or(FlightModelPreset::Aerodynamic)
            .config();
        FlightModelConfig {
            flaps: self.flaps.unwrap_or(base.flaps),
            gravity: self.gravity.unwrap_or(base.gravity),
            lift: self.lift.unwrap_or(base.lift),
            flap_drag: self.flap_drag.unwrap_or(base.flap_drag),
            fuel_consumption: self.fuel_consumption.unwrap_or(base.fuel_consumption),
            engine_temperature: self.engine_temperature.unwrap_or(base.engine_temperature),
            fuel_starvation: self.fuel_starvation.unwrap_or(base.fuel_starvation),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub seed: u64,
    pub flight_model: FlightModelSettings,
    pub start: StartConditions,
    /// Overrides layered on top of the default bindings.
    pub keys: BTreeMap<String, KeyAction>,
    /// Log a HUD line every this many ticks.
    pub hud_interval_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: SimConfig::default().seed,
            flight_model: FlightModelSettings::default(),
            start: StartConditions::default(),
            keys: BTreeMap::new(),
            hud_interval_ticks: TICK_RATE as u64,
        }
    }
}

impl Settings {
    /// Read, parse and validate a settings file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let toml_str = std::fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&toml_str)?;
        info!(path = %path.display(), "read settings");
        Ok(settings)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(toml_str)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.hud_interval_ticks == 0 {
            return Err(invalid("hud_interval_ticks", "must be at least 1"));
        }

        let start = &self.start;
        let vectors = [
            ("start.position", start.position),
            ("start.velocity", start.velocity),
        ];
        for (field, vector) in vectors {
            if !vector.is_finite() {
                return Err(invalid(field, "must be finite"));
            }
        }
        if start.position.y < GROUND_LEVEL {
            return Err(invalid("start.position", "must not be below the ground"));
        }

        let attitude = &start.attitude;
        check_range("start.attitude.pitch", attitude.pitch, -PITCH_LIMIT, PITCH_LIMIT)?;
        check_range("start.attitude.roll", attitude.roll, -ROLL_LIMIT, ROLL_LIMIT)?;
        if !attitude.yaw.is_finite() {
            return Err(invalid("start.attitude.yaw", "must be finite"));
        }

        check_range("start.throttle", start.throttle, 0.0, THROTTLE_MAX)?;
        check_range("start.flaps", start.flaps, 0.0, FLAPS_MAX)?;
        check_range("start.fuel", start.fuel, 0.0, FUEL_MAX)?;
        if !start.engine_temperature.is_finite() {
            return Err(invalid("start.engine_temperature", "must be finite"));
        }

        for (key, action) in &self.keys {
            if *action == KeyAction::Control(Control::Unknown) {
                return Err(SettingsError::UnknownControl { key: key.clone() });
            }
        }
        Ok(())
    }

    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            seed: self.seed,
            flight_model: self.flight_model.resolve(),
            start: self.start,
        }
    }

    /// Default bindings with this file's `[keys]` applied.
    pub fn key_bindings(&self) -> KeyBindings {
        let mut bindings = KeyBindings::default();
        for (key, action) in &self.keys {
            bindings.bind(key.clone(), *action);
        }
        bindings
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> SettingsError {
    SettingsError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), SettingsError> {
    // NaN fails `contains`
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} is outside [{min}, {max}]")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings.seed, 42);
        assert_eq!(settings.hud_interval_ticks, 60);
        assert_eq!(settings.start, StartConditions::default());
        assert_eq!(settings.sim_config().flight_model, FlightModelConfig::aerodynamic());
        assert_eq!(settings.key_bindings(), KeyBindings::default());
    }

    #[test]
    fn test_full_file() {
        let settings = Settings::from_toml_str(
            r#"
            seed = 7
            hud_interval_ticks = 30

            [flight_model]
            preset = "baseline"
            gravity = true

            [start]
            position = [0.0, 20.0, 0.0]
            throttle = 60.0
            landing_gear_down = false

            [keys]
            k = "PitchUp"
            space = "TogglePause"
            "#,
        )
        .unwrap();

        assert_eq!(settings.seed, 7);
        assert_eq!(settings.hud_interval_ticks, 30);

        let config = settings.sim_config();
        assert_eq!(
            config.flight_model,
            FlightModelConfig {
                gravity: true,
                ..FlightModelConfig::baseline()
            }
        );
        assert_eq!(config.start.position.y, 20.0);
        assert_eq!(config.start.throttle, 60.0);
        assert_eq!(config.start.fuel, FUEL_MAX);
        assert!(!config.start.landing_gear_down);

        let keys = settings.key_bindings();
        assert_eq!(keys.action("k"), Some(KeyAction::Control(Control::PitchUp)));
        assert!(keys.on_press("space").is_some());
        assert!(keys.on_press("w").is_some(), "defaults survive overrides");
    }

    #[test]
    fn test_override_without_preset_starts_aerodynamic() {
        let settings = Settings::from_toml_str("[flight_model]\nlift = false\n").unwrap();
        let model = settings.sim_config().flight_model;
        assert!(!model.lift);
        assert!(model.gravity);
    }

    #[test]
    fn test_zero_hud_interval_rejected() {
        let err = Settings::from_toml_str("hud_interval_ticks = 0").unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "hud_interval_ticks",
                ..
            }
        ));
    }

    #[test]
    fn test_out_of_range_start_rejected() {
        let cases = [
            ("[start]\nthrottle = 150.0", "start.throttle"),
            ("[start]\nflaps = -1.0", "start.flaps"),
            ("[start]\nfuel = 101.0", "start.fuel"),
            ("[start]\nposition = [0.0, -1.0, 0.0]", "start.position"),
            ("[start.attitude]\npitch = 1.0", "start.attitude.pitch"),
            ("[start.attitude]\nroll = -0.6", "start.attitude.roll"),
        ];
        for (toml_str, expected) in cases {
            match Settings::from_toml_str(toml_str) {
                Err(SettingsError::Invalid { field, .. }) => assert_eq!(field, expected),
                other => panic!("{toml_str}: expected Invalid, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_unknown_control_binding_rejected() {
        let err = Settings::from_toml_str("[keys]\nx = \"Afterburner\"").unwrap_err();
        assert!(matches!(err, SettingsError::UnknownControl { key } if key == "x"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = Settings::from_toml_str("seed = ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load(Path::new("/nonexistent/skylark.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
