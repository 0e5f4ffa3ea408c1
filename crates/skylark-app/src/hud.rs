//! Text HUD. Stands in for the presentation layer in a headless run.

use tracing::info;

use skylark_core::enums::CameraMode;
use skylark_core::state::{FrameSnapshot, InstrumentSnapshot};

use crate::sink::SnapshotSink;

/// One HUD line.
pub fn format_hud(hud: &InstrumentSnapshot, camera_mode: CameraMode) -> String {
    format!(
        "SPD {:>4} | ALT {:>5} | HDG {:03} | VS {:+5} | G {} | THR {:>3}% | FLP {:>2} | \
         FUEL {:>5.1} | TEMP {:>3} | ENG {} | GEAR {} | CAM {}",
        hud.speed,
        hud.altitude,
        hud.heading,
        hud.vertical_speed,
        hud.g_force,
        hud.throttle,
        hud.flaps,
        hud.fuel,
        hud.engine_temperature,
        hud.engine_status.as_str(),
        if hud.landing_gear_down { "DOWN" } else { "UP" },
        camera_mode.as_str(),
    )
}

/// Weather banner shown when a flight starts.
pub fn format_weather(hud: &InstrumentSnapshot) -> String {
    let weather = &hud.weather;
    format!(
        "{} | wind {:03}@{}kt | vis {}km | {}°C",
        weather.condition.as_str(),
        weather.wind_direction,
        weather.wind_speed,
        weather.visibility,
        weather.temperature,
    )
}

/// Logs a HUD line every `interval` ticks while a flight is running.
pub struct HudLogSink {
    interval: u64,
    last_logged: Option<u64>,
    weather_shown: bool,
}

impl HudLogSink {
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            last_logged: None,
            weather_shown: false,
        }
    }

    /// Whether a snapshot at `tick` gets a HUD line.
    fn due(&self, tick: u64) -> bool {
        tick % self.interval == 0 && self.last_logged != Some(tick)
    }
}

impl SnapshotSink for HudLogSink {
    fn emit(&mut self, snapshot: &FrameSnapshot) {
        let Some(hud) = &snapshot.instruments else {
            return;
        };
        if !self.weather_shown {
            info!(target: "hud", "{}", format_weather(hud));
            self.weather_shown = true;
        }
        // Paused ticks repeat the same tick number
        let tick = snapshot.time.tick;
        if self.due(tick) {
            info!(target: "hud", tick, "{}", format_hud(hud, snapshot.camera_mode));
            self.last_logged = Some(tick);
        }
    }
}
