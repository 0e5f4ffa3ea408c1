//! Cosmetic weather for the HUD.
//!
//! Rolled once when a flight starts from the engine's seeded RNG. Dynamics
//! never read it.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skylark_core::constants::*;
use skylark_core::enums::WeatherCondition;
use skylark_core::state::WeatherReport;

/// Roll a weather report. Calm skies favour low wind.
pub fn roll_weather(rng: &mut ChaCha8Rng) -> WeatherReport {
    let condition = WeatherCondition::ALL[rng.gen_range(0..WeatherCondition::ALL.len())];

    let max_wind = match condition {
        WeatherCondition::Clear | WeatherCondition::Haze => WEATHER_MAX_WIND_KTS / 2,
        WeatherCondition::Scattered | WeatherCondition::Overcast => WEATHER_MAX_WIND_KTS,
    };
    let (min_visibility, max_visibility) = WEATHER_VISIBILITY_KM;
    let visibility = match condition {
        WeatherCondition::Haze => min_visibility,
        _ => rng.gen_range(min_visibility..=max_visibility),
    };
    let (min_temperature, max_temperature) = WEATHER_TEMPERATURE_C;

    WeatherReport {
        condition,
        // Reported in tens of degrees, like ATIS
        wind_direction: rng.gen_range(0..36u16) * 10,
        wind_speed: rng.gen_range(0..=max_wind),
        visibility,
        temperature: rng.gen_range(min_temperature..=max_temperature),
    }
}
