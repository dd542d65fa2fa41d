//! Weather system: condition types and the duration-gated re-roll.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    WEATHER_BAND_CLEAR, WEATHER_BAND_FOG, WEATHER_BAND_RAIN, WEATHER_BAND_SNOW,
    WEATHER_DURATION_MAX, WEATHER_DURATION_MIN, WEATHER_INTENSITY_MAX, WEATHER_INTENSITY_MIN,
};
use crate::numbers::clamp_f64_to_f32;
use crate::rng::SeededRandom;

/// Weather conditions the environment layers render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    #[default]
    Clear,
    Rain,
    Fog,
    Snow,
    Storm,
}

impl Weather {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Rain => "rain",
            Self::Fog => "fog",
            Self::Snow => "snow",
            Self::Storm => "storm",
        }
    }

    /// Whether the external particle layer renders precipitation for this
    /// condition (rain sheets for rain/storm, flakes for snow).
    #[must_use]
    pub const fn has_particles(self) -> bool {
        matches!(self, Self::Rain | Self::Storm | Self::Snow)
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weather {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clear" => Ok(Self::Clear),
            "rain" => Ok(Self::Rain),
            "fog" => Ok(Self::Fog),
            "snow" => Ok(Self::Snow),
            "storm" => Ok(Self::Storm),
            _ => Err(()),
        }
    }
}

/// Weather fields produced by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherTick {
    pub weather: Weather,
    pub intensity: f32,
    pub duration: f32,
    /// True when this tick consumed draws to roll a new condition.
    pub rerolled: bool,
}

/// Map one uniform draw to a condition via the cumulative band table.
#[must_use]
pub fn weather_for_roll(r: f64) -> Weather {
    if r < WEATHER_BAND_CLEAR {
        Weather::Clear
    } else if r < WEATHER_BAND_RAIN {
        Weather::Rain
    } else if r < WEATHER_BAND_FOG {
        Weather::Fog
    } else if r < WEATHER_BAND_SNOW {
        Weather::Snow
    } else {
        Weather::Storm
    }
}

/// Tick the weather by `delta_secs`.
///
/// The remaining duration decreases first; while it stays positive the
/// condition and intensity are untouched and no draws are consumed. Once it
/// reaches zero the generator is asked for exactly three draws, in order:
/// condition band, intensity in `[0.3, 1.0)`, duration in `[60, 300)`.
#[must_use]
pub fn tick_weather(
    weather: Weather,
    intensity: f32,
    duration: f32,
    delta_secs: f32,
    rng: &mut SeededRandom,
) -> WeatherTick {
    let remaining = duration - delta_secs;
    if remaining > 0.0 {
        return WeatherTick {
            weather,
            intensity,
            duration: remaining,
            rerolled: false,
        };
    }

    let weather = weather_for_roll(rng.next_unit());
    let intensity = clamp_f64_to_f32(rng.next_float(WEATHER_INTENSITY_MIN, WEATHER_INTENSITY_MAX));
    let duration = clamp_f64_to_f32(rng.next_float(WEATHER_DURATION_MIN, WEATHER_DURATION_MAX));
    WeatherTick {
        weather,
        intensity,
        duration,
        rerolled: true,
    }
}
