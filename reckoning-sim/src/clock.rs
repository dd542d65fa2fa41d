//! In-game clock: hour/day advancement and time-of-day phases.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    DAWN_START_HOUR, DAY_START_HOUR, DUSK_START_HOUR, HOURS_PER_DAY, NIGHT_START_HOUR,
    REAL_SECONDS_PER_GAME_HOUR,
};
use crate::numbers::floor_f32_to_i32;

/// Coarse time-of-day bucket derived from the continuous in-game hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimePhase {
    Dawn,
    #[default]
    Day,
    Dusk,
    Night,
}

impl TimePhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dawn => "dawn",
            Self::Day => "day",
            Self::Dusk => "dusk",
            Self::Night => "night",
        }
    }
}

impl fmt::Display for TimePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimePhase {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dawn" => Ok(Self::Dawn),
            "day" => Ok(Self::Day),
            "dusk" => Ok(Self::Dusk),
            "night" => Ok(Self::Night),
            _ => Err(()),
        }
    }
}

/// Phase for a given hour: dawn `[5,7)`, day `[7,18)`, dusk `[18,20)`,
/// night otherwise.
#[must_use]
pub fn phase_of_hour(hour: f32) -> TimePhase {
    if (DAWN_START_HOUR..DAY_START_HOUR).contains(&hour) {
        TimePhase::Dawn
    } else if (DAY_START_HOUR..DUSK_START_HOUR).contains(&hour) {
        TimePhase::Day
    } else if (DUSK_START_HOUR..NIGHT_START_HOUR).contains(&hour) {
        TimePhase::Dusk
    } else {
        TimePhase::Night
    }
}

/// Clock fields produced by advancing one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockAdvance {
    pub hour: f32,
    pub day_count: u32,
    pub phase: TimePhase,
}

/// Advance the in-game clock by `delta_secs` real seconds.
///
/// One game hour passes every 60 real seconds. Wrapping past 24 increments
/// the day exactly once per step; frame deltas are small enough that at most
/// one boundary is crossed.
#[must_use]
pub fn advance_clock(hour: f32, day_count: u32, delta_secs: f32) -> ClockAdvance {
    let mut hour = hour + delta_secs / REAL_SECONDS_PER_GAME_HOUR;
    let mut day_count = day_count;
    if hour >= HOURS_PER_DAY {
        hour -= HOURS_PER_DAY;
        day_count = day_count.saturating_add(1);
    }
    ClockAdvance {
        hour,
        day_count,
        phase: phase_of_hour(hour),
    }
}

/// Render an hour as a `HH:MM` clock string for HUD consumers.
#[must_use]
pub fn format_clock(hour: f32) -> String {
    let h = floor_f32_to_i32(hour);
    let m = floor_f32_to_i32((hour - hour.floor()) * 60.0);
    format!("{h:02}:{m:02}")
}
