//! Simulation snapshot shared with the renderer, HUD, and audio layers.

use serde::{Deserialize, Serialize};

use crate::biome::Biome;
use crate::clock::{TimePhase, phase_of_hour};
use crate::constants::{
    INITIAL_DAY_COUNT, INITIAL_EXP_TO_NEXT, INITIAL_HEALTH, INITIAL_HOUR, INITIAL_LEVEL,
    INITIAL_MAX_HEALTH, INITIAL_MAX_STAMINA, INITIAL_STAMINA, INITIAL_WEATHER_DURATION,
    INITIAL_WEATHER_INTENSITY,
};
use crate::weather::Weather;

/// One immutable snapshot of world and player state.
///
/// The frame driver replaces the whole value each step; consumers holding the
/// previous snapshot keep reading valid data while the next one is computed.
/// Serialized as camelCase to stay shape-compatible with the established
/// save format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationState {
    // Player vitals and progression. Only stamina is written by the core
    // loop; the rest belong to gameplay-event collaborators.
    pub health: f32,
    pub max_health: f32,
    pub stamina: f32,
    pub max_stamina: f32,
    pub gold: i64,
    pub score: i64,
    pub level: u32,
    pub experience: u32,
    pub exp_to_next: u32,

    // Time system.
    pub hour: f32,
    pub day_count: u32,
    pub time_phase: TimePhase,

    // Weather system.
    pub weather: Weather,
    pub weather_intensity: f32,
    pub weather_duration: f32,

    // World state, written by external world logic.
    pub current_biome: Biome,
    pub distance_traveled: f32,
    pub enemies_defeated: u32,
    pub bosses_defeated: u32,
    /// Session generation seed; immutable for the session's lifetime.
    pub seed: u64,

    // Cooperative gates checked at the start of each step.
    pub is_paused: bool,
    pub is_game_over: bool,
}

impl SimulationState {
    /// Fresh session state with the standard starting loadout, morning
    /// hour, and calm weather.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            health: INITIAL_HEALTH,
            max_health: INITIAL_MAX_HEALTH,
            stamina: INITIAL_STAMINA,
            max_stamina: INITIAL_MAX_STAMINA,
            gold: 0,
            score: 0,
            level: INITIAL_LEVEL,
            experience: 0,
            exp_to_next: INITIAL_EXP_TO_NEXT,
            hour: INITIAL_HOUR,
            day_count: INITIAL_DAY_COUNT,
            time_phase: phase_of_hour(INITIAL_HOUR),
            weather: Weather::Clear,
            weather_intensity: INITIAL_WEATHER_INTENSITY,
            weather_duration: INITIAL_WEATHER_DURATION,
            current_biome: Biome::Grassland,
            distance_traveled: 0.0,
            enemies_defeated: 0,
            bosses_defeated: 0,
            seed,
            is_paused: false,
            is_game_over: false,
        }
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(0)
    }
}
