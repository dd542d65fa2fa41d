//! Centralized tuning constants for the world-state simulation.
//!
//! These values define the deterministic math of the core loop. Keeping them
//! together ensures the simulation can only be retuned through reviewed code
//! changes, never through external assets.

// Time scale -----------------------------------------------------------------
/// One in-game hour elapses every 60 real seconds.
pub const REAL_SECONDS_PER_GAME_HOUR: f32 = 60.0;
pub const HOURS_PER_DAY: f32 = 24.0;

// Time-of-day phase boundaries (in-game hours) -------------------------------
pub(crate) const DAWN_START_HOUR: f32 = 5.0;
pub(crate) const DAY_START_HOUR: f32 = 7.0;
pub(crate) const DUSK_START_HOUR: f32 = 18.0;
pub(crate) const NIGHT_START_HOUR: f32 = 20.0;

// Weather re-roll tuning -----------------------------------------------------
// Cumulative probability bands for one uniform draw.
pub(crate) const WEATHER_BAND_CLEAR: f64 = 0.50;
pub(crate) const WEATHER_BAND_RAIN: f64 = 0.70;
pub(crate) const WEATHER_BAND_FOG: f64 = 0.85;
pub(crate) const WEATHER_BAND_SNOW: f64 = 0.95;
/// Rolled intensity range, half-open.
pub const WEATHER_INTENSITY_MIN: f64 = 0.3;
pub const WEATHER_INTENSITY_MAX: f64 = 1.0;
/// Rolled duration range in real seconds, half-open.
pub const WEATHER_DURATION_MIN: f64 = 60.0;
pub const WEATHER_DURATION_MAX: f64 = 300.0;

// Vitals ---------------------------------------------------------------------
/// Stamina regenerates at this fraction of maximum per real second.
pub const STAMINA_REGEN_PER_SECOND: f32 = 0.01;

// Fresh-session starting values ----------------------------------------------
pub(crate) const INITIAL_HEALTH: f32 = 100.0;
pub(crate) const INITIAL_MAX_HEALTH: f32 = 100.0;
pub(crate) const INITIAL_STAMINA: f32 = 100.0;
pub(crate) const INITIAL_MAX_STAMINA: f32 = 100.0;
pub(crate) const INITIAL_LEVEL: u32 = 1;
pub(crate) const INITIAL_EXP_TO_NEXT: u32 = 100;
pub(crate) const INITIAL_HOUR: f32 = 8.0;
pub(crate) const INITIAL_DAY_COUNT: u32 = 1;
pub(crate) const INITIAL_WEATHER_INTENSITY: f32 = 0.5;
pub(crate) const INITIAL_WEATHER_DURATION: f32 = 300.0;
