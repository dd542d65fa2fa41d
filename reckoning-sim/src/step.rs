//! Per-frame state transition composing the clock, weather, and vitals.

use crate::clock::advance_clock;
use crate::rng::SeededRandom;
use crate::state::SimulationState;
use crate::vitals::regenerate_stamina;
use crate::weather::tick_weather;

/// Treat non-finite or negative frame deltas as zero elapsed time.
const fn sanitize_delta(delta_secs: f32) -> f32 {
    if delta_secs.is_finite() && delta_secs > 0.0 {
        delta_secs
    } else {
        0.0
    }
}

/// Advance the simulation by one frame.
///
/// Paused or game-over states return unchanged and consume no generator
/// draws. Otherwise the clock, weather triple, and stamina are replaced in
/// a new snapshot and every other field carries over verbatim. The ordering
/// is fixed: weather decrements before any re-roll, so re-roll timing is a
/// pure function of the delta sequence and the seed.
#[must_use]
pub fn advance_state(
    prev: &SimulationState,
    delta_secs: f32,
    rng: &mut SeededRandom,
) -> SimulationState {
    if prev.is_paused || prev.is_game_over {
        return prev.clone();
    }

    let delta = sanitize_delta(delta_secs);
    let clock = advance_clock(prev.hour, prev.day_count, delta);
    let weather = tick_weather(
        prev.weather,
        prev.weather_intensity,
        prev.weather_duration,
        delta,
        rng,
    );
    let stamina = regenerate_stamina(prev.stamina, prev.max_stamina, delta);

    SimulationState {
        hour: clock.hour,
        day_count: clock.day_count,
        time_phase: clock.phase,
        weather: weather.weather,
        weather_intensity: weather.intensity,
        weather_duration: weather.duration,
        stamina,
        ..prev.clone()
    }
}
