//! Rivers of Reckoning world-state simulation.
//!
//! Platform-agnostic deterministic core driving the game's in-game clock,
//! weather, and player vitals. A host frame driver calls the step once per
//! rendered frame with the elapsed delta; rendering, terrain, audio, and UI
//! layers read the resulting immutable [`SimulationState`] snapshot. Every
//! random decision flows through one seeded generator per session, so a
//! session replays bit-for-bit from its seed.

pub mod biome;
pub mod clock;
pub mod constants;
pub mod numbers;
pub mod rng;
pub mod seed;
pub mod session;
pub mod state;
pub mod step;
pub mod vitals;
pub mod weather;

// Re-export commonly used types
pub use biome::Biome;
pub use clock::{ClockAdvance, TimePhase, advance_clock, format_clock, phase_of_hour};
pub use rng::SeededRandom;
pub use seed::{ContentLayer, SeedParseError, layer_seed, parse_seed, seed_from_clock};
pub use session::SimulationSession;
pub use state::SimulationState;
pub use step::advance_state;
pub use vitals::regenerate_stamina;
pub use weather::{Weather, WeatherTick, tick_weather, weather_for_roll};
