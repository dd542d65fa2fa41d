//! Session wrapper binding the snapshot to its generator.

use crate::rng::SeededRandom;
use crate::state::SimulationState;
use crate::step::advance_state;

/// One simulation session: the current snapshot plus the generator that
/// lives for the session's whole duration.
///
/// The generator is created exactly once per session. Sessions never share
/// it and never reseed it mid-run; both would break replay determinism.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSession {
    state: SimulationState,
    rng: SeededRandom,
}

impl SimulationSession {
    /// Start a fresh session from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            state: SimulationState::new(seed),
            rng: SeededRandom::new(seed),
        }
    }

    /// Resume from a persisted snapshot.
    ///
    /// The persisted shape carries only the session seed, so the generator
    /// restarts from it; seed-derived procedural content reproduces exactly.
    #[must_use]
    pub fn from_state(state: SimulationState) -> Self {
        let rng = SeededRandom::new(state.seed);
        Self { state, rng }
    }

    /// Advance one frame, replacing the snapshot with the next one.
    pub fn step(&mut self, delta_secs: f32) -> &SimulationState {
        self.state = advance_state(&self.state, delta_secs, &mut self.rng);
        &self.state
    }

    /// Borrow the current snapshot.
    #[must_use]
    pub const fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Mutable access for gameplay-event collaborators (combat, pickups,
    /// pause menus) that own the non-simulation fields.
    pub const fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    /// Generator draws consumed so far. Only weather re-rolls draw, so this
    /// advances in multiples of three.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.rng.draws()
    }

    /// Consume the session, returning the final snapshot.
    #[must_use]
    pub fn into_state(self) -> SimulationState {
        self.state
    }
}
