//! Frame driver running one seed and validating simulation invariants.

use serde::Serialize;

use reckoning_sim::constants::WEATHER_DURATION_MAX;
use reckoning_sim::{SimulationSession, TimePhase, Weather, format_clock, phase_of_hour};

/// Frame plan shared by every seed in a sweep.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RunPlan {
    pub frames: u32,
    pub delta: f32,
}

/// Frames spent in each weather condition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WeatherHistogram {
    pub clear: u64,
    pub rain: u64,
    pub fog: u64,
    pub snow: u64,
    pub storm: u64,
}

impl WeatherHistogram {
    fn record(&mut self, weather: Weather) {
        match weather {
            Weather::Clear => self.clear += 1,
            Weather::Rain => self.rain += 1,
            Weather::Fog => self.fog += 1,
            Weather::Snow => self.snow += 1,
            Weather::Storm => self.storm += 1,
        }
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.clear + self.rain + self.fog + self.snow + self.storm
    }
}

/// Aggregated result of driving one seed through the plan.
#[derive(Debug, Clone, Serialize)]
pub struct SeedReport {
    pub seed: u64,
    pub final_day: u32,
    pub final_hour: f32,
    pub final_clock: String,
    pub final_phase: TimePhase,
    pub final_weather: Weather,
    pub weather_frames: WeatherHistogram,
    pub rerolls: u64,
    pub draws: u64,
    pub replay_identical: bool,
    pub violations: Vec<String>,
}

impl SeedReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.replay_identical && self.violations.is_empty()
    }
}

/// Drive one seed through the plan twice: once gathering statistics and
/// invariant violations, once to confirm the replay is bit-identical.
#[must_use]
pub fn run_seed(seed: u64, plan: &RunPlan) -> SeedReport {
    let (session, violations, histogram) = drive(seed, plan);
    let (replay, _, _) = drive(seed, plan);
    let replay_identical =
        session.state() == replay.state() && session.draws() == replay.draws();

    let state = session.state();
    SeedReport {
        seed,
        final_day: state.day_count,
        final_hour: state.hour,
        final_clock: format_clock(state.hour),
        final_phase: state.time_phase,
        final_weather: state.weather,
        weather_frames: histogram,
        rerolls: session.draws() / 3,
        draws: session.draws(),
        replay_identical,
        violations,
    }
}

fn drive(seed: u64, plan: &RunPlan) -> (SimulationSession, Vec<String>, WeatherHistogram) {
    let mut session = SimulationSession::new(seed);
    let mut violations = Vec::new();
    let mut histogram = WeatherHistogram::default();
    let mut last_day = session.state().day_count;

    for frame in 0..plan.frames {
        session.step(plan.delta);
        let state = session.state();
        histogram.record(state.weather);

        if !(0.0..24.0).contains(&state.hour) {
            violations.push(format!("frame {frame}: hour {} out of [0,24)", state.hour));
        }
        if state.time_phase != phase_of_hour(state.hour) {
            violations.push(format!(
                "frame {frame}: phase {} inconsistent with hour {}",
                state.time_phase, state.hour
            ));
        }
        if state.day_count < last_day {
            violations.push(format!(
                "frame {frame}: day count fell from {last_day} to {}",
                state.day_count
            ));
        }
        if !(0.0..=state.max_stamina).contains(&state.stamina) {
            violations.push(format!(
                "frame {frame}: stamina {} outside [0,{}]",
                state.stamina, state.max_stamina
            ));
        }
        if !(0.0..=1.0).contains(&state.weather_intensity) {
            violations.push(format!(
                "frame {frame}: weather intensity {} outside [0,1]",
                state.weather_intensity
            ));
        }
        let duration = f64::from(state.weather_duration);
        if duration <= 0.0 || duration > WEATHER_DURATION_MAX {
            violations.push(format!(
                "frame {frame}: weather duration {} outside (0,{WEATHER_DURATION_MAX}]",
                state.weather_duration
            ));
        }
        last_day = state.day_count;
    }

    log::debug!(
        "seed {seed}: finished day {} at {} with {} draws",
        session.state().day_count,
        format_clock(session.state().hour),
        session.draws()
    );
    (session, violations, histogram)
}
