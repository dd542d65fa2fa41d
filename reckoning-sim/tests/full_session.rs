//! End-to-end session runs covering the clock, phases, weather, and vitals.

use reckoning_sim::{SimulationSession, TimePhase, phase_of_hour};

/// Seed 42 from the morning start: sixteen game hours pass one real second
/// at a time, the day rolls over exactly once, and the phases appear in
/// day -> dusk -> night order.
#[test]
fn sixteen_game_hours_roll_the_day_once() {
    let mut session = SimulationSession::new(42);
    assert!((session.state().hour - 8.0).abs() < f32::EPSILON);
    assert_eq!(session.state().time_phase, TimePhase::Day);

    let mut phases = vec![session.state().time_phase];
    // 16 game hours = 960 real seconds; pad a few frames for float drift.
    for _ in 0..970 {
        session.step(1.0);
        let phase = session.state().time_phase;
        if phases.last() != Some(&phase) {
            phases.push(phase);
        }
    }

    assert_eq!(session.state().day_count, 2);
    assert!(session.state().hour < 0.5, "hour {}", session.state().hour);
    assert_eq!(phases, vec![TimePhase::Day, TimePhase::Dusk, TimePhase::Night]);

    // The initial 300 s forecast expired several times along the way.
    assert!(session.draws() >= 9);
    assert_eq!(session.draws() % 3, 0);
}

#[test]
fn phase_always_matches_hour() {
    let mut session = SimulationSession::new(7);
    for _ in 0..20_000 {
        session.step(0.25);
        let state = session.state();
        assert!((0.0..24.0).contains(&state.hour));
        assert_eq!(state.time_phase, phase_of_hour(state.hour));
    }
}

#[test]
fn day_count_never_decreases() {
    let mut session = SimulationSession::new(88);
    let mut last_day = session.state().day_count;
    for _ in 0..50_000 {
        session.step(2.0);
        assert!(session.state().day_count >= last_day);
        last_day = session.state().day_count;
    }
    assert!(last_day > 1);
}

#[test]
fn drained_stamina_recovers_and_caps() {
    let mut session = SimulationSession::new(300);
    session.state_mut().stamina = 0.0;
    let mut previous = 0.0_f32;
    for _ in 0..7000 {
        session.step(1.0 / 60.0);
        let stamina = session.state().stamina;
        assert!(stamina >= previous);
        assert!(stamina <= session.state().max_stamina);
        previous = stamina;
    }
    // 1% of max per second reaches the cap within 100 seconds of sim time.
    assert!((previous - session.state().max_stamina).abs() < f32::EPSILON);
}

#[test]
fn weather_fields_stay_valid_for_the_whole_session() {
    let mut session = SimulationSession::new(9999);
    for _ in 0..30_000 {
        session.step(1.0 / 24.0);
        let state = session.state();
        assert!(state.weather_duration > 0.0);
        assert!(state.weather_duration <= 300.0);
        assert!((0.0..=1.0).contains(&state.weather_intensity));
        // Enum is always a valid member by construction; spot-check the
        // serialized form used by consumers.
        assert!(!state.weather.as_str().is_empty());
    }
}
