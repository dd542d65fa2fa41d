//! Replay determinism across sessions, pauses, and save/restore.

use reckoning_sim::{SeededRandom, SimulationSession, SimulationState};

#[test]
fn generators_with_equal_seeds_emit_equal_sequences() {
    for seed in 0..100_u64 {
        let mut a = SeededRandom::new(seed);
        let mut b = SeededRandom::new(seed);
        for _ in 0..64 {
            assert!((a.next_unit() - b.next_unit()).abs() < f64::EPSILON);
        }
        let ai = a.next_int(1, 6);
        let bi = b.next_int(1, 6);
        assert_eq!(ai, bi);
        assert!((a.next_float(60.0, 300.0) - b.next_float(60.0, 300.0)).abs() < f64::EPSILON);
    }
}

#[test]
fn mixed_delta_replay_is_bit_identical() {
    let deltas: Vec<f32> = (0..50_000)
        .map(|frame| match frame % 4 {
            0 => 1.0 / 30.0,
            1 => 1.0 / 60.0,
            2 => 1.0 / 144.0,
            _ => 0.25,
        })
        .collect();

    let mut a = SimulationSession::new(90210);
    let mut b = SimulationSession::new(90210);
    for &delta in &deltas {
        a.step(delta);
        b.step(delta);
    }
    assert_eq!(a.state(), b.state());
    assert_eq!(a.draws(), b.draws());
    assert!(a.draws() >= 3, "expected at least one weather re-roll");
}

#[test]
fn different_seeds_diverge() {
    let mut a = SimulationSession::new(1);
    let mut b = SimulationSession::new(2);
    // Force an immediate re-roll on the first frame for both.
    a.state_mut().weather_duration = 0.0;
    b.state_mut().weather_duration = 0.0;
    a.step(1.0 / 60.0);
    b.step(1.0 / 60.0);
    let diverged = a.state().weather != b.state().weather
        || (a.state().weather_intensity - b.state().weather_intensity).abs() > f32::EPSILON
        || (a.state().weather_duration - b.state().weather_duration).abs() > f32::EPSILON;
    assert!(diverged, "seeds 1 and 2 should roll different weather");
}

#[test]
fn pause_and_game_over_freeze_state_without_draws() {
    for gate_game_over in [false, true] {
        let mut session = SimulationSession::new(31337);
        if gate_game_over {
            session.state_mut().is_game_over = true;
        } else {
            session.state_mut().is_paused = true;
        }
        // Expired duration would re-roll on the next active frame.
        session.state_mut().weather_duration = 0.0;
        let frozen = session.state().clone();

        for _ in 0..500 {
            session.step(0.5);
        }
        assert_eq!(session.state(), &frozen);
        assert_eq!(session.draws(), 0);
    }
}

#[test]
fn unpausing_resumes_where_the_pause_began() {
    let mut session = SimulationSession::new(64);
    session.step(10.0);
    session.state_mut().is_paused = true;
    session.step(10.0);
    session.step(10.0);
    session.state_mut().is_paused = false;
    session.step(10.0);

    // A session that never paused but saw the same active deltas matches.
    let mut control = SimulationSession::new(64);
    control.step(10.0);
    control.step(10.0);
    assert_eq!(session.state(), control.state());
    assert_eq!(session.draws(), control.draws());
}

#[test]
fn save_restore_preserves_snapshot_and_seed() {
    let mut session = SimulationSession::new(2026);
    session.state_mut().gold = 75;
    session.state_mut().score = 1200;
    for _ in 0..600 {
        session.step(1.0);
    }
    let saved_json =
        serde_json::to_string(session.state()).expect("serialize snapshot for persistence");
    let restored: SimulationState =
        serde_json::from_str(&saved_json).expect("deserialize persisted snapshot");
    assert_eq!(&restored, session.state());

    let resumed = SimulationSession::from_state(restored);
    assert_eq!(resumed.state().seed, 2026);
    assert_eq!(resumed.state().gold, 75);
    assert_eq!(resumed.state().score, 1200);
}
