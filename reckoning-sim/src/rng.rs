//! Deterministic pseudo-random generator owned by a simulation session.

use crate::numbers::{floor_f64_to_i32, i64_to_f64, u64_to_f64};

const LCG_MULTIPLIER: u64 = 9301;
const LCG_INCREMENT: u64 = 49297;
const LCG_MODULUS: u64 = 233_280;

/// Linear congruential generator with the classic 9301/49297/233280
/// parameters.
///
/// Every procedural draw in a session flows through one instance, so two
/// sessions constructed with the same seed and driven with the same call
/// sequence replay bit-for-bit. The generator also counts its draws, which
/// lets tests assert that gated steps (pause, game over) consume nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    seed: u64,
    draws: u64,
}

impl SeededRandom {
    /// Construct a generator from a session seed.
    ///
    /// The seed is reduced modulo the recurrence modulus up front; the
    /// congruence is stable under this reduction, so arbitrary 64-bit seeds
    /// produce the same sequence as their reduced value without overflow.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            seed: seed % LCG_MODULUS,
            draws: 0,
        }
    }

    /// Next uniform draw in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        self.seed = (self.seed * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.draws = self.draws.saturating_add(1);
        u64_to_f64(self.seed) / u64_to_f64(LCG_MODULUS)
    }

    /// Uniform integer in `[min, max]` inclusive.
    pub fn next_int(&mut self, min: i32, max: i32) -> i32 {
        let span = i64::from(max) - i64::from(min) + 1;
        floor_f64_to_i32(f64::from(min) + self.next_unit() * i64_to_f64(span))
    }

    /// Uniform real in `[min, max)`.
    pub fn next_float(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_unit() * (max - min)
    }

    /// Number of draws performed against this generator.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recurrence_matches_reference_values() {
        // seed 42: 42*9301+49297 = 439939 -> 206659; then 206659 -> 190736.
        let mut rng = SeededRandom::new(42);
        assert!((rng.next_unit() - 206_659.0 / 233_280.0).abs() < f64::EPSILON);
        assert!((rng.next_unit() - 190_736.0 / 233_280.0).abs() < f64::EPSILON);
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeededRandom::new(1337);
        let mut b = SeededRandom::new(1337);
        for _ in 0..256 {
            assert!((a.next_unit() - b.next_unit()).abs() < f64::EPSILON);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn oversized_seed_reduces_to_congruent_sequence() {
        let mut big = SeededRandom::new(LCG_MODULUS * 7 + 42);
        let mut small = SeededRandom::new(42);
        for _ in 0..16 {
            assert!((big.next_unit() - small.next_unit()).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn next_int_stays_inclusive() {
        let mut rng = SeededRandom::new(7);
        for _ in 0..1000 {
            let v = rng.next_int(-3, 3);
            assert!((-3..=3).contains(&v));
        }
        // Degenerate single-value range.
        assert_eq!(rng.next_int(5, 5), 5);
    }

    #[test]
    fn next_float_stays_half_open() {
        let mut rng = SeededRandom::new(99);
        for _ in 0..1000 {
            let v = rng.next_float(0.3, 1.0);
            assert!((0.3..1.0).contains(&v));
        }
    }

    #[test]
    fn unit_draws_cover_the_unit_interval() {
        let mut rng = SeededRandom::new(2024);
        for _ in 0..1000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }
}
