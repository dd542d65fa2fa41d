//! Session seeds and per-layer sub-seed derivation.
//!
//! One integer seed parameterizes an entire session: the simulation's
//! generator plus every procedural content layer. External generators
//! (terrain noise, vegetation placement) each derive their own sub-seed from
//! the session seed at a fixed offset, so reloading a save with the same
//! seed regenerates identical content.

use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Procedural content layers that derive a sub-seed from the session seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentLayer {
    /// Base terrain height noise.
    TerrainBase,
    /// Large-scale terrain undulation.
    TerrainLargeScale,
    /// High-frequency terrain detail.
    TerrainDetail,
    /// Biome selection field.
    BiomeField,
    /// Moisture field for marsh placement.
    MoistureField,
    /// Tree instance placement.
    Trees,
    /// Rock instance placement.
    Rocks,
}

impl ContentLayer {
    /// Fixed offset added to the session seed for this layer. Offsets are
    /// part of the save-compatibility contract and must never change.
    #[must_use]
    pub const fn offset(self) -> u64 {
        match self {
            Self::TerrainBase => 0,
            Self::TerrainLargeScale => 100,
            Self::TerrainDetail => 300,
            Self::BiomeField => 500,
            Self::MoistureField => 600,
            Self::Trees => 1000,
            Self::Rocks => 2000,
        }
    }
}

/// Sub-seed for one procedural layer.
#[must_use]
pub const fn layer_seed(session_seed: u64, layer: ContentLayer) -> u64 {
    session_seed.wrapping_add(layer.offset())
}

/// Fresh session seed from the wall clock (milliseconds since the Unix
/// epoch), the default source when the player does not supply one.
#[must_use]
pub fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
        })
}

/// Error parsing a seed argument supplied by a host or CLI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedParseError {
    #[error("seed is empty")]
    Empty,
    #[error("seed `{0}` is not an unsigned integer")]
    NotAnInteger(String),
}

/// Parse a seed string: an unsigned integer literal, or the keyword `clock`
/// for a wall-clock seed.
///
/// # Errors
///
/// Returns [`SeedParseError`] when the input is empty or not an unsigned
/// integer.
pub fn parse_seed(input: &str) -> Result<u64, SeedParseError> {
    let token = input.trim();
    if token.is_empty() {
        return Err(SeedParseError::Empty);
    }
    if token.eq_ignore_ascii_case("clock") {
        return Ok(seed_from_clock());
    }
    token
        .parse::<u64>()
        .map_err(|_| SeedParseError::NotAnInteger(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_offsets_are_stable() {
        assert_eq!(layer_seed(42, ContentLayer::TerrainBase), 42);
        assert_eq!(layer_seed(42, ContentLayer::TerrainLargeScale), 142);
        assert_eq!(layer_seed(42, ContentLayer::TerrainDetail), 342);
        assert_eq!(layer_seed(42, ContentLayer::BiomeField), 542);
        assert_eq!(layer_seed(42, ContentLayer::MoistureField), 642);
        assert_eq!(layer_seed(42, ContentLayer::Trees), 1042);
        assert_eq!(layer_seed(42, ContentLayer::Rocks), 2042);
    }

    #[test]
    fn parse_accepts_integers_and_clock() {
        assert_eq!(parse_seed(" 1337 "), Ok(1337));
        assert_eq!(parse_seed("0"), Ok(0));
        assert!(parse_seed("clock").is_ok());
        assert!(parse_seed("CLOCK").is_ok());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_seed(""), Err(SeedParseError::Empty));
        assert_eq!(parse_seed("   "), Err(SeedParseError::Empty));
        assert_eq!(
            parse_seed("-5"),
            Err(SeedParseError::NotAnInteger("-5".to_string()))
        );
        assert_eq!(
            parse_seed("orange"),
            Err(SeedParseError::NotAnInteger("orange".to_string()))
        );
    }

    #[test]
    fn clock_seed_is_nonzero_after_epoch() {
        assert!(seed_from_clock() > 0);
    }
}
