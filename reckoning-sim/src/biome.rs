//! World biomes and the terrain-field classification table.
//!
//! The terrain and vegetation layers sample a noise field and classify it
//! through [`Biome::classify`]; the simulation itself only carries the
//! player's current biome through each step.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biome regions of the overworld (plus the underground caves).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Biome {
    #[default]
    Grassland,
    Forest,
    Marsh,
    Desert,
    Tundra,
    Caves,
}

/// Surface biomes in ascending field-threshold order. Caves are entered
/// through dungeon transitions, never classified from the surface field.
const SURFACE_ORDER: [Biome; 5] = [
    Biome::Grassland,
    Biome::Forest,
    Biome::Marsh,
    Biome::Desert,
    Biome::Tundra,
];

impl Biome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grassland => "grassland",
            Self::Forest => "forest",
            Self::Marsh => "marsh",
            Self::Desert => "desert",
            Self::Tundra => "tundra",
            Self::Caves => "caves",
        }
    }

    /// Noise-field threshold at which this biome takes over.
    #[must_use]
    pub const fn threshold(self) -> f32 {
        match self {
            Self::Grassland => 0.0,
            Self::Forest => 0.3,
            Self::Marsh => 0.5,
            Self::Desert => 0.7,
            Self::Tundra => 0.85,
            Self::Caves => 1.0,
        }
    }

    /// Base terrain tint as a packed RGB value.
    #[must_use]
    pub const fn color(self) -> u32 {
        match self {
            Self::Grassland => 0x003a_5a2a,
            Self::Forest => 0x002a_4a1a,
            Self::Marsh => 0x004a_6a3a,
            Self::Desert => 0x00ed_c9af,
            Self::Tundra => 0x00f5_f5f5,
            Self::Caves => 0x002f_2f2f,
        }
    }

    /// Relative vegetation instance density for the placement layer.
    #[must_use]
    pub const fn vegetation_density(self) -> f32 {
        match self {
            Self::Grassland => 1.0,
            Self::Forest => 1.5,
            Self::Marsh => 0.8,
            Self::Desert => 0.2,
            Self::Tundra => 0.3,
            Self::Caves => 0.0,
        }
    }

    /// Classify a surface noise-field sample into a biome: the highest
    /// threshold at or below the sample wins.
    #[must_use]
    pub fn classify(field: f32) -> Self {
        let mut current = Self::Grassland;
        for biome in SURFACE_ORDER {
            if field >= biome.threshold() {
                current = biome;
            }
        }
        current
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Biome {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grassland" => Ok(Self::Grassland),
            "forest" => Ok(Self::Forest),
            "marsh" => Ok(Self::Marsh),
            "desert" => Ok(Self::Desert),
            "tundra" => Ok(Self::Tundra),
            "caves" => Ok(Self::Caves),
            _ => Err(()),
        }
    }
}
