//! Named interaction-matrix presets
//!
//! Each preset is a hand-authored 5x5 table (rows = target type, columns =
//! source type) with every coefficient in `[-1, 1]`. `Random` draws a fresh
//! table instead. `Snakes` is the only preset that also retunes the global
//! parameters.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::SimError;
use crate::simulation::matrix::InteractionMatrix;
use crate::simulation::params::ParamOverrides;
use crate::simulation::states::PARTICLE_TYPES;

const GALAXIES: [[f64; PARTICLE_TYPES]; PARTICLE_TYPES] = [
    [1.0, -0.2, -0.1, 0.0, 0.1],
    [-0.2, 1.0, -0.2, -0.1, 0.0],
    [-0.1, -0.2, 1.0, -0.2, -0.1],
    [0.0, -0.1, -0.2, 1.0, -0.2],
    [0.1, 0.0, -0.1, -0.2, 1.0],
];

const BUBBLES: [[f64; PARTICLE_TYPES]; PARTICLE_TYPES] = [
    [-0.5, 1.0, 0.0, -1.0, 0.0],
    [1.0, -0.5, 1.0, 0.0, -1.0],
    [0.0, 1.0, -0.5, 1.0, 0.0],
    [-1.0, 0.0, 1.0, -0.5, 1.0],
    [0.0, -1.0, 0.0, 1.0, -0.5],
];

const SNAKES: [[f64; PARTICLE_TYPES]; PARTICLE_TYPES] = [
    [0.0, 1.0, -0.8, -0.8, 0.8],
    [-0.8, 0.0, 1.0, -0.8, -0.8],
    [-0.8, -0.8, 0.0, 1.0, -0.8],
    [0.8, -0.8, -0.8, 0.0, 1.0],
    [1.0, 0.8, -0.8, -0.8, 0.0],
];

const FLOCKING: [[f64; PARTICLE_TYPES]; PARTICLE_TYPES] = [
    [1.0, 0.5, 0.5, 0.5, 0.5],
    [0.5, 1.0, 0.5, 0.5, 0.5],
    [0.5, 0.5, 1.0, 0.5, 0.5],
    [0.5, 0.5, 0.5, 1.0, 0.5],
    [0.5, 0.5, 0.5, 0.5, 1.0],
];

const SNAKES_OVERRIDES: ParamOverrides = ParamOverrides {
    force_factor: Some(2.0),
    friction: Some(0.95),
    interaction_range: Some(100.0),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Random,
    Galaxies,
    Bubbles,
    Snakes,
    Flocking,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Random,
        Preset::Galaxies,
        Preset::Bubbles,
        Preset::Snakes,
        Preset::Flocking,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Random => "random",
            Preset::Galaxies => "galaxies",
            Preset::Bubbles => "bubbles",
            Preset::Snakes => "snakes",
            Preset::Flocking => "flocking",
        }
    }

    /// Matrix for this preset, drawing from `rng` only for `Random`
    pub fn matrix<R: Rng>(self, rng: &mut R) -> InteractionMatrix {
        match self {
            Preset::Random => InteractionMatrix::random(PARTICLE_TYPES, rng),
            Preset::Galaxies => InteractionMatrix::from_array(&GALAXIES),
            Preset::Bubbles => InteractionMatrix::from_array(&BUBBLES),
            Preset::Snakes => InteractionMatrix::from_array(&SNAKES),
            Preset::Flocking => InteractionMatrix::from_array(&FLOCKING),
        }
    }

    /// Global-parameter overrides applied together with the matrix
    pub fn overrides(self) -> Option<ParamOverrides> {
        match self {
            Preset::Snakes => Some(SNAKES_OVERRIDES),
            _ => None,
        }
    }

    /// Resolve a preset by name
    pub fn apply<R: Rng>(
        name: &str,
        rng: &mut R,
    ) -> Result<(InteractionMatrix, Option<ParamOverrides>), SimError> {
        let preset: Preset = name.parse()?;
        Ok((preset.matrix(rng), preset.overrides()))
    }
}

impl FromStr for Preset {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SimError::UnknownPreset(s.to_string()))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
