//! Core state types for the particle-life simulation.
//!
//! - `Particle` holds position, velocity and a type tag (`NVec2` positions)
//! - `ParticleSystem` is the whole population plus a step counter
//!
//! The population is only ever replaced wholesale (see
//! [`ParticleSystem::initialize`]), never grown or shrunk particle by particle.

use nalgebra::Vector2;
use rand::Rng;

use crate::error::{SimError, SimResult};

pub type NVec2 = Vector2<f64>;

/// Number of distinct particle types. Presets are authored for exactly this many.
pub const PARTICLE_TYPES: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub kind: usize, // type tag, index into the interaction matrix
}

impl Particle {
    /// Particle at rest
    pub fn new(x: NVec2, kind: usize) -> Self {
        Self {
            x,
            v: NVec2::zeros(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    pub particles: Vec<Particle>, // the population
    pub steps: u64, // steps taken since the last (re-)initialization
}

impl ParticleSystem {
    pub fn new(particles: Vec<Particle>) -> Self {
        Self { particles, steps: 0 }
    }

    /// Replace the population with `count` particles at rest, spread uniformly
    /// over `[0, width) x [0, height)` with types uniform in `[0, types)`
    pub fn initialize<R: Rng>(
        &mut self,
        rng: &mut R,
        count: usize,
        types: usize,
        width: f64,
        height: f64,
    ) {
        assert!(types > 0, "at least one particle type is required");

        let particles = (0..count)
            .map(|_| {
                let x = NVec2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height));
                Particle::new(x, rng.gen_range(0..types))
            })
            .collect();

        // Swap in the new collection in one move
        self.particles = particles;
        self.steps = 0;
    }

    /// Every particle type must index into a `types x types` matrix
    pub fn validate_types(&self, types: usize) -> SimResult<()> {
        match self.particles.iter().find(|p| p.kind >= types) {
            Some(p) => Err(SimError::TypeOutOfRange { index: p.kind, types }),
            None => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Sum of 1/2 |v|^2 over all particles (unit mass)
    pub fn kinetic_energy(&self) -> f64 {
        self.particles.iter().map(|p| 0.5 * p.v.norm_squared()).sum()
    }
}
