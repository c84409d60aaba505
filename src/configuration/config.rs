//! Configuration types for loading particle-life scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`SimulationConfig`] – global parameters, world bounds and seed
//! - `preset`             – optional preset name applied at startup
//! - `matrix`             – optional custom 5x5 interaction table (wins over `preset`)
//! - [`ViewerConfig`]     – rendering-only settings for the 2D viewer
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every field has a default, so an empty document is a valid scenario.
//!
//! # YAML format
//!
//! ```yaml
//! simulation:
//!   particle_count: 2000
//!   friction: 0.9
//!   force_factor: 1.0
//!   interaction_range: 200.0
//!   width: 2000.0
//!   height: 2000.0
//!   seed: 42              # omit for a different run every time
//!
//! preset: galaxies        # random | galaxies | bubbles | snakes | flocking
//!
//! # matrix:              # rows = target type, columns = source type
//! #   - [ 1.0, -0.2, -0.1,  0.0,  0.1]
//! #   - ...
//!
//! viewer:
//!   particle_size: 1.5
//!   scale: 0.4
//!   paused: false
//! ```

use serde::Deserialize;

use crate::simulation::params::{
    DEFAULT_FORCE_FACTOR, DEFAULT_FRICTION, DEFAULT_INTERACTION_RANGE, DEFAULT_PARTICLE_COUNT,
    DEFAULT_WORLD_SIZE,
};

/// Global simulation parameters
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub particle_count: usize,   // target population size
    pub friction: f64,           // velocity decay per step, (0, 1]
    pub force_factor: f64,       // global force scale
    pub interaction_range: f64,  // force cutoff distance
    pub width: f64,              // torus width
    pub height: f64,             // torus height
    pub seed: Option<u64>,       // deterministic seed to make runs reproducible
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            friction: DEFAULT_FRICTION,
            force_factor: DEFAULT_FORCE_FACTOR,
            interaction_range: DEFAULT_INTERACTION_RANGE,
            width: DEFAULT_WORLD_SIZE,
            height: DEFAULT_WORLD_SIZE,
            seed: None,
        }
    }
}

pub const MIN_PARTICLE_SIZE: f32 = 0.5;
pub const MAX_PARTICLE_SIZE: f32 = 20.0;

/// Rendering-only settings, never read by the simulation core
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    pub particle_size: f32, // circle radius in world units
    pub scale: f32,         // world -> screen scale
    pub paused: bool,       // start paused
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            particle_size: 1.5,
            scale: 0.4,
            paused: false,
        }
    }
}

impl ViewerConfig {
    /// Grow or shrink the particle radius, clamped to
    /// `[MIN_PARTICLE_SIZE, MAX_PARTICLE_SIZE]`. Returns the new size.
    pub fn nudge_particle_size(&mut self, delta: f32) -> f32 {
        self.particle_size = (self.particle_size + delta).clamp(MIN_PARTICLE_SIZE, MAX_PARTICLE_SIZE);
        self.particle_size
    }

    /// Circle radius on screen
    pub fn screen_radius(&self) -> f32 {
        (self.particle_size * self.scale).max(0.5)
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    pub simulation: SimulationConfig, // global parameters
    pub preset: Option<String>,       // preset applied at build time
    pub matrix: Option<Vec<Vec<f64>>>, // custom interaction table
    pub viewer: ViewerConfig,         // 2D viewer settings
}
