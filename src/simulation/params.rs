//! Global parameters for the simulation
//!
//! `Parameters` holds the runtime settings read on every step:
//! - friction (velocity decay per step),
//! - force factor (global, sign preserving force scale),
//! - interaction range (force cutoff distance),
//! - particle count (target population size),
//! - world bounds of the torus.
//!
//! Setters reject values outside their domain and leave the old value in place.

use crate::error::{SimError, SimResult};

pub const DEFAULT_PARTICLE_COUNT: usize = 1000;
pub const DEFAULT_FRICTION: f64 = 0.9;
pub const DEFAULT_FORCE_FACTOR: f64 = 1.0;
pub const DEFAULT_INTERACTION_RANGE: f64 = 50.0;
pub const DEFAULT_WORLD_SIZE: f64 = 2000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    friction: f64,
    force_factor: f64,
    interaction_range: f64,
    particle_count: usize,
    width: f64,
    height: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            friction: DEFAULT_FRICTION,
            force_factor: DEFAULT_FORCE_FACTOR,
            interaction_range: DEFAULT_INTERACTION_RANGE,
            particle_count: DEFAULT_PARTICLE_COUNT,
            width: DEFAULT_WORLD_SIZE,
            height: DEFAULT_WORLD_SIZE,
        }
    }
}

impl Parameters {
    /// Build a validated parameter set
    pub fn new(
        particle_count: usize,
        friction: f64,
        force_factor: f64,
        interaction_range: f64,
        width: f64,
        height: f64,
    ) -> SimResult<Self> {
        let mut p = Self::default();
        p.set_world_size(width, height)?;
        p.set_particle_count(particle_count);
        p.set_friction(friction)?;
        p.set_force_factor(force_factor)?;
        p.set_interaction_range(interaction_range)?;
        Ok(p)
    }

    pub fn friction(&self) -> f64 {
        self.friction
    }

    pub fn force_factor(&self) -> f64 {
        self.force_factor
    }

    pub fn interaction_range(&self) -> f64 {
        self.interaction_range
    }

    pub fn particle_count(&self) -> usize {
        self.particle_count
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_friction(&mut self, friction: f64) -> SimResult<()> {
        self.friction = validate_friction(friction)?;
        Ok(())
    }

    pub fn set_force_factor(&mut self, force_factor: f64) -> SimResult<()> {
        self.force_factor = validate_force_factor(force_factor)?;
        Ok(())
    }

    pub fn set_interaction_range(&mut self, range: f64) -> SimResult<()> {
        self.interaction_range = validate_interaction_range(range)?;
        Ok(())
    }

    /// Only records the target; the population is rebuilt by the owner
    pub fn set_particle_count(&mut self, count: usize) {
        self.particle_count = count;
    }

    pub fn set_world_size(&mut self, width: f64, height: f64) -> SimResult<()> {
        let width = positive_finite("width", width)?;
        let height = positive_finite("height", height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Overwrite whichever fields the overrides carry
    pub fn apply_overrides(&mut self, overrides: &ParamOverrides) -> SimResult<()> {
        // Validate everything first so a bad override changes nothing
        let friction = overrides.friction.map(validate_friction).transpose()?;
        let force_factor = overrides.force_factor.map(validate_force_factor).transpose()?;
        let range = overrides
            .interaction_range
            .map(validate_interaction_range)
            .transpose()?;

        if let Some(f) = friction {
            self.friction = f;
        }
        if let Some(k) = force_factor {
            self.force_factor = k;
        }
        if let Some(r) = range {
            self.interaction_range = r;
        }
        Ok(())
    }
}

/// Parameter overrides carried by a preset
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParamOverrides {
    pub force_factor: Option<f64>,
    pub friction: Option<f64>,
    pub interaction_range: Option<f64>,
}

// validation ==========================================================================

pub(crate) fn validate_friction(friction: f64) -> SimResult<f64> {
    if friction.is_finite() && friction > 0.0 && friction <= 1.0 {
        Ok(friction)
    } else {
        Err(SimError::InvalidParameter {
            name: "friction",
            value: friction,
            reason: "must lie in (0, 1]",
        })
    }
}

pub(crate) fn validate_force_factor(force_factor: f64) -> SimResult<f64> {
    if force_factor.is_finite() {
        Ok(force_factor)
    } else {
        Err(SimError::InvalidParameter {
            name: "force_factor",
            value: force_factor,
            reason: "must be finite",
        })
    }
}

pub(crate) fn validate_interaction_range(range: f64) -> SimResult<f64> {
    positive_finite("interaction_range", range)
}

fn positive_finite(name: &'static str, value: f64) -> SimResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SimError::InvalidParameter {
            name,
            value,
            reason: "must be positive and finite",
        })
    }
}
