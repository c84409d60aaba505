//! The simulation object
//!
//! `Simulation` owns all mutable state: the particle population, the active
//! interaction matrix, the global parameters, the force set and the random
//! source. It is built from a [`ScenarioConfig`] and inserted into Bevy as a
//! `Resource`, but nothing here depends on a renderer.
//!
//! External controls reach it through a [`ControlHandle`]; queued commands
//! are applied at the start of [`Simulation::tick`].

use bevy::prelude::Resource;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::ScenarioConfig;
use crate::error::{SimError, SimResult};
use crate::simulation::controls::{Command, ControlHandle};
use crate::simulation::forces::{AccelSet, ParticleLifeForce};
use crate::simulation::integrator::euler_step;
use crate::simulation::matrix::InteractionMatrix;
use crate::simulation::params::Parameters;
use crate::simulation::presets::Preset;
use crate::simulation::states::{NVec2, ParticleSystem, PARTICLE_TYPES};

#[derive(Resource)]
pub struct Simulation {
    system: ParticleSystem,
    matrix: InteractionMatrix,
    params: Parameters,
    forces: AccelSet,
    rng: StdRng,
    controls: ControlHandle,
}

impl Simulation {
    /// Random matrix, freshly initialized population
    pub fn new(params: Parameters, mut rng: StdRng) -> Self {
        let matrix = InteractionMatrix::random(PARTICLE_TYPES, &mut rng);
        Self::assemble(params, matrix, rng)
    }

    /// Use the given matrix, which must be `PARTICLE_TYPES x PARTICLE_TYPES`
    pub fn with_matrix(params: Parameters, matrix: InteractionMatrix, rng: StdRng) -> SimResult<Self> {
        check_shape(&matrix)?;
        Ok(Self::assemble(params, matrix, rng))
    }

    fn assemble(params: Parameters, matrix: InteractionMatrix, rng: StdRng) -> Self {
        let mut sim = Self {
            system: ParticleSystem::default(),
            matrix,
            params,
            forces: AccelSet::new().with(ParticleLifeForce),
            rng,
            controls: ControlHandle::new(),
        };
        sim.initialize_particles();
        sim
    }

    /// Build from a scenario file: parameters, then custom matrix or preset
    pub fn build_simulation(cfg: &ScenarioConfig) -> SimResult<Self> {
        let s = &cfg.simulation;
        let mut params = Parameters::new(
            s.particle_count,
            s.friction,
            s.force_factor,
            s.interaction_range,
            s.width,
            s.height,
        )?;

        let mut rng = match s.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let matrix = match (&cfg.matrix, &cfg.preset) {
            (Some(rows), _) => InteractionMatrix::from_rows(PARTICLE_TYPES, rows)?,
            (None, Some(name)) => {
                let (matrix, overrides) = Preset::apply(name, &mut rng)?;
                if let Some(o) = overrides {
                    params.apply_overrides(&o)?;
                }
                matrix
            }
            (None, None) => InteractionMatrix::random(PARTICLE_TYPES, &mut rng),
        };

        let sim = Self::with_matrix(params, matrix, rng)?;
        info!(
            "simulation built: {} particles, {} types, world {}x{}, range {}",
            sim.system.len(),
            sim.types(),
            sim.params.width(),
            sim.params.height(),
            sim.params.interaction_range(),
        );
        Ok(sim)
    }

    // accessors ============================================================================

    pub fn system(&self) -> &ParticleSystem {
        &self.system
    }

    pub fn matrix(&self) -> &InteractionMatrix {
        &self.matrix
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn types(&self) -> usize {
        self.matrix.types()
    }

    pub fn step_count(&self) -> u64 {
        self.system.steps
    }

    /// What a renderer needs: `(position, type)` for each particle
    pub fn particles(&self) -> impl ExactSizeIterator<Item = (NVec2, usize)> + '_ {
        self.system.particles.iter().map(|p| (p.x, p.kind))
    }

    /// Handle for queueing changes from outside the step loop
    pub fn controls(&self) -> ControlHandle {
        self.controls.clone()
    }

    // stepping =============================================================================

    /// Advance by exactly one step with the current state
    pub fn step(&mut self) -> SimResult<()> {
        // Copy so the whole step sees one parameter set
        let params = self.params.clone();
        euler_step(&mut self.system, &self.forces, &self.matrix, &params)
    }

    /// Apply queued commands, then step once. This is what a driver loop calls.
    pub fn tick(&mut self) -> SimResult<()> {
        self.apply_pending();
        self.step()
    }

    /// Drain the control queue, applying commands in order
    pub fn apply_pending(&mut self) {
        for cmd in self.controls.drain() {
            if let Err(e) = self.apply_command(cmd) {
                warn!("rejected {:?}: {}", cmd, e);
            }
        }
    }

    pub fn apply_command(&mut self, cmd: Command) -> SimResult<()> {
        match cmd {
            Command::SetParticleCount(n) => self.set_particle_count(n),
            Command::SetFriction(f) => self.set_friction(f)?,
            Command::SetForceFactor(k) => self.set_force_factor(k)?,
            Command::SetInteractionRange(r) => self.set_interaction_range(r)?,
            Command::ApplyPreset(p) => self.apply_preset_kind(p)?,
            Command::ResetRandom => self.reset_with_new_random_matrix(),
        }
        Ok(())
    }

    // (re-)initialization ==================================================================

    /// Replace the population with `particle_count` fresh particles
    pub fn initialize_particles(&mut self) {
        let types = self.types();
        let (w, h) = (self.params.width(), self.params.height());
        let n = self.params.particle_count();
        self.system.initialize(&mut self.rng, n, types, w, h);
        debug!("initialized {} particles over {} types", n, types);
    }

    /// Swap in a preset's matrix and overrides, then re-initialize.
    /// Unknown names leave everything untouched.
    pub fn apply_preset(&mut self, name: &str) -> SimResult<()> {
        let preset: Preset = name.parse()?;
        self.apply_preset_kind(preset)
    }

    pub fn apply_preset_kind(&mut self, preset: Preset) -> SimResult<()> {
        let matrix = preset.matrix(&mut self.rng);
        self.replace_matrix(matrix)?;
        if let Some(o) = preset.overrides() {
            self.params.apply_overrides(&o)?;
        }
        self.initialize_particles();
        info!("applied preset `{}`", preset);
        Ok(())
    }

    /// Fresh random matrix and a fresh population
    pub fn reset_with_new_random_matrix(&mut self) {
        self.matrix = InteractionMatrix::random(self.types(), &mut self.rng);
        self.initialize_particles();
        info!("reset with a new random matrix");
    }

    /// Install a new matrix of the same shape; the population is not touched
    pub fn replace_matrix(&mut self, matrix: InteractionMatrix) -> SimResult<()> {
        check_shape(&matrix)?;
        self.matrix = matrix;
        Ok(())
    }

    // setters ==============================================================================

    pub fn set_particle_count(&mut self, count: usize) {
        self.params.set_particle_count(count);
        self.initialize_particles();
        info!("particle count set to {}", count);
    }

    pub fn set_friction(&mut self, friction: f64) -> SimResult<()> {
        self.params.set_friction(friction)
    }

    pub fn set_force_factor(&mut self, force_factor: f64) -> SimResult<()> {
        self.params.set_force_factor(force_factor)
    }

    pub fn set_interaction_range(&mut self, range: f64) -> SimResult<()> {
        self.params.set_interaction_range(range)
    }
}

fn check_shape(matrix: &InteractionMatrix) -> SimResult<()> {
    if matrix.types() != PARTICLE_TYPES {
        return Err(SimError::ShapeMismatch {
            expected: PARTICLE_TYPES,
            rows: matrix.types(),
            cols: matrix.types(),
        });
    }
    Ok(())
}
