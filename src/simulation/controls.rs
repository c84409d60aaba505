//! Thread-safe control queue
//!
//! UI code (or any other thread) holds a [`ControlHandle`] and pushes
//! [`Command`]s. The owning `Simulation` drains the queue between steps, so a
//! step never runs against a half-applied change.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::SimResult;
use crate::simulation::params::{validate_force_factor, validate_friction, validate_interaction_range};
use crate::simulation::presets::Preset;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    SetParticleCount(usize),
    SetFriction(f64),
    SetForceFactor(f64),
    SetInteractionRange(f64),
    ApplyPreset(Preset),
    ResetRandom,
}

#[derive(Debug, Clone, Default)]
pub struct ControlHandle {
    queue: Arc<Mutex<VecDeque<Command>>>,
}

impl ControlHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_particle_count(&self, count: usize) {
        self.push(Command::SetParticleCount(count));
    }

    /// Rejected values never reach the queue
    pub fn set_friction(&self, friction: f64) -> SimResult<()> {
        let f = validate_friction(friction)?;
        self.push(Command::SetFriction(f));
        Ok(())
    }

    pub fn set_force_factor(&self, force_factor: f64) -> SimResult<()> {
        let k = validate_force_factor(force_factor)?;
        self.push(Command::SetForceFactor(k));
        Ok(())
    }

    pub fn set_interaction_range(&self, range: f64) -> SimResult<()> {
        let r = validate_interaction_range(range)?;
        self.push(Command::SetInteractionRange(r));
        Ok(())
    }

    /// Parses the name up front, unknown names are an error
    pub fn apply_preset(&self, name: &str) -> SimResult<()> {
        let preset: Preset = name.parse()?;
        self.push(Command::ApplyPreset(preset));
        Ok(())
    }

    pub fn reset_with_new_random_matrix(&self) {
        self.push(Command::ResetRandom);
    }

    pub fn push(&self, cmd: Command) {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(cmd);
    }

    /// Take every queued command, oldest first
    pub fn drain(&self) -> Vec<Command> {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}
