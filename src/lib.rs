pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Particle, ParticleSystem, NVec2, PARTICLE_TYPES};
pub use simulation::matrix::InteractionMatrix;
pub use simulation::params::{Parameters, ParamOverrides};
pub use simulation::presets::Preset;
pub use simulation::forces::{Acceleration, AccelSet, ParticleLifeForce, pair_force};
pub use simulation::integrator::{euler_step, wrap_coord};
pub use simulation::controls::{Command, ControlHandle};
pub use simulation::scenario::Simulation;

pub use configuration::config::{ScenarioConfig, SimulationConfig, ViewerConfig};

pub use visualization::plsim_vis2d::run_2d;

pub use benchmark::benchmark::{bench_step, bench_step_curve, run_headless};

pub use error::{SimError, SimResult};
