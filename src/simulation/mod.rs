pub mod states;
pub mod params;
pub mod matrix;
pub mod presets;
pub mod forces;
pub mod integrator;
pub mod controls;
pub mod scenario;
