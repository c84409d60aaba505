//! Fixed unit-step integrator for the particle system
//!
//! One step, in order:
//! 1. accumulate pairwise delta-v from the `AccelSet`
//! 2. kick: v += delta-v
//! 3. drift: x += v (explicit Euler, dt = 1)
//! 4. wrap x onto the torus
//! 5. damp: v *= friction
//!
//! Damping comes after the drift, so each position update uses the undamped
//! velocity. Swapping 3 and 5 changes the dynamics.

use super::forces::AccelSet;
use super::matrix::InteractionMatrix;
use super::params::Parameters;
use super::states::{NVec2, ParticleSystem};
use crate::error::SimResult;

/// Advance `sys` by one step. `params` is read as a single snapshot for the
/// whole step. A particle type outside `matrix` is rejected and `sys` is left
/// as it was.
pub fn euler_step(
    sys: &mut ParticleSystem,
    forces: &AccelSet,
    matrix: &InteractionMatrix,
    params: &Parameters,
) -> SimResult<()> {
    let n = sys.particles.len();
    if n == 0 { // nothing to move, still counts as a step
        sys.steps += 1;
        return Ok(());
    }

    let width = params.width();
    let height = params.height();
    let friction = params.friction();

    let mut dv = vec![NVec2::zeros(); n];
    forces.accumulate_accels(&*sys, matrix, params, &mut dv)?;

    for (p, a) in sys.particles.iter_mut().zip(dv.iter()) {
        // Kick
        p.v += *a;

        // Drift
        p.x += p.v;

        // Wrap
        p.x.x = wrap_coord(p.x.x, width);
        p.x.y = wrap_coord(p.x.y, height);

        // Damp
        p.v *= friction;
    }

    sys.steps += 1;
    Ok(())
}

/// Map `value` into `[0, len)` on a ring of circumference `len`.
///
/// Uses `rem_euclid` so any overshoot lands correctly, not just one lap.
#[inline]
pub fn wrap_coord(value: f64, len: f64) -> f64 {
    let w = value.rem_euclid(len);
    // rem_euclid of a tiny negative value rounds up to `len`
    if w >= len {
        0.0
    } else {
        w
    }
}
