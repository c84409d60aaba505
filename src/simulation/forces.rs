//! Force contributors for the particle-life engine
//!
//! Defines the `Acceleration` trait, the `AccelSet` collection that sums
//! contributors, and the piecewise-linear type-pair force itself.

use crate::error::SimResult;
use crate::simulation::matrix::InteractionMatrix;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Particle, ParticleSystem};

/// Collection of velocity-change terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single delta-v per particle
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute the total delta-v for every particle in `sys`
    /// - `out[i]` is overwritten with the sum of contributions from all terms
    /// - fails with `TypeOutOfRange` before touching `out` if any particle type
    ///   is not a valid matrix index
    pub fn accumulate_accels(
        &self,
        sys: &ParticleSystem,
        matrix: &InteractionMatrix,
        params: &Parameters,
        out: &mut [NVec2],
    ) -> SimResult<()> {
        sys.validate_types(matrix.types())?;

        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(sys, matrix, params, out);
        }
        Ok(())
    }
}

/// Trait for velocity-change sources operating on a [`ParticleSystem`]
/// Implementations add their contribution into `out[i]` for each particle.
/// Particle types are already checked against `matrix` when this is called.
pub trait Acceleration {
    fn acceleration(
        &self,
        sys: &ParticleSystem,
        matrix: &InteractionMatrix,
        params: &Parameters,
        out: &mut [NVec2],
    );
}

/// Velocity change on `target` caused by `source`.
///
/// `magnitude = force_factor * coeff(target, source) * (1 - dist / range)`,
/// directed from `target` toward `source` (positive attracts). `Ok(None)`
/// when the pair is coincident or at/beyond the interaction range.
pub fn pair_force(
    target: &Particle,
    source: &Particle,
    matrix: &InteractionMatrix,
    params: &Parameters,
) -> SimResult<Option<NVec2>> {
    let coeff = matrix.coefficient(target.kind, source.kind)?;
    let range = params.interaction_range();
    let d = source.x - target.x;
    let dist = d.norm();

    if !(dist > 0.0 && dist < range) {
        return Ok(None);
    }

    let magnitude = params.force_factor() * coeff * (1.0 - dist / range);
    Ok(Some(d * (magnitude / dist)))
}

/// Asymmetric type-pair attraction/repulsion (brute-force all pairs)
pub struct ParticleLifeForce;

impl Acceleration for ParticleLifeForce {
    fn acceleration(
        &self,
        sys: &ParticleSystem,
        matrix: &InteractionMatrix,
        params: &Parameters,
        out: &mut [NVec2],
    ) {
        let ps = &sys.particles;
        let n = ps.len();
        let range = params.interaction_range();
        let force_factor = params.force_factor();

        // Each unordered pair acts in both directions, reading the matrix as
        // (i, j) for i and (j, i) for j. Same result as two `pair_force` calls,
        // with the displacement and sqrt shared.
        for i in 0..n {
            let pi = &ps[i];
            for j in (i + 1)..n {
                let pj = &ps[j];

                // d points from i to j
                let d = pj.x - pi.x;
                let dist = d.norm();
                if !(dist > 0.0 && dist < range) {
                    continue;
                }

                let falloff = force_factor * (1.0 - dist / range) / dist;
                out[i] += d * (matrix.at(pi.kind, pj.kind) * falloff);
                out[j] -= d * (matrix.at(pj.kind, pi.kind) * falloff);
            }
        }
    }
}
