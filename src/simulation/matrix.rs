//! Interaction matrix
//!
//! Square table of signed coefficients indexed by `(target type, source type)`.
//! Entry `(i, j)` scales the force a type-`j` particle exerts on a type-`i`
//! particle. Nothing forces `(i, j) == (j, i)`, and that asymmetry is what
//! drives the chasing / orbiting patterns.

use nalgebra::DMatrix;
use rand::Rng;

use crate::error::{SimError, SimResult};

#[derive(Debug, Clone, PartialEq)]
pub struct InteractionMatrix {
    coeffs: DMatrix<f64>,
}

impl InteractionMatrix {
    /// Every entry drawn independently from `[-1, 1]`
    pub fn random<R: Rng>(types: usize, rng: &mut R) -> Self {
        Self {
            coeffs: DMatrix::from_fn(types, types, |_, _| rng.gen_range(-1.0..=1.0)),
        }
    }

    /// Build from row-major literal rows. Rejects anything that is not
    /// `types x types`, and an empty table.
    pub fn from_rows(types: usize, rows: &[Vec<f64>]) -> SimResult<Self> {
        let cols = rows.first().map_or(0, |r| r.len());
        let ragged = rows.iter().any(|r| r.len() != cols);
        if types == 0 || rows.len() != types || cols != types || ragged {
            return Err(SimError::ShapeMismatch {
                expected: types,
                rows: rows.len(),
                cols: if ragged { 0 } else { cols },
            });
        }

        Ok(Self {
            coeffs: DMatrix::from_fn(types, types, |i, j| rows[i][j]),
        })
    }

    /// Same as [`from_rows`](Self::from_rows) for fixed-size tables
    pub fn from_array<const N: usize>(rows: &[[f64; N]; N]) -> Self {
        Self {
            coeffs: DMatrix::from_fn(N, N, |i, j| rows[i][j]),
        }
    }

    /// Number of particle types (side length)
    pub fn types(&self) -> usize {
        self.coeffs.nrows()
    }

    /// Coefficient scaling the force of a `source` particle on a `target` particle
    pub fn coefficient(&self, target: usize, source: usize) -> SimResult<f64> {
        let types = self.types();
        for index in [target, source] {
            if index >= types {
                return Err(SimError::TypeOutOfRange { index, types });
            }
        }
        Ok(self.coeffs[(target, source)])
    }

    /// Unchecked lookup for the force loop; particle types are validated
    /// once per step before the loop runs
    #[inline]
    pub(crate) fn at(&self, target: usize, source: usize) -> f64 {
        self.coeffs[(target, source)]
    }

    /// Row-major copy, e.g. for display
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.coeffs
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    /// Iterate over all coefficients
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.coeffs.iter().copied()
    }
}
