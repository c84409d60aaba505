//! Error taxonomy for the particle-life core
//!
//! - configuration errors: a setter was handed a value outside its domain,
//!   the previous value is kept
//! - precondition errors: a matrix whose shape does not match the number of
//!   particle types, or a lookup with a type index past the end
//! - unknown preset names

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("invalid {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("particle type {index} out of range (types = {types})")]
    TypeOutOfRange { index: usize, types: usize },

    #[error("interaction matrix must be {expected}x{expected}, got {rows}x{cols}")]
    ShapeMismatch {
        expected: usize,
        rows: usize,
        cols: usize,
    },

    #[error("unknown preset `{0}`")]
    UnknownPreset(String),
}

pub type SimResult<T> = Result<T, SimError>;
