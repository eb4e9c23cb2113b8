//! Interpolation error types.
//!
//! ┌ input vectors   : empty, unequal length, non-finite, coincident knots
//! ├ grid parameters : domain bounds and interval count
//! └ lifecycle       : evaluating or mutating an interpolant before `init`

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("non-finite scalar input: got {got}")]
    NonFiniteValue { got: f64 },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("insufficient points: got {got}, need at least {need}")]
    InsufficientPoints { got: usize, need: usize },

    #[error("duplicate x-values detected: {x1} and {x2}")]
    DuplicateX { x1: f64, x2: f64 },

    #[error("invalid domain [{a}, {b}]: bounds must be finite with a < b")]
    InvalidDomain { a: f64, b: f64 },

    #[error("invalid interval count {got}: must be >= 1")]
    InvalidIntervalCount { got: usize },

    #[error("invalid x_tol {got} must be finite and >= 0")]
    InvalidXTol { got: f64 },

    #[error("no knots configured: set explicit knots or a uniform grid")]
    MissingKnots,

    #[error("knots must form a uniform grid")]
    NonUniformKnots,

    #[error("interpolant used before init")]
    NotInitialized,
}
