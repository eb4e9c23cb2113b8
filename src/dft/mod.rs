//! Radix-2 discrete Fourier transforms over power-of-two length sequences.
//!
//! Two schedules producing the same output:
//! - [`recursive`] : divide and conquer on even/odd halves
//! - [`iterative`] : bit-reversal permutation plus in-place butterflies
//!
//! Neither scales by `1/n`; use [`complex::normalize`] where a true inverse
//! is needed.

pub mod algorithms;
pub mod complex;
pub mod errors;

pub mod iterative;
pub mod recursive;

pub use algorithms::{Algorithm, Direction};
pub use complex::Complex;
pub use errors::TransformError;


/// Transforms `seq` with the chosen direction and schedule.
///
/// # Errors
/// - [`TransformError::EmptyInput`] for an empty sequence
/// - [`TransformError::NotPowerOfTwo`] if `seq.len()` is not `2^m`
/// - [`TransformError::NonFiniteVec`] for a non-finite entry
pub fn transform(
    seq: &[Complex],
    direction: Direction,
    algorithm: Algorithm,
) -> Result<Vec<Complex>, TransformError> {
    log::trace!("dft: {} {} transform of length {}", algorithm, direction, seq.len());
    match algorithm {
        Algorithm::Recursive => recursive::transform(seq, direction),
        Algorithm::Iterative => iterative::transform(seq, direction),
    }
}


/// Checks the transform preconditions shared by both schedules.
pub(crate) fn validate(seq: &[Complex]) -> Result<(), TransformError> {
    if seq.is_empty() {
        return Err(TransformError::EmptyInput);
    }
    if !seq.len().is_power_of_two() {
        return Err(TransformError::NotPowerOfTwo { len: seq.len() });
    }
    if let Some(idx) = seq.iter().position(|c| !c.is_finite()) {
        return Err(TransformError::NonFiniteVec { idx });
    }
    Ok(())
}
