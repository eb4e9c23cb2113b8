//! Complex values for the transforms.
//!
//! [`Complex`] is `num_complex::Complex64`: an immutable `(re, im)` pair
//! with value semantics. Addition, subtraction and multiplication are the
//! `+`, `-`, `*` operators, integer powers are `powu`/`powi`, and
//! `Complex::from_polar(r, theta)` builds `r (cos theta + i sin theta)`.

use super::algorithms::Direction;

pub type Complex = num_complex::Complex64;


/// `omega^j` for the principal twiddle `omega` of length `n`.
#[inline]
pub fn twiddle(n: usize, j: usize, direction: Direction) -> Complex {
    Complex::from_polar(1.0, direction.angle(n)).powu(j as u32)
}

/// Lifts a real signal onto the real axis.
pub fn from_real(xs: &[f64]) -> Vec<Complex> {
    xs.iter().map(|&x| Complex::new(x, 0.0)).collect()
}

pub fn magnitudes(seq: &[Complex]) -> Vec<f64> {
    seq.iter().map(|c| c.norm()).collect()
}

/// Scales by `1/n`, turning an unscaled inverse into the true inverse DFT.
pub fn normalize(seq: &[Complex]) -> Vec<Complex> {
    let scale = 1.0 / seq.len() as f64;
    seq.iter().map(|&c| c * scale).collect()
}
