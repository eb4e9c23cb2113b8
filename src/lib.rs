//! Interpolation of sampled functions and radix-2 Fourier transforms.
//!
//! - [`interpolation`] : cubic Hermite splines over equidistant knots and
//!   Newton-form polynomials built from divided differences
//! - [`dft`]           : recursive and iterative FFT/IFFT over power-of-two
//!   length complex sequences

pub mod interpolation;
pub mod dft;
