//! Recursive radix-2 [Cooley–Tukey](https://en.wikipedia.org/wiki/Cooley%E2%80%93Tukey_FFT_algorithm) transform.
//!
//! Splits the input into even- and odd-indexed halves, transforms both, and
//! recombines with twiddle factors `omega^j`:
//!
//! ```text
//! v[j]       = z1[j] + omega^j * z2[j]
//! v[n/2 + j] = z1[j] - omega^j * z2[j],      j = 0..n/2
//! ```
//!
//! Depth `log2(n)`, O(n log n) time. The input is never mutated.

use super::algorithms::Direction;
use super::complex::Complex;
use super::errors::TransformError;


/// Unscaled inverse transform, rotation `exp(+2πi/n)`.
pub fn ifft(c: &[Complex]) -> Result<Vec<Complex>, TransformError> {
    transform(c, Direction::Inverse)
}

/// Forward transform, rotation `exp(-2πi/n)`.
pub fn fft(c: &[Complex]) -> Result<Vec<Complex>, TransformError> {
    transform(c, Direction::Forward)
}

pub fn transform(c: &[Complex], direction: Direction) -> Result<Vec<Complex>, TransformError> {
    super::validate(c)?;
    Ok(radix2(c, direction))
}


fn radix2(c: &[Complex], direction: Direction) -> Vec<Complex> {
    let n = c.len();
    if n == 1 {
        return c.to_vec();
    }

    let even: Vec<Complex> = c.iter().step_by(2).copied().collect();
    let odd:  Vec<Complex> = c.iter().skip(1).step_by(2).copied().collect();

    let z1 = radix2(&even, direction);
    let z2 = radix2(&odd, direction);

    let m = n / 2;
    let omega = Complex::from_polar(1.0, direction.angle(n));

    let mut v = vec![Complex::new(0.0, 0.0); n];
    for j in 0..m {
        let t = omega.powu(j as u32) * z2[j];
        v[j]     = z1[j] + t;
        v[m + j] = z1[j] - t;
    }
    v
}
