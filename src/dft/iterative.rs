//! Iterative radix-2 transform on a single buffer.
//!
//! Reorders the input by bit-reversed index, then runs `log2(n)` butterfly
//! stages of doubling width. Produces the same output as
//! [`super::recursive`] without allocating per level.

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
    let mut buf = c.to_vec();
    transform_in_place(&mut buf, direction)?;
    Ok(buf)
}

pub fn ifft_in_place(buf: &mut [Complex]) -> Result<(), TransformError> {
    transform_in_place(buf, Direction::Inverse)
}

pub fn fft_in_place(buf: &mut [Complex]) -> Result<(), TransformError> {
    transform_in_place(buf, Direction::Forward)
}

pub fn transform_in_place(buf: &mut [Complex], direction: Direction) -> Result<(), TransformError> {
    super::validate(buf)?;
    bit_reverse_permute(buf);

    let n = buf.len();
    let mut width = 2;
    while width <= n {
        let half  = width / 2;
        let omega = Complex::from_polar(1.0, direction.angle(width));

        for block in buf.chunks_exact_mut(width) {
            let (lo, hi) = block.split_at_mut(half);
            let mut w = Complex::new(1.0, 0.0);
            for (u, v) in lo.iter_mut().zip(hi.iter_mut()) {
                let t = w * *v;
                *v = *u - t;
                *u += t;
                w *= omega;
            }
        }
        width *= 2;
    }
    Ok(())
}


/// Swaps every element with the one at its bit-reversed index.
/// `buf.len()` must be a power of two.
pub fn bit_reverse_permute<T>(buf: &mut [T]) {
    let n = buf.len();
    if n <= 2 {
        return;
    }
    let bits = n.trailing_zeros();

    for i in 0..n {
        let j = i.reverse_bits() >> (usize::BITS - bits);
        if i < j {
            buf.swap(i, j);
        }
    }
}
