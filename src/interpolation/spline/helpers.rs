//! Building blocks shared by the equidistant cubic spline.
//!
//! - [`solve_interior_slopes`] : Thomas sweep for the interior derivatives
//! - [`hermite`]               : cubic Hermite basis on the unit interval
//! - [`find_interval`]         : interval lookup on a uniform grid


/// Solves for the interior derivatives `yprime[1..n-1]` of an equidistant
/// cubic spline with step `h`, given `y[0..=n]` and the boundary
/// derivatives already stored in `yprime[0]` and `yprime[n]`.
///
/// Continuity of the second derivative at every interior knot gives
///
/// ```text
/// yprime[i-1] + 4 yprime[i] + yprime[i+1] = 3/h (y[i+1] - y[i-1]),   i = 1..n-1
/// ```
///
/// Moving the known boundary terms to the right-hand side leaves an
/// `(n-1) x (n-1)` tridiagonal system with diagonal `4` and unit
/// off-diagonals, solved in O(n) by forward elimination and back
/// substitution. `n <= 1` has no unknowns and leaves `yprime` untouched.
pub(crate) fn solve_interior_slopes(h: f64, y: &[f64], yprime: &mut [f64]) {
    let n = y.len() - 1;
    if n <= 1 {
        return;
    }

    // single unknown
    if n == 2 {
        yprime[1] = (3.0 / h * (y[2] - y[0] - h / 3.0 * yprime[0]) - yprime[2]) / 4.0;
        return;
    }

    // reduced super-diagonal; cprime[i] = 1 / (4 - cprime[i-1])
    let mut cprime = vec![0.0; n - 2];
    cprime[0] = 0.25;
    for i in 1..n - 2 {
        cprime[i] = 1.0 / (4.0 - cprime[i - 1]);
    }

    // reduced rhs, boundary contributions folded into both ends
    let mut dprime = vec![0.0; n - 1];
    dprime[0] = 3.0 / h * (y[2] - y[0] - h / 3.0 * yprime[0]) / 4.0;
    for i in 1..n - 2 {
        dprime[i] = (3.0 / h * (y[i + 2] - y[i]) - dprime[i - 1]) / (4.0 - cprime[i - 1]);
    }
    dprime[n - 2] = (3.0 / h * (y[n] - y[n - 2] - h / 3.0 * yprime[n]) - dprime[n - 3])
        / (4.0 - cprime[n - 3]);

    // back substitution
    yprime[n - 1] = dprime[n - 2];
    for i in (1..n - 1).rev() {
        yprime[i] = dprime[i - 1] - cprime[i - 1] * yprime[i + 1];
    }
}


/// Cubic Hermite basis at local parameter `t` in `[0, 1]`:
/// `(h00, h01, h10, h11)` weighting `y[i]`, `y[i+1]`, `h*yprime[i]`, `h*yprime[i+1]`.
#[inline]
pub(crate) fn hermite(t: f64) -> (f64, f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;

    let h00 = 1.0 - 3.0 * t2 + 2.0 * t3;
    let h01 = 3.0 * t2 - 2.0 * t3;
    let h10 = t - 2.0 * t2 + t3;
    let h11 = t3 - t2;
    (h00, h01, h10, h11)
}


/// Index `i` with `a + i*h <= z <= a + (i+1)*h`, for `z` in `[a, b]`.
/// The right end `z == b` lands in the last interval.
#[inline]
pub(crate) fn find_interval(a: f64, h: f64, n: usize, z: f64) -> usize {
    let i = ((z - a) / h).floor();
    if i <= 0.0 {
        0
    } else {
        (i as usize).min(n - 1)
    }
}
