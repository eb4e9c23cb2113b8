use crate::interpolation::errors::InterpolationError;

/// Shared capability of the interpolants: sample a function on an
/// equidistant grid, then evaluate the interpolant anywhere.
pub trait Interpolator {
    /// (re)initializes from `n + 1` samples `y` taken at
    /// `a + i * (b - a) / n`, `i = 0..=n`
    fn init(&mut self, a: f64, b: f64, n: usize, y: &[f64]) -> Result<(), InterpolationError>;

    /// evaluates single point
    /// defined separately in each method
    fn eval(&self, x: f64) -> Result<f64, InterpolationError>;

    /// evaluates many points
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }
}
