//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial).
//!
//! ```text
//! p(z) = a[0] + a[1](z - x[0]) + ... + a[m](z - x[0])...(z - x[m-1])
//! ```
//!
//! Besides the coefficients `a`, the polynomial keeps the last diagonal `f`
//! of the divided-difference triangle, `f[i] = [x_i, ..., x_m] y`. That
//! diagonal is all that is needed to append a knot in O(m), see
//! [`NewtonPolynom::add_sampling_point`].


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{
    check_x_tol, close_pair, impl_common_cfg, non_finite_idx, too_close, CommonCfg, Knots,
    UniformGrid, DEFAULT_X_TOL,
};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::Interpolator;


/// Newton interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`NewtonCfg::new`], then either `set_x` (arbitrary distinct knots)
///   or `set_grid` (equidistant knots), then `set_y`.
///
/// # Defaults
/// - Minimum allowed spacing between two knots;
///   [`crate::interpolation::config::DEFAULT_X_TOL`] by default, so only
///   coinciding knots are rejected. Raise it with [`NewtonCfg::set_x_tol`].
#[derive(Debug, Clone, Copy)]
pub struct NewtonCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> NewtonCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }

    /// Arbitrary knots; must be finite and pairwise distinct, in any order.
    pub fn set_x(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        if v.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if let Some(idx) = non_finite_idx(v) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }
        if let Some((x1, x2)) = close_pair(v, self.common.x_min_spacing) {
            return Err(InterpolationError::DuplicateX { x1, x2 });
        }

        let y_len = self.common.y.len();
        if y_len != 0 && y_len != v.len() {
            return Err(InterpolationError::UnequalLength { x_len: v.len(), y_len });
        }

        self.common.with_knots(Knots::Explicit(v));
        Ok(self)
    }

    /// Opt-in minimum spacing; distinct knots closer than `v` are rejected
    /// as [`InterpolationError::DuplicateX`] when the config is validated.
    pub fn set_x_tol(mut self, v: f64) -> Result<Self, InterpolationError> {
        self.common.with_x_min_spacing(check_x_tol(v)?);
        Ok(self)
    }
}
impl<'a> Default for NewtonCfg<'a> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(NewtonCfg<'a>);


/// Polynomial in Newton form.
///
/// - `x` : knots, in insertion order
/// - `a` : Newton coefficients, `a[k] = [x_0, ..., x_k] y`
/// - `f` : last diagonal of the triangle, `f[i] = [x_i, ..., x_m] y`
///
/// All three have the same length and only ever grow.
#[derive(Debug, Clone)]
pub struct NewtonPolynom {
    x: Vec<f64>,
    a: Vec<f64>,
    f: Vec<f64>,
    x_min_spacing: f64,
}

impl Default for NewtonPolynom {
    fn default() -> Self {
        Self { x: Vec::new(), a: Vec::new(), f: Vec::new(), x_min_spacing: DEFAULT_X_TOL }
    }
}

impl NewtonPolynom {
    /// Empty polynomial; grow it with [`NewtonPolynom::add_sampling_point`]
    /// or fill it with [`NewtonPolynom::init_knots`].
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Rejects later knots closer than `v` to an existing one.
    ///
    /// # Errors
    /// - [`InterpolationError::InvalidXTol`] unless `v` is finite and `>= 0`
    pub fn with_x_tol(mut self, v: f64) -> Result<Self, InterpolationError> {
        self.x_min_spacing = check_x_tol(v)?;
        Ok(self)
    }

    pub fn x_tol(&self) -> f64 { self.x_min_spacing }

    /// Interpolates `y` at arbitrary knots `x`.
    pub fn from_samples(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        let mut p = Self::new();
        p.init_knots(x, y)?;
        Ok(p)
    }

    /// Builds the polynomial from a validated [`NewtonCfg`].
    pub fn from_cfg(cfg: NewtonCfg) -> Result<Self, InterpolationError> {
        cfg.common.validate()?;

        let mut p = Self { x_min_spacing: cfg.common.x_min_spacing(), ..Self::default() };
        let x = match cfg.common.knots() {
            Knots::Explicit(x) => x.to_vec(),
            Knots::Uniform(grid) => grid.knots(),
            Knots::Unset => return Err(InterpolationError::MissingKnots),
        };
        p.x = x;
        p.compute_coefficients(cfg.common.y());
        Ok(p)
    }

    /// Replaces all knots and values.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`] for empty `x` or `y`
    /// - [`InterpolationError::UnequalLength`] if lengths differ
    /// - [`InterpolationError::NonFiniteVec`] for non-finite entries
    /// - [`InterpolationError::DuplicateX`] if two knots coincide (or sit
    ///   closer than an opted-in tolerance)
    pub fn init_knots(&mut self, x: &[f64], y: &[f64]) -> Result<(), InterpolationError> {
        if x.is_empty() || y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        if let Some(idx) = non_finite_idx(x) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }
        if let Some(idx) = non_finite_idx(y) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }
        if let Some((x1, x2)) = close_pair(x, self.x_min_spacing) {
            return Err(InterpolationError::DuplicateX { x1, x2 });
        }

        self.x = x.to_vec();
        self.compute_coefficients(y);
        Ok(())
    }

    /// Divided-difference triangle, one column at a time in a single buffer.
    ///
    /// After stage `k` the buffer holds `[x_j, ..., x_{j+k}] y` for
    /// `j = 0..=m-k`; its head is `a[k]` and its tail is `f[m-k]`.
    fn compute_coefficients(&mut self, y: &[f64]) {
        let x = &self.x;
        let m = x.len() - 1;
        log::debug!("newton: building divided differences over {} knots", m + 1);

        let mut col = y.to_vec();
        let mut a = vec![0.0; m + 1];
        let mut f = vec![0.0; m + 1];
        a[0] = y[0];
        f[m] = y[m];

        for k in 1..=m {
            for j in 0..=m - k {
                col[j] = (col[j + 1] - col[j]) / (x[k + j] - x[j]);
            }
            f[m - k] = col[m - k];
            a[k]     = col[0];
        }

        self.a = a;
        self.f = f;
    }

    /// Appends the sample `(x_new, y_new)` without rebuilding the triangle.
    ///
    /// With `f` the old diagonal, the new one is
    ///
    /// ```text
    /// f'[m+1] = y_new
    /// f'[i]   = (f'[i+1] - f[i]) / (x_new - x[i]),   i = m, ..., 0
    /// ```
    ///
    /// and the new coefficient is `a[m+1] = f'[0]`. O(m), updated in place.
    ///
    /// # Errors
    /// - [`InterpolationError::NonFiniteValue`] for non-finite input
    /// - [`InterpolationError::DuplicateX`] if `x_new` coincides with a knot
    pub fn add_sampling_point(&mut self, x_new: f64, y_new: f64) -> Result<(), InterpolationError> {
        for v in [x_new, y_new] {
            if !v.is_finite() {
                return Err(InterpolationError::NonFiniteValue { got: v });
            }
        }
        if let Some(&x1) = self.x.iter().find(|&&xi| too_close(xi - x_new, self.x_min_spacing)) {
            return Err(InterpolationError::DuplicateX { x1, x2: x_new });
        }
        log::trace!("newton: appending knot {} as point #{}", x_new, self.x.len());

        // f[i+1] already holds the new value when f[i] is overwritten
        self.f.push(y_new);
        for i in (0..self.x.len()).rev() {
            self.f[i] = (self.f[i + 1] - self.f[i]) / (x_new - self.x[i]);
        }

        self.x.push(x_new);
        self.a.push(self.f[0]);
        Ok(())
    }

    pub fn coefficients(&self) -> &[f64] { &self.a }

    pub fn divided_differences(&self) -> &[f64] { &self.f }

    pub fn knots(&self) -> &[f64] { &self.x }

    /// Polynomial degree; `None` while empty.
    pub fn degree(&self) -> Option<usize> { self.a.len().checked_sub(1) }
}

impl Interpolator for NewtonPolynom {
    /// Interpolates `y` at the `n + 1` equidistant knots of `[a, b]`.
    fn init(&mut self, a: f64, b: f64, n: usize, y: &[f64]) -> Result<(), InterpolationError> {
        let grid = UniformGrid::new(a, b, n)?;
        grid.check_samples(y)?;
        if too_close(grid.step(), self.x_min_spacing) {
            return Err(InterpolationError::DuplicateX { x1: grid.knot(0), x2: grid.knot(1) });
        }

        self.x = grid.knots();
        self.compute_coefficients(y);
        Ok(())
    }

    /// Horner's scheme in Newton form, from the highest coefficient down.
    fn eval(&self, z: f64) -> Result<f64, InterpolationError> {
        let Some((&last, rest)) = self.a.split_last() else {
            return Err(InterpolationError::NotInitialized);
        };

        let mut p = last;
        for (ai, xi) in rest.iter().zip(&self.x[..rest.len()]).rev() {
            p = p * (z - xi) + ai;
        }
        Ok(p)
    }
}


/// Performs Newton divided-difference interpolation.
///
/// # Behavior
/// - Constructs the divided-difference triangle to obtain coefficients `a[i]`.
/// - For each evaluation point `xq` in `cfg.common.x_eval()`,
///   evaluates the polynomial using Horner’s nested form:
///
/// ```text
/// P(xq) = a[0] + (xq - x[0]) * [ a[1] + (xq - x[1]) * [ ... a[m] ... ] ]
/// ```
///
/// Unlike the spline, the polynomial is evaluated as-is outside the knots.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"newton"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated values at each evaluation point
pub fn interpolate(cfg: NewtonCfg) -> Result<InterpolationReport, InterpolationError> {
    let poly  = NewtonPolynom::from_cfg(cfg)?;
    let evals = cfg.common.x_eval();

    let mut report = InterpolationReport::new(
        Algorithm::Newton,
        poly.knots().len(),
        evals.len(),
    );
    for &xq in evals {
        report.evaluated.push(poly.eval(xq)?);
    }

    Ok(report)
}
