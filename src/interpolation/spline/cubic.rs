//! Cubic Hermite spline over equidistant knots.
//!
//! Values `y[i]` are sampled at `x_i = a + i*h`, `h = (b - a) / n`. On every
//! interval the spline is the cubic Hermite polynomial matching `y` and the
//! derivative estimates `yprime` at both ends. The boundary derivatives
//! `yprime[0]` and `yprime[n]` are caller-controlled (zero by default); the
//! interior ones come from requiring a continuous second derivative, see
//! [`solve_interior_slopes`].
//!
//! Outside `[a, b]` the spline is flat: the nearest boundary sample is
//! returned.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg, Knots, UniformGrid};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::spline::helpers::{find_interval, hermite, solve_interior_slopes};
use crate::interpolation::traits::Interpolator;


/// Cubic spline configuration
///
/// # Fields
/// - `common`      : [`CommonCfg`]; knots must be a uniform grid
/// - `slope_start` : derivative at `a`
/// - `slope_final` : derivative at `b`
///
/// # Construction
/// - Use [`SplineCfg::new`] then `set_grid`, `set_y`, optional setters.
///
/// # Defaults
/// - Both boundary slopes are `0.0`.
#[derive(Debug, Copy, Clone)]
pub struct SplineCfg<'a> {
    common: CommonCfg<'a>,
    slope_start: f64,
    slope_final: f64,
}
impl<'a> SplineCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(), slope_start: 0.0, slope_final: 0.0 }
    }

    pub fn with_boundary_slopes(mut self, start: f64, end: f64) -> Self {
        self.slope_start = start;
        self.slope_final = end;
        self
    }

    pub fn slope_start(&self) -> f64 { self.slope_start }
    pub fn slope_final(&self) -> f64 { self.slope_final }
}
impl<'a> Default for SplineCfg<'a> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(SplineCfg<'a>);


/// Equidistant cubic Hermite spline.
///
/// Created empty by [`CubicSpline::new`], populated by
/// [`Interpolator::init`] or [`CubicSpline::from_cfg`].
#[derive(Debug, Clone, Default)]
pub struct CubicSpline {
    grid: Option<UniformGrid>,
    y: Vec<f64>,
    yprime: Vec<f64>,
}

impl CubicSpline {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Builds a spline from a validated [`SplineCfg`], applying its boundary slopes.
    pub fn from_cfg(cfg: SplineCfg) -> Result<Self, InterpolationError> {
        cfg.common.validate()?;
        let grid = match cfg.common.knots() {
            Knots::Uniform(grid) => grid,
            Knots::Explicit(_)   => return Err(InterpolationError::NonUniformKnots),
            Knots::Unset         => return Err(InterpolationError::MissingKnots),
        };

        let mut spline = Self::new();
        spline.init_grid(grid, cfg.common.y())?;
        if cfg.slope_start != 0.0 || cfg.slope_final != 0.0 {
            spline.set_boundary_conditions(cfg.slope_start, cfg.slope_final)?;
        }
        Ok(spline)
    }

    fn init_grid(&mut self, grid: UniformGrid, y: &[f64]) -> Result<(), InterpolationError> {
        grid.check_samples(y)?;

        self.grid   = Some(grid);
        self.y      = y.to_vec();
        self.yprime = vec![0.0; y.len()];
        self.compute_derivatives();
        Ok(())
    }

    /// Overwrites the derivatives at `a` and `b`, then re-solves the interior ones.
    ///
    /// # Errors
    /// - [`InterpolationError::NotInitialized`] before `init`
    /// - [`InterpolationError::NonFiniteValue`] for a non-finite slope
    pub fn set_boundary_conditions(
        &mut self,
        yprime0: f64,
        yprimen: f64,
    ) -> Result<(), InterpolationError> {
        if self.grid.is_none() {
            return Err(InterpolationError::NotInitialized);
        }
        for v in [yprime0, yprimen] {
            if !v.is_finite() {
                return Err(InterpolationError::NonFiniteValue { got: v });
            }
        }

        let n = self.yprime.len() - 1;
        self.yprime[0] = yprime0;
        self.yprime[n] = yprimen;
        self.compute_derivatives();
        Ok(())
    }

    fn compute_derivatives(&mut self) {
        let Some(grid) = self.grid else { return };
        if grid.intervals() <= 1 {
            return;
        }
        log::debug!(
            "cubic spline: solving {} interior slopes on [{}, {}]",
            grid.intervals() - 1, grid.start(), grid.end()
        );
        solve_interior_slopes(grid.step(), &self.y, &mut self.yprime);
    }

    /// Derivative estimates at every knot, boundary entries included.
    pub fn derivatives(&self) -> &[f64] { &self.yprime }

    pub fn values(&self) -> &[f64] { &self.y }

    pub fn grid(&self) -> Option<&UniformGrid> { self.grid.as_ref() }
}

impl Interpolator for CubicSpline {
    /// Stores the samples, resets both boundary derivatives to zero and
    /// solves for the interior derivatives.
    fn init(&mut self, a: f64, b: f64, n: usize, y: &[f64]) -> Result<(), InterpolationError> {
        let grid = UniformGrid::new(a, b, n)?;
        self.init_grid(grid, y)
    }

    fn eval(&self, z: f64) -> Result<f64, InterpolationError> {
        let grid = self.grid.ok_or(InterpolationError::NotInitialized)?;
        if z.is_nan() {
            return Err(InterpolationError::NonFiniteValue { got: z });
        }

        let (a, b, n) = (grid.start(), grid.end(), grid.intervals());
        let y = &self.y;
        if z < a { return Ok(y[0]); }
        if z > b { return Ok(y[n]); }

        let h = grid.step();
        let i = find_interval(a, h, n, z);
        let t = (z - grid.knot(i)) / h;

        let (h00, h01, h10, h11) = hermite(t);
        Ok(y[i]     * h00
            + y[i + 1] * h01
            + h * self.yprime[i]     * h10
            + h * self.yprime[i + 1] * h11)
    }
}


/// Evaluate an equidistant cubic spline
///
/// # Behavior
/// - Builds a [`CubicSpline`] from `cfg` (boundary slopes included).
/// - Evaluates every point of `cfg.common.x_eval()`; points outside
///   `[a, b]` take the nearest boundary sample.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"cubic spline"`
/// - `n_provided`     : number of samples (`n + 1`)
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : spline values at each evaluation point
pub fn interpolate(cfg: SplineCfg) -> Result<InterpolationReport, InterpolationError> {
    let spline = CubicSpline::from_cfg(cfg)?;
    let evals  = cfg.common.x_eval();

    let mut report = InterpolationReport::new(
        Algorithm::CubicSpline,
        spline.values().len(),
        evals.len(),
    );
    for &xq in evals {
        report.evaluated.push(spline.eval(xq)?);
    }

    Ok(report)
}
