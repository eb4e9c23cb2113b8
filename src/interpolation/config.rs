//! Shared configuration for interpolation algorithms.
//!
//! Provides [`UniformGrid`] for equidistant knots and [`CommonCfg`] with the
//! default minimum allowed spacing between two knots; [`DEFAULT_X_TOL`].
//! Shared by all interpolation algorithms.
//!
//! By default only knots that coincide exactly are rejected. A positive
//! `x_min_spacing` additionally rejects distinct knots closer than it.
//!
//! [`CommonCfg`] universal fields:
//! - `knots`  : explicit knots or a uniform grid
//! - `y`      : sample values at the knots
//! - `x_eval` : x values to evaluate
//! - `x_min_spacing` : minimum distance between two knots
//!
//! [`CommonCfg::new`] initializes configuration with no knots and empty slices.


use crate::interpolation::errors::InterpolationError;

pub const DEFAULT_X_TOL: f64 = 0.0;


/// Equidistant knots `x_i = a + i * h`, `h = (b - a) / n`, `i = 0..=n`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UniformGrid {
    a: f64,
    b: f64,
    n: usize,
}

impl UniformGrid {
    /// # Errors
    /// - [`InterpolationError::InvalidDomain`] if `a` or `b` is non-finite or `a >= b`
    /// - [`InterpolationError::InvalidIntervalCount`] if `n == 0`
    pub fn new(a: f64, b: f64, n: usize) -> Result<Self, InterpolationError> {
        if !a.is_finite() || !b.is_finite() || a >= b {
            return Err(InterpolationError::InvalidDomain { a, b });
        }
        if n == 0 {
            return Err(InterpolationError::InvalidIntervalCount { got: n });
        }
        Ok(Self { a, b, n })
    }

    #[inline] pub fn start(&self) -> f64 { self.a }
    #[inline] pub fn end(&self)   -> f64 { self.b }
    #[inline] pub fn intervals(&self) -> usize { self.n }
    #[inline] pub fn n_knots(&self)   -> usize { self.n + 1 }
    #[inline] pub fn step(&self)  -> f64 { (self.b - self.a) / self.n as f64 }

    #[inline]
    pub fn knot(&self, i: usize) -> f64 {
        self.a + i as f64 * self.step()
    }

    pub fn knots(&self) -> Vec<f64> {
        (0..=self.n).map(|i| self.knot(i)).collect()
    }

    /// Checks `y` holds exactly one finite value per knot.
    pub(crate) fn check_samples(&self, y: &[f64]) -> Result<(), InterpolationError> {
        if y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if y.len() != self.n_knots() {
            return Err(InterpolationError::UnequalLength { x_len: self.n_knots(), y_len: y.len() });
        }
        if let Some(idx) = non_finite_idx(y) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }
        Ok(())
    }
}


/// Where the knots of an interpolant come from.
#[derive(Debug, Copy, Clone)]
pub enum Knots<'a> {
    Unset,
    Explicit(&'a [f64]),
    Uniform(UniformGrid),
}

impl<'a> Knots<'a> {
    pub fn len(&self) -> Option<usize> {
        match self {
            Knots::Unset       => None,
            Knots::Explicit(x) => Some(x.len()),
            Knots::Uniform(g)  => Some(g.n_knots()),
        }
    }

    /// `true` when unset or explicitly empty.
    pub fn is_empty(&self) -> bool {
        self.len().map_or(true, |n| n == 0)
    }
}


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) knots  : Knots<'a>,
    pub(crate) y      : &'a [f64],
    pub(crate) x_eval : &'a [f64],
    pub(crate) x_min_spacing: f64,
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self {
            knots  : Knots::Unset,
            y      : &[],
            x_eval : &[],
            x_min_spacing: DEFAULT_X_TOL,
        }
    }
    pub fn validate(&self) -> Result<(), InterpolationError> {
        let x_len = self.knots.len().ok_or(InterpolationError::MissingKnots)?;
        let y = self.y;

        if x_len == 0 || y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if x_len != y.len() {
            return Err(InterpolationError::UnequalLength { x_len, y_len: y.len() });
        }

        // spacing is checked here so setter order does not matter
        match self.knots {
            Knots::Explicit(x) => {
                if let Some((x1, x2)) = close_pair(x, self.x_min_spacing) {
                    return Err(InterpolationError::DuplicateX { x1, x2 });
                }
            }
            Knots::Uniform(grid) => {
                if too_close(grid.step(), self.x_min_spacing) {
                    return Err(InterpolationError::DuplicateX { x1: grid.knot(0), x2: grid.knot(1) });
                }
            }
            Knots::Unset => {}
        }
        Ok(())
    }

    // getters
    pub fn knots(&self) -> Knots<'a> { self.knots }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }
    pub fn x_min_spacing(&self)  -> f64 { self.x_min_spacing }

    // setters
    pub(crate) fn with_knots(&mut self, v: Knots<'a>) { self.knots = v; }
    pub(crate) fn with_y(&mut self, v: &'a[f64]) { self.y = v; }
    pub(crate) fn with_x_eval(&mut self, v: &'a[f64]) { self.x_eval = v; }
    pub(crate) fn with_x_min_spacing(&mut self, v: f64) { self.x_min_spacing = v; }
}

impl<'a> Default for CommonCfg<'a> {
    fn default() -> Self { Self::new() }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}


/// Two knots `gap` apart are unusable if they coincide or sit closer than `tol`.
#[inline]
pub(crate) fn too_close(gap: f64, tol: f64) -> bool {
    let gap = gap.abs();
    gap == 0.0 || gap < tol
}


/// Finds two knots that are [`too_close`]. Knots need not be sorted.
pub(crate) fn close_pair(xs: &[f64], tol: f64) -> Option<(f64, f64)> {
    let mut sorted = xs.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
        .windows(2)
        .find(|w| too_close(w[1] - w[0], tol))
        .map(|w| (w[0], w[1]))
}


/// Minimum knot spacing must be finite and non-negative.
pub(crate) fn check_x_tol(v: f64) -> Result<f64, InterpolationError> {
    if !v.is_finite() || v < 0.0 {
        return Err(InterpolationError::InvalidXTol { got: v });
    }
    Ok(v)
}


macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_grid(
                mut self,
                a: f64,
                b: f64,
                n: usize,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::config::{Knots, UniformGrid};
                use $crate::interpolation::errors::InterpolationError;

                let grid = UniformGrid::new(a, b, n)?;

                // length agreement check
                // symmetric with set_y
                let y_len = self.common.y.len();
                if y_len != 0 && y_len != grid.n_knots() {
                    return Err(InterpolationError::UnequalLength { x_len: grid.n_knots(), y_len });
                }

                self.common.with_knots(Knots::Uniform(grid));
                Ok(self)
            }

            pub fn set_y(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                if let Some(x_len) = self.common.knots.len() {
                    if v.len() != x_len {
                        return Err(InterpolationError::UnequalLength { x_len, y_len: v.len() });
                    }
                }

                self.common.with_y(v);
                Ok(self)
            }

            pub fn set_x_eval(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                self.common.with_x_eval(v);
                Ok(self)
            }

            // getters
            pub fn common(&self) -> &$crate::interpolation::config::CommonCfg<'a> { &self.common }
        }
    };
}
pub(crate) use impl_common_cfg;
