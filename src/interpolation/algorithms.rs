//! Defines the interpolation algorithm variants 
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods. 

/// Interpolation algorithm variants.
/// - [`Algorithm::CubicSpline`] piecewise cubic Hermite spline over equidistant knots
/// - [`Algorithm::Newton`]      global polynomial in Newton form
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    CubicSpline,
    Newton, 
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::CubicSpline => "cubic spline",
            Algorithm::Newton      => "newton",
        }
    }
}
impl std::fmt::Display for Algorithm { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { 
        write!(f, "{}", self.algorithm_name())
    }
}
