//! Transform direction and schedule variants.

use std::f64::consts::PI;


/// Sign of the twiddle rotation.
/// - [`Direction::Forward`] `omega = exp(-2πi/n)`
/// - [`Direction::Inverse`] `omega = exp(+2πi/n)`, unscaled
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Inverse,
}

impl Direction {
    /// Angle of the principal twiddle for length `n`.
    #[inline]
    pub fn angle(self, n: usize) -> f64 {
        let turn = 2.0 * PI / n as f64;
        match self {
            Direction::Forward => -turn,
            Direction::Inverse => turn,
        }
    }

    pub const fn direction_name(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Inverse => "inverse",
        }
    }
}
impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.direction_name())
    }
}


/// Butterfly schedule.
/// - [`Algorithm::Recursive`] fresh even/odd halves per level
/// - [`Algorithm::Iterative`] single buffer, bit-reversed input order
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Recursive,
    Iterative,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Recursive => "recursive",
            Algorithm::Iterative => "iterative",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
