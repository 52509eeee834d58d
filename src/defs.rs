//! Definitions.

use core::fmt::Display;

/// Precision of the initial cache fill, in bits.
pub(crate) const DEFAULT_P: usize = 128;

/// Maximum number of AGM iterations of the logarithm calculator.
pub(crate) const MAX_AGM_ITERATIONS: usize = 64;

/// Number of AGM iterations that must elapse before the adaptive
/// termination test may fire.
pub(crate) const MIN_AGM_ITERATIONS: usize = 4;

/// Precision in bits below which e is built from its reference literal.
/// 3640 bits corresponds to the 1100 embedded decimal digits.
pub(crate) const E_LITERAL_CUTOFF: usize = 3640;

/// Decimal digits contributed by a single term of the Chudnovsky series.
pub(crate) const CHUDNOVSKY_DIGITS_PER_TERM: usize = 14;

/// Convergence order of a constant-producing iteration: the factor by which
/// the number of correct digits grows with every step, or
/// [`ConvergenceOrder::Linear`] for a series gaining a fixed number of digits
/// per step.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum ConvergenceOrder {
    /// A fixed number of digits is gained per iteration.
    Linear,

    /// The number of correct digits doubles every iteration.
    Quadratic,

    /// The number of correct digits triples every iteration.
    Cubic,

    /// The number of correct digits quadruples every iteration.
    Quartic,

    /// The number of correct digits grows five-fold every iteration.
    Quintic,

    /// The number of correct digits grows nine-fold every iteration.
    Nonic,
}

impl ConvergenceOrder {
    /// Returns the digit growth factor per iteration, or None for linear
    /// convergence.
    pub fn digit_growth(&self) -> Option<usize> {
        match self {
            ConvergenceOrder::Linear => None,
            ConvergenceOrder::Quadratic => Some(2),
            ConvergenceOrder::Cubic => Some(3),
            ConvergenceOrder::Quartic => Some(4),
            ConvergenceOrder::Quintic => Some(5),
            ConvergenceOrder::Nonic => Some(9),
        }
    }

    // The first iterations of the higher-order schemes do not yet show the
    // asymptotic digit growth; the margin covers the transient.
    pub(crate) fn safety_margin(&self) -> usize {
        match self {
            ConvergenceOrder::Linear => 1,
            ConvergenceOrder::Quadratic | ConvergenceOrder::Cubic => 1,
            ConvergenceOrder::Quartic | ConvergenceOrder::Quintic => 2,
            ConvergenceOrder::Nonic => 3,
        }
    }
}

/// Possible errors.
#[derive(Debug, Clone, Copy)]
pub enum Error {
    /// Precision or an argument is outside of the allowed domain.
    InvalidArgument,

    /// Propagated error of the underlying arbitrary-precision arithmetic.
    Numeric(astro_float_num::Error),

    /// A computation produced a value outside of the finite domain of the
    /// underlying arbitrary-precision arithmetic.
    NonFinite,
}

impl From<astro_float_num::Error> for Error {
    fn from(e: astro_float_num::Error) -> Self {
        Error::Numeric(e)
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Numeric(l0), Self::Numeric(r0)) => {
                core::mem::discriminant(l0) == core::mem::discriminant(r0)
            }
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidArgument => f.write_str("invalid argument"),
            Error::Numeric(e) => e.fmt(f),
            Error::NonFinite => f.write_str("computation left the finite domain"),
        }
    }
}
