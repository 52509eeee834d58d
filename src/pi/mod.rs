//! The pi number algorithm family.

mod agm;
mod borwein;
mod chudnovsky;

use crate::common::util::{bits_to_digits, checked, iteration_count, round_p};
use crate::defs::{ConvergenceOrder, Error};
use astro_float_num::{BigFloat, RoundingMode, WORD_BIT_SIZE};

/// A convergent iteration producing the pi number.
///
/// Every variant updates a small fixed-size state once per step and extracts
/// pi from the final state with a closed-form combination. The number of
/// steps is chosen by [`crate::iteration_count`] from the variant's
/// convergence order, so any requested precision is reached in a bounded,
/// precomputed number of iterations.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum PiAlgorithm {
    /// Classic Gauss-Legendre AGM iteration.
    GaussLegendre,

    /// Schoenhage variant of the Gauss AGM.
    SchoenhageAgm,

    /// Quadratic Borwein iteration.
    BorweinQuadratic,

    /// Cubic Borwein iteration.
    BorweinCubic,

    /// Quartic Borwein iteration.
    BorweinQuartic,

    /// Quintic Borwein iteration.
    BorweinQuintic,

    /// Nonic Borwein iteration.
    BorweinNonic,

    /// Chudnovsky series summed with binary splitting.
    Chudnovsky,
}

impl PiAlgorithm {
    /// Returns the convergence order of the iteration.
    pub fn convergence_order(&self) -> ConvergenceOrder {
        match self {
            PiAlgorithm::GaussLegendre
            | PiAlgorithm::SchoenhageAgm
            | PiAlgorithm::BorweinQuadratic => ConvergenceOrder::Quadratic,
            PiAlgorithm::BorweinCubic => ConvergenceOrder::Cubic,
            PiAlgorithm::BorweinQuartic => ConvergenceOrder::Quartic,
            PiAlgorithm::BorweinQuintic => ConvergenceOrder::Quintic,
            PiAlgorithm::BorweinNonic => ConvergenceOrder::Nonic,
            PiAlgorithm::Chudnovsky => ConvergenceOrder::Linear,
        }
    }

    /// Computes pi with precision `p` using rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: precision is incorrect.
    ///  - Numeric, NonFinite: the underlying arithmetic failed.
    pub fn compute(&self, p: usize, rm: RoundingMode) -> Result<BigFloat, Error> {
        if p == 0 {
            return Err(Error::InvalidArgument);
        }

        let p_wrk = round_p(p) + WORD_BIT_SIZE;
        let n = iteration_count(bits_to_digits(p_wrk), self.convergence_order());

        let val = match self {
            PiAlgorithm::GaussLegendre => agm::gauss_legendre(p_wrk, n),
            PiAlgorithm::SchoenhageAgm => agm::schoenhage(p_wrk, n),
            PiAlgorithm::BorweinQuadratic => borwein::quadratic(p_wrk, n),
            PiAlgorithm::BorweinCubic => borwein::cubic(p_wrk, n),
            PiAlgorithm::BorweinQuartic => borwein::quartic(p_wrk, n),
            PiAlgorithm::BorweinQuintic => borwein::quintic(p_wrk, n),
            PiAlgorithm::BorweinNonic => borwein::nonic(p_wrk, n),
            PiAlgorithm::Chudnovsky => chudnovsky::series(p_wrk, n),
        };

        let mut val = checked(val)?;
        val.set_precision(p, rm)?;

        Ok(val)
    }

    /// All variants in convergence-order succession.
    pub const ALL: [PiAlgorithm; 8] = [
        PiAlgorithm::GaussLegendre,
        PiAlgorithm::SchoenhageAgm,
        PiAlgorithm::BorweinQuadratic,
        PiAlgorithm::BorweinCubic,
        PiAlgorithm::BorweinQuartic,
        PiAlgorithm::BorweinQuintic,
        PiAlgorithm::BorweinNonic,
        PiAlgorithm::Chudnovsky,
    ];
}
