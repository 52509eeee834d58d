//! π number cache.

use crate::common::util::round_p;
use crate::defs::{Error, DEFAULT_P};
use crate::pi::PiAlgorithm;
use astro_float_num::{BigFloat, RoundingMode, WORD_BIT_SIZE};

pub(crate) const DEFAULT_PI_ALGORITHM: PiAlgorithm = PiAlgorithm::Chudnovsky;

/// Holds the value of currently computed pi.
///
/// The value is stored with one word of precision on top of the largest
/// precision it is served at, so serving is always a rounding of a more
/// precise value.
#[derive(Debug)]
pub struct PiCache {
    val: BigFloat,
    p: usize,
    algo: PiAlgorithm,
}

impl PiCache {
    pub fn new() -> Result<Self, Error> {
        let p = round_p(DEFAULT_P);
        let val = DEFAULT_PI_ALGORITHM.compute(p + WORD_BIT_SIZE, RoundingMode::None)?;

        Ok(PiCache {
            val,
            p,
            algo: DEFAULT_PI_ALGORITHM,
        })
    }

    /// Return the value of pi with precision `k`. Any cached value is good
    /// enough regardless of the variant that computed it; a fresh
    /// computation uses the default variant.
    pub(crate) fn for_prec(&mut self, k: usize, rm: RoundingMode) -> Result<BigFloat, Error> {
        if k <= self.p {
            let mut ret = self.val.clone();
            ret.set_precision(k, rm)?;
            Ok(ret)
        } else {
            self.recompute(DEFAULT_PI_ALGORITHM, k, rm)
        }
    }

    /// Return the value of pi with precision `k` as computed by the variant
    /// `algo`.
    pub(crate) fn for_prec_with(
        &mut self,
        algo: PiAlgorithm,
        k: usize,
        rm: RoundingMode,
    ) -> Result<BigFloat, Error> {
        if algo == self.algo && k <= self.p {
            let mut ret = self.val.clone();
            ret.set_precision(k, rm)?;
            Ok(ret)
        } else {
            self.recompute(algo, k, rm)
        }
    }

    // The cache entry is replaced only after the value is fully computed.
    fn recompute(
        &mut self,
        algo: PiAlgorithm,
        k: usize,
        rm: RoundingMode,
    ) -> Result<BigFloat, Error> {
        let p_wrk = round_p(k) + WORD_BIT_SIZE;
        let val = algo.compute(p_wrk, RoundingMode::None)?;

        let mut ret = val.clone();
        ret.set_precision(k, rm)?;

        self.val = val;
        self.p = p_wrk - WORD_BIT_SIZE;
        self.algo = algo;

        Ok(ret)
    }
}
