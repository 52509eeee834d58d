//! ln(2) cache.

use crate::common::util::{checked, round_p};
use crate::consts::pi::PiCache;
use crate::defs::Error;
use crate::ln;
use astro_float_num::{BigFloat, RoundingMode, WORD_BIT_SIZE};

/// Holds the value of currently computed ln(2).
#[derive(Debug)]
pub struct Ln2Cache {
    val: BigFloat,
    p: usize,
}

impl Ln2Cache {
    pub fn new() -> Result<Self, Error> {
        // filled on the first request, since the computation pulls pi in
        Ok(Ln2Cache {
            val: BigFloat::from_word(0, 1),
            p: 0,
        })
    }

    /// Return the value of ln(2) with precision `k`.
    pub(crate) fn for_prec(
        &mut self,
        k: usize,
        rm: RoundingMode,
        pi: &mut PiCache,
    ) -> Result<BigFloat, Error> {
        if k <= self.p {
            let mut ret = self.val.clone();
            ret.set_precision(k, rm)?;
            Ok(ret)
        } else {
            let p_wrk = round_p(k) + WORD_BIT_SIZE;
            let pi_val = pi.for_prec(p_wrk, RoundingMode::None)?;
            let val = checked(ln::ln2(&pi_val, p_wrk))?;

            let mut ret = val.clone();
            ret.set_precision(k, rm)?;

            self.val = val;
            self.p = p_wrk - WORD_BIT_SIZE;

            Ok(ret)
        }
    }
}
