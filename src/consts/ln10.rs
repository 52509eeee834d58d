//! ln(10) cache.

use crate::common::consts::TEN;
use crate::common::util::{checked, round_p};
use crate::consts::ln2::Ln2Cache;
use crate::consts::pi::PiCache;
use crate::defs::Error;
use crate::ln;
use astro_float_num::{BigFloat, RoundingMode, WORD_BIT_SIZE};

/// Holds the value of currently computed ln(10).
#[derive(Debug)]
pub struct Ln10Cache {
    val: BigFloat,
    p: usize,
}

impl Ln10Cache {
    pub fn new() -> Result<Self, Error> {
        Ok(Ln10Cache {
            val: BigFloat::from_word(0, 1),
            p: 0,
        })
    }

    /// Return the value of ln(10) with precision `k`.
    pub(crate) fn for_prec(
        &mut self,
        k: usize,
        rm: RoundingMode,
        pi: &mut PiCache,
        ln2: &mut Ln2Cache,
    ) -> Result<BigFloat, Error> {
        if k <= self.p {
            let mut ret = self.val.clone();
            ret.set_precision(k, rm)?;
            Ok(ret)
        } else {
            let p_wrk = round_p(k) + 2 * WORD_BIT_SIZE;
            let pi_val = pi.for_prec(p_wrk, RoundingMode::None)?;
            let ln2_val = ln2.for_prec(p_wrk, RoundingMode::None, pi)?;
            let val = checked(ln::ln(&TEN, &pi_val, &ln2_val, p_wrk))?;

            let mut ret = val.clone();
            ret.set_precision(k, rm)?;

            self.val = val;
            self.p = p_wrk - WORD_BIT_SIZE;

            Ok(ret)
        }
    }
}
