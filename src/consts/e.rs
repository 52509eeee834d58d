//! Euler's number.

use crate::common::consts::ONE;
use crate::common::util::{checked, ldexp, round_p};
use crate::defs::{Error, DEFAULT_P, E_LITERAL_CUTOFF};
use crate::literal::E_DIGITS;
use astro_float_num::{BigFloat, Consts as AstroConsts, Exponent, Radix, RoundingMode, Word, WORD_BIT_SIZE};

// Direct summation of the series e = sum(1/k!): the accumulator and the
// denominator are held as exact integers, result = 2 at denominator 1, then
// denominator *= k, result = result * k + 1 per step. The tail after
// stopping is smaller than 1/denominator, so the loop runs until the
// denominator magnitude passes 2^p.
fn calc_e(p: usize) -> BigFloat {
    if p < E_LITERAL_CUTOFF {
        let mut cc = AstroConsts::new().expect("constants cache for literal parse");
        return BigFloat::parse(E_DIGITS, Radix::Dec, p, RoundingMode::None, &mut cc);
    }

    let rm = RoundingMode::None;

    let lim = ldexp(BigFloat::from_word(1, 1), p as Exponent);

    let mut result = BigFloat::from_word(2, 1);
    let mut denom = BigFloat::from_word(1, 1);
    let mut i: Word = 2;

    loop {
        let iw = BigFloat::from_word(i, 1);
        denom = denom.mul_full_prec(&iw);
        result = result.mul_full_prec(&iw).add_full_prec(&ONE);
        i += 1;

        if denom.cmp(&lim).map_or(true, |c| c > 0) {
            break;
        }
    }

    result.div(&denom, p, rm)
}

/// Holds the value of currently computed e.
#[derive(Debug)]
pub struct ECache {
    val: BigFloat,
    p: usize,
}

impl ECache {
    pub fn new() -> Result<Self, Error> {
        let p = round_p(DEFAULT_P);
        let val = checked(calc_e(p + WORD_BIT_SIZE))?;

        Ok(ECache { val, p })
    }

    /// Return the value of e with precision `k`.
    pub(crate) fn for_prec(&mut self, k: usize, rm: RoundingMode) -> Result<BigFloat, Error> {
        if k <= self.p {
            let mut ret = self.val.clone();
            ret.set_precision(k, rm)?;
            Ok(ret)
        } else {
            let p_wrk = round_p(k) + WORD_BIT_SIZE;
            let val = checked(calc_e(p_wrk))?;

            let mut ret = val.clone();
            ret.set_precision(k, rm)?;

            self.val = val;
            self.p = p_wrk - WORD_BIT_SIZE;

            Ok(ret)
        }
    }
}
