//! Exact integer square root.

use crate::common::consts::ONE;
use crate::common::util::round_p;
use crate::defs::Error;
use astro_float_num::{BigFloat, RoundingMode, WORD_BIT_SIZE};

/// Returns floor(sqrt(n)) for a nonnegative integer-valued `n`.
///
/// The result `r` is exact: r*r <= n < (r+1)*(r+1). The root is seeded by
/// the base square root of the underlying arithmetic at a precision derived
/// from the bit length of `n`, and then settled on the exact floor with
/// full-precision integer steps.
///
/// ## Errors
///
///  - InvalidArgument: `n` is negative, non-finite, or not an integer.
pub fn isqrt(n: &BigFloat) -> Result<BigFloat, Error> {
    if n.is_nan() || n.is_inf() || n.is_negative() {
        return Err(Error::InvalidArgument);
    }

    // integer check: truncation at the point must not change the value
    if n.cmp(&n.round(0, RoundingMode::ToZero)) != Some(0) {
        return Err(Error::InvalidArgument);
    }

    if n.is_zero() {
        return Ok(n.clone());
    }

    // for an integer the binary exponent is the bit length
    let e = match n.exponent() {
        Some(e) => e,
        None => return Err(Error::InvalidArgument),
    };

    let p = round_p(e.unsigned_abs() as usize / 2 + 1) + WORD_BIT_SIZE;

    let mut r = n.sqrt(p, RoundingMode::ToZero).round(0, RoundingMode::ToZero);

    // the seed is within an ulp of the true root; settle on the exact floor
    while r.mul_full_prec(&r).cmp(n).map_or(false, |c| c > 0) {
        r = r.sub_full_prec(&ONE);
    }

    loop {
        let r1 = r.add_full_prec(&ONE);
        if r1.mul_full_prec(&r1).cmp(n).map_or(true, |c| c > 0) {
            break;
        }
        r = r1;
    }

    Ok(r)
}
