//! AGM-based logarithm calculator.

use crate::common::consts::{FOUR, ONE};
use crate::common::util::ldexp;
use crate::defs::{MAX_AGM_ITERATIONS, MIN_AGM_ITERATIONS};
use astro_float_num::{BigFloat, Exponent, RoundingMode, Word};

/// Arithmetic-geometric mean of `a` and `b`.
///
/// Termination is adaptive rather than iteration-counted: the loop stops one
/// step after the binary exponents of (a - b) and b show that at least half
/// of the target bits are settled. AGM convergence is quadratic once past
/// its transient phase, so the remaining half arrives with that final step.
fn agm(mut a: BigFloat, mut b: BigFloat, p: usize) -> BigFloat {
    let rm = RoundingMode::None;

    // tolerance ~ sqrt(eps) / 2^8
    let tol: Exponent = -(p as Exponent) / 2 - 8;

    for k in 0..MAX_AGM_ITERATIONS {
        let d = a.sub(&b, p, rm);

        let done = k > MIN_AGM_ITERATIONS
            && (d.is_zero()
                || match (d.exponent(), b.exponent()) {
                    (Some(de), Some(be)) => de < be + tol,
                    _ => true,
                });

        let a0 = a.clone();
        a = ldexp(a.add(&b, p, rm), -1);

        if done {
            break;
        }

        b = b.mul(&a0, p, rm).sqrt(p, rm);
    }

    a
}

// The scaling exponent m of the AGM identity argument x * 2^m: half the
// target bits, plus a slope covering the ln(x * 2^m) factor of the identity
// error term, and never below 8.
fn scaling_exponent(p: usize) -> Exponent {
    let m = p / 2 + p / 256 + 8;

    (m as Exponent).max(8)
}

/// ln(2) = pi / (2 (m + 1) AGM(1, 2^-(m-1))) with the scaling exponent m
/// derived from the target precision.
pub(crate) fn ln2(pi: &BigFloat, p: usize) -> BigFloat {
    let rm = RoundingMode::None;

    let m = scaling_exponent(p);

    let a = BigFloat::from_word(1, p);
    let b = ldexp(BigFloat::from_word(1, p), -(m - 1));
    let g = agm(a, b, p);

    let den = ldexp(g.mul(&BigFloat::from_word(m as Word + 1, p), p, rm), 1);

    pi.div(&den, p, rm)
}

/// Natural logarithm of a positive finite `x`.
///
/// The argument is normalized as x = f * 2^q with f in [1, 2), the identity
/// ln(s) = pi / (2 AGM(1, 4/s)) is evaluated at s = f * 2^m, and the result
/// is recombined as ln(x) = pi / (2 AGM(1, 4/(f 2^m))) - (m - q) ln(2).
pub(crate) fn ln(x: &BigFloat, pi: &BigFloat, ln_2: &BigFloat, p: usize) -> BigFloat {
    let rm = RoundingMode::None;

    let (f, q) = match x.exponent() {
        Some(e) => {
            let mut f = x.clone();
            f.set_exponent(1);
            (f, e - 1)
        }
        None => return astro_float_num::NAN,
    };

    if f.cmp(&ONE) == Some(0) {
        // an exact power of two: q ln(2)
        return mul_by_exponent(ln_2, q, p);
    }

    let m = scaling_exponent(p);

    let b = ldexp(FOUR.div(&f, p, rm), -m);
    let g = agm(BigFloat::from_word(1, p), b, p);

    let t = pi.div(&ldexp(g, 1), p, rm);

    t.sub(&mul_by_exponent(ln_2, m - q, p), p, rm)
}

// d * n for an exponent-sized integer n.
fn mul_by_exponent(d: &BigFloat, n: Exponent, p: usize) -> BigFloat {
    let mut ret = d.mul(&BigFloat::from_word(n.unsigned_abs() as Word, p), p, RoundingMode::None);
    if n < 0 {
        ret.inv_sign();
    }
    ret
}
