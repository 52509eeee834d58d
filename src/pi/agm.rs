//! Quadratic AGM schemes.

use crate::common::util::ldexp;
use astro_float_num::{BigFloat, Exponent, RoundingMode};

/// Classic Gauss-Legendre iteration over the state (a, b, t) and a
/// power-of-2 weight; pi = (a + b)^2 / (4 t) after the final step.
pub(crate) fn gauss_legendre(p: usize, n: usize) -> BigFloat {
    let rm = RoundingMode::None;

    let mut a = BigFloat::from_word(1, p);
    let mut b = BigFloat::from_word(2, p).sqrt(p, rm).reciprocal(p, rm);
    let mut t = ldexp(BigFloat::from_word(1, p), -2);
    let mut w: Exponent = 0;

    for _ in 0..n {
        let an = ldexp(a.add(&b, p, rm), -1);
        let d = an.sub(&a, p, rm);
        let d2 = d.mul(&d, p, rm);
        t = t.sub(&ldexp(d2, w), p, rm);
        b = a.mul(&b, p, rm).sqrt(p, rm);
        a = an;
        w += 1;
    }

    let s = a.add(&b, p, rm);
    s.mul(&s, p, rm).div(&ldexp(t, 2), p, rm)
}

/// Schoenhage variant of the Gauss AGM (algorithm 16.148 in "Pi Unleashed"
/// by Arndt and Haenel). The state is (a, b, s, t), where b and the
/// accumulator s are recomputed from a^2 on every step with a term scaled by
/// 2^k; pi = (a^2 + b) / s after the final step.
pub(crate) fn schoenhage(p: usize, n: usize) -> BigFloat {
    let rm = RoundingMode::None;

    let mut a = BigFloat::from_word(1, p);
    let mut b = ldexp(BigFloat::from_word(1, p), -1);
    let mut s = b.clone();
    let mut t = ldexp(BigFloat::from_word(3, p), -3);

    for k in 1..=n {
        a = ldexp(a.add(&b.sqrt(p, rm), p, rm), -1);
        let sq = a.mul(&a, p, rm);
        b = ldexp(sq.sub(&t, p, rm), 1);

        let term = ldexp(b.sub(&sq, p, rm), k as Exponent);
        s = s.add(&term, p, rm);

        t = ldexp(sq.add(&b, p, rm), -2);
    }

    let sq = a.mul(&a, p, rm);
    sq.add(&b, p, rm).div(&s, p, rm)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::common::util::{bits_to_digits, iteration_count};
    use crate::defs::ConvergenceOrder;

    fn close_to_pi(val: &BigFloat, p: usize) -> bool {
        let pi = BigFloat::parse(
            crate::literal::PI_DIGITS,
            astro_float_num::Radix::Dec,
            p,
            RoundingMode::None,
        );
        // the 2^k term scaling amplifies late rounding errors, hence the
        // slack
        let d = val.sub(&pi, p, RoundingMode::None);
        d.is_zero() || d.exponent().unwrap() < 32 - (p as Exponent)
    }

    #[test]
    fn test_gauss_legendre() {
        let p = 640;
        let n = iteration_count(bits_to_digits(p), ConvergenceOrder::Quadratic);
        let val = gauss_legendre(p, n);
        assert!(close_to_pi(&val, p));
    }

    #[test]
    fn test_schoenhage() {
        let p = 640;
        let n = iteration_count(bits_to_digits(p), ConvergenceOrder::Quadratic);
        let val = schoenhage(p, n);
        assert!(close_to_pi(&val, p));
    }
}
