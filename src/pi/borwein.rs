//! Borwein family of iterations, orders 2 through 9.
//!
//! The update formulas are the published ones from Borwein and Borwein,
//! "Pi and the AGM"; each is reproduced as a closed-form state update.

use crate::common::consts::{FIVE, FOUR, NINE, ONE, SEVEN, THREE, TWENTYFIVE, TWENTYSEVEN, TWO};
use crate::common::util::{kth_root, ldexp};
use astro_float_num::{BigFloat, RoundingMode};

/// Quadratic scheme: a = sqrt(2), b = 0, p = 2 + sqrt(2); p converges to pi.
pub(crate) fn quadratic(p: usize, n: usize) -> BigFloat {
    let rm = RoundingMode::None;

    let sqrt2 = TWO.sqrt(p, rm);
    let mut a = sqrt2.clone();
    let mut b = BigFloat::from_word(0, p);
    let mut pn = TWO.add(&sqrt2, p, rm);

    for _ in 0..n {
        let sa = a.sqrt(p, rm);
        let an = ldexp(sa.add(&sa.reciprocal(p, rm), p, rm), -1);
        let bn = ONE.add(&b, p, rm).mul(&sa, p, rm).div(&a.add(&b, p, rm), p, rm);
        a = an;
        b = bn;
        pn = ONE.add(&a, p, rm).mul(&pn, p, rm).mul(&b, p, rm).div(&ONE.add(&b, p, rm), p, rm);
    }

    pn
}

/// Cubic scheme: a = 1/3, s = (sqrt(3) - 1) / 2, and a power-of-3 weight;
/// 1/a converges to pi.
pub(crate) fn cubic(p: usize, n: usize) -> BigFloat {
    let rm = RoundingMode::None;

    let mut a = THREE.reciprocal(p, rm);
    let mut s = ldexp(THREE.sqrt(p, rm).sub(&ONE, p, rm), -1);
    let mut pow3 = BigFloat::from_word(1, p);

    for _ in 0..n {
        // r = 3 / (1 + 2 cbrt(1 - s^3))
        let s3 = s.mul(&s, p, rm).mul(&s, p, rm);
        let c = ONE.sub(&s3, p, rm).cbrt(p, rm);
        let r = THREE.div(&ONE.add(&ldexp(c, 1), p, rm), p, rm);

        s = ldexp(r.sub(&ONE, p, rm), -1);

        let r2 = r.mul(&r, p, rm);
        a = r2.mul(&a, p, rm).sub(&pow3.mul(&r2.sub(&ONE, p, rm), p, rm), p, rm);
        pow3 = pow3.mul(&THREE, p, rm);
    }

    a.reciprocal(p, rm)
}

/// Quartic scheme: y = sqrt(2) - 1, a = 2 y^2; 1/a converges to pi.
pub(crate) fn quartic(p: usize, n: usize) -> BigFloat {
    let rm = RoundingMode::None;

    let mut y = TWO.sqrt(p, rm).sub(&ONE, p, rm);
    let mut a = ldexp(y.mul(&y, p, rm), 1);
    let mut pw = BigFloat::from_word(8, p);

    for _ in 0..n {
        let y2 = y.mul(&y, p, rm);
        let y4 = y2.mul(&y2, p, rm);
        let root = ONE.sub(&y4, p, rm).sqrt(p, rm).sqrt(p, rm);
        y = ONE.sub(&root, p, rm).div(&ONE.add(&root, p, rm), p, rm);

        let yp1 = ONE.add(&y, p, rm);
        let yp1_2 = yp1.mul(&yp1, p, rm);
        let yp1_4 = yp1_2.mul(&yp1_2, p, rm);

        // 1 + y + y^2
        let poly = ONE.add(&y, p, rm).add(&y.mul(&y, p, rm), p, rm);

        a = a.mul(&yp1_4, p, rm).sub(&pw.mul(&y, p, rm).mul(&poly, p, rm), p, rm);
        pw = ldexp(pw, 2);
    }

    a.reciprocal(p, rm)
}

/// Quintic scheme: a = 1/2, s = 5 (sqrt(5) - 2), and a power-of-5 weight;
/// 1/a converges to pi.
pub(crate) fn quintic(p: usize, n: usize) -> BigFloat {
    let rm = RoundingMode::None;

    let sqrt5 = FIVE.sqrt(p, rm);
    let mut a = ldexp(BigFloat::from_word(1, p), -1);
    let mut s = FIVE.mul(&sqrt5.sub(&TWO, p, rm), p, rm);
    let mut pw = BigFloat::from_word(1, p);

    for _ in 0..n {
        let x = FIVE.div(&s, p, rm).sub(&ONE, p, rm);
        let xm1 = x.sub(&ONE, p, rm);
        let y = xm1.mul(&xm1, p, rm).add(&SEVEN, p, rm);

        // y^2 - 4 x^3 = (x - 4)^2 (x^2 + 4); the factored form keeps the
        // radicand nonnegative near the fixed point x = 4
        let xm4 = x.sub(&FOUR, p, rm);
        let rad = xm4.mul(&xm4, p, rm).mul(&x.mul(&x, p, rm).add(&FOUR, p, rm), p, rm);

        // z = (x/2 (y + sqrt(y^2 - 4 x^3)))^(1/5)
        let z_arg = ldexp(x.clone(), -1).mul(&y.add(&rad.sqrt(p, rm), p, rm), p, rm);
        let z = kth_root(&z_arg, 5, p);

        // the a update uses s of the current step
        let s2 = s.mul(&s, p, rm);
        let u = s.mul(&s2.sub(&ldexp(s.clone(), 1), p, rm).add(&FIVE, p, rm), p, rm).sqrt(p, rm);
        let t = ldexp(s2.sub(&FIVE, p, rm), -1).add(&u, p, rm);
        a = s2.mul(&a, p, rm).sub(&pw.mul(&t, p, rm), p, rm);

        // s = 25 / ((z + x/z + 1)^2 s)
        let w = z.add(&x.div(&z, p, rm), p, rm).add(&ONE, p, rm);
        s = TWENTYFIVE.div(&w.mul(&w, p, rm).mul(&s, p, rm), p, rm);
        pw = pw.mul(&FIVE, p, rm);
    }

    a.reciprocal(p, rm)
}

/// Nonic scheme: a = 1/3, r = (sqrt(3) - 1) / 2, s = cbrt(1 - r^3), and a
/// power-of-9 weight starting at 1/3; 1/a converges to pi.
pub(crate) fn nonic(p: usize, n: usize) -> BigFloat {
    let rm = RoundingMode::None;

    let mut a = THREE.reciprocal(p, rm);
    let mut r = ldexp(THREE.sqrt(p, rm).sub(&ONE, p, rm), -1);
    let r3 = r.mul(&r, p, rm).mul(&r, p, rm);
    let mut s = ONE.sub(&r3, p, rm).cbrt(p, rm);
    let mut pw = THREE.reciprocal(p, rm);

    for _ in 0..n {
        let t = ONE.add(&ldexp(r.clone(), 1), p, rm);
        let u = NINE
            .mul(&r, p, rm)
            .mul(&ONE.add(&r, p, rm).add(&r.mul(&r, p, rm), p, rm), p, rm)
            .cbrt(p, rm);

        // v = t^2 + t u + u^2
        let v = t.mul(&t, p, rm).add(&t.mul(&u, p, rm), p, rm).add(&u.mul(&u, p, rm), p, rm);

        let w = TWENTYSEVEN
            .mul(&ONE.add(&s, p, rm).add(&s.mul(&s, p, rm), p, rm), p, rm)
            .div(&v, p, rm);

        a = w.mul(&a, p, rm).add(&pw.mul(&ONE.sub(&w, p, rm), p, rm), p, rm);

        // s = (1 - r)^3 / ((t + 2 u) v)
        let omr = ONE.sub(&r, p, rm);
        let omr3 = omr.mul(&omr, p, rm).mul(&omr, p, rm);
        s = omr3.div(&t.add(&ldexp(u, 1), p, rm).mul(&v, p, rm), p, rm);

        let s3 = s.mul(&s, p, rm).mul(&s, p, rm);
        r = ONE.sub(&s3, p, rm).cbrt(p, rm);
        pw = NINE.mul(&pw, p, rm);
    }

    a.reciprocal(p, rm)
}
