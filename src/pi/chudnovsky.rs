//! Chudnovsky series summed with binary splitting.
//!
//! The series coefficients are held exactly in full-precision integer
//! values; only the final combination is evaluated at the working precision:
//! pi = q 4270934400 / ((p + q 13591409) sqrt(10005)).

use crate::common::util::from_u64;
use astro_float_num::{BigFloat, RoundingMode};

fn pqr(a: u64, b: u64) -> (BigFloat, BigFloat, BigFloat) {
    if a == b - 1 {
        let n0 = from_u64(6 * b - 5);
        let n1 = from_u64(2 * b - 1);
        let n2 = from_u64(6 * b - 1);

        let r = n0.mul_full_prec(&n1).mul_full_prec(&n2);

        let n0 = from_u64(10939058860032000);
        let n1 = from_u64(b);
        let q = n1.mul_full_prec(&n1).mul_full_prec(&n1).mul_full_prec(&n0);

        let n0 = from_u64(13591409 + 545140134 * b);
        let mut p = r.mul_full_prec(&n0);

        if b & 1 != 0 {
            p.inv_sign();
        }

        (p, q, r)
    } else {
        let m = (a + b) / 2;

        let (pa, qa, ra) = pqr(a, m);
        let (pb, qb, rb) = pqr(m, b);

        let r = ra.mul_full_prec(&rb);
        let q = qa.mul_full_prec(&qb);
        let p = pa.mul_full_prec(&qb).add_full_prec(&pb.mul_full_prec(&ra));

        (p, q, r)
    }
}

/// Sums `terms` series terms and applies the final combination at
/// precision `p`.
pub(crate) fn series(p: usize, terms: usize) -> BigFloat {
    let rm = RoundingMode::None;

    let (ps, qs, _rs) = pqr(0, terms.max(1) as u64);

    let q0 = qs.mul_full_prec(&from_u64(4270934400));
    let p0 = ps.add_full_prec(&qs.mul_full_prec(&from_u64(13591409)));

    let f = BigFloat::from_word(10005, p).sqrt(p, rm);

    q0.div(&p0.mul(&f, p, rm), p, rm)
}
