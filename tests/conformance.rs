//! Conformance of the computed constants to the embedded reference
//! expansions.

use astro_consts::{
    isqrt, BigFloat, Consts, PiAlgorithm, Radix, RoundingMode, E_DIGITS, LN2_DIGITS, PI_DIGITS,
};

fn abs_diff(a: &BigFloat, b: &BigFloat, p: usize) -> BigFloat {
    let mut d = a.sub(b, p, RoundingMode::None);
    if d.is_negative() {
        d.inv_sign();
    }
    d
}

fn assert_below(d: &BigFloat, eps: &BigFloat, msg: &str) {
    assert!(d.is_zero() || d.cmp(eps).map_or(false, |c| c < 0), "{}", msg);
}

#[test]
fn fifty_digit_scenario() {
    let p = 192;
    let rm = RoundingMode::ToEven;
    let mut cc = Consts::new().unwrap();

    let eps = BigFloat::parse("1.0e-49", Radix::Dec, 64, RoundingMode::None);

    let pi = cc.pi(p, rm).unwrap();
    let r = BigFloat::parse(
        "3.14159265358979323846264338327950288419716939937510",
        Radix::Dec,
        p,
        RoundingMode::None,
    );
    assert_below(&abs_diff(&pi, &r, p), &eps, "pi to 50 digits");

    let ln2 = cc.ln_2(p, rm).unwrap();
    let r = BigFloat::parse(
        "0.69314718055994530941723212145817656807550013436025",
        Radix::Dec,
        p,
        RoundingMode::None,
    );
    assert_below(&abs_diff(&ln2, &r, p), &eps, "ln(2) to 50 digits");
}

#[test]
fn literal_fixtures_across_precisions() {
    let rm = RoundingMode::ToEven;
    let mut cc = Consts::new().unwrap();

    for p in [64, 192, 320, 640, 1024, 2048, 3200] {
        let r = BigFloat::parse(PI_DIGITS, Radix::Dec, p, rm);
        assert_eq!(cc.pi(p, rm).unwrap(), r, "pi at {} bits", p);

        let r = BigFloat::parse(LN2_DIGITS, Radix::Dec, p, rm);
        assert_eq!(cc.ln_2(p, rm).unwrap(), r, "ln(2) at {} bits", p);

        let r = BigFloat::parse(E_DIGITS, Radix::Dec, p, rm);
        assert_eq!(cc.e(p, rm).unwrap(), r, "e at {} bits", p);
    }
}

#[test]
fn cross_algorithm_agreement_at_1000_digits() {
    // 1000 decimal digits is about 3322 bits
    let p = 3328;
    let rm = RoundingMode::ToEven;
    let mut cc = Consts::new().unwrap();

    let r = BigFloat::parse(PI_DIGITS, Radix::Dec, p, RoundingMode::None);
    let eps = BigFloat::parse("1.0e-995", Radix::Dec, 64, RoundingMode::None);

    for algo in PiAlgorithm::ALL {
        let pi = cc.pi_with(algo, p, rm).unwrap();
        let d = abs_diff(&pi, &r, p);
        assert_below(&d, &eps, &format!("{:?} against the reference", algo));
    }
}

#[test]
fn ln2_pi_relation() {
    // the computed ln(2) and the computed pi reproduce the embedded ln(2)
    // expansion through the AGM identity used by the calculator
    let p = 1024;
    let mut cc = Consts::new().unwrap();

    let ln2 = cc.ln_2(p, RoundingMode::ToEven).unwrap();

    let r = BigFloat::parse(LN2_DIGITS, Radix::Dec, p, RoundingMode::None);
    let eps = BigFloat::parse("1.0e-300", Radix::Dec, 64, RoundingMode::None);

    assert_below(&abs_diff(&ln2, &r, p), &eps, "ln(2) relation");

    // and ln(4) is twice ln(2)
    let four = BigFloat::from_word(4, p);
    let ln4 = cc.ln(&four, p, RoundingMode::ToEven).unwrap();
    let twice = ln2.add(&ln2, p, RoundingMode::ToEven);
    assert_eq!(ln4, twice);
}

#[test]
fn cache_monotonic_growth() {
    let rm = RoundingMode::ToEven;
    let mut cc = Consts::new().unwrap();

    let small = cc.pi(256, rm).unwrap();
    let r256 = BigFloat::parse(PI_DIGITS, Radix::Dec, 256, rm);
    assert_eq!(small, r256);

    // growing the precision must not degrade a later small request
    let big = cc.pi(2048, rm).unwrap();
    let r2048 = BigFloat::parse(PI_DIGITS, Radix::Dec, 2048, rm);
    assert_eq!(big, r2048);

    let small_again = cc.pi(256, rm).unwrap();
    assert_eq!(small_again, r256);
}

#[test]
fn idempotence() {
    let rm = RoundingMode::ToEven;
    let mut cc = Consts::new().unwrap();

    for p in [192, 1024] {
        assert_eq!(cc.pi(p, rm).unwrap(), cc.pi(p, rm).unwrap());
        assert_eq!(cc.e(p, rm).unwrap(), cc.e(p, rm).unwrap());
        assert_eq!(cc.ln_2(p, rm).unwrap(), cc.ln_2(p, rm).unwrap());
        assert_eq!(cc.ln_10(p, rm).unwrap(), cc.ln_10(p, rm).unwrap());
    }
}

#[test]
fn general_logarithm() {
    let p = 640;
    let rm = RoundingMode::ToEven;
    let mut cc = Consts::new().unwrap();

    // ln(e) == 1
    let e = cc.e(p + 128, RoundingMode::None).unwrap();
    let v = cc.ln(&e, p, rm).unwrap();
    let one = BigFloat::from_word(1, p);
    let eps = BigFloat::parse("1.0e-180", Radix::Dec, 64, RoundingMode::None);
    assert_below(&abs_diff(&v, &one, p), &eps, "ln(e)");

    // ln(10) == ln(5) + ln(2)
    let ln10 = cc.ln_10(p, rm).unwrap();
    let five = BigFloat::from_word(5, p);
    let sum = cc
        .ln(&five, p, rm)
        .unwrap()
        .add(&cc.ln_2(p, rm).unwrap(), p, rm);
    assert_below(&abs_diff(&ln10, &sum, p), &eps, "ln(10) = ln(5) + ln(2)");
}

#[test]
fn integer_sqrt_contract() {
    let one = BigFloat::from_word(1, 64);

    for v in [0u64, 1, 2, 3, 4, 120, 121, 122, 1 << 62] {
        let n = BigFloat::parse(&format!("{}", v), Radix::Dec, 128, RoundingMode::None);
        let r = isqrt(&n).unwrap();

        let r2 = r.mul_full_prec(&r);
        assert!(r2.cmp(&n).map_or(false, |c| c <= 0), "n = {}", v);

        let r1 = r.add_full_prec(&one);
        assert!(
            r1.mul_full_prec(&r1).cmp(&n).map_or(false, |c| c > 0),
            "n = {}",
            v
        );

        let rr = (v as f64).sqrt().floor() as u64;
        let expected = BigFloat::parse(&format!("{}", rr), Radix::Dec, 128, RoundingMode::None);
        assert_eq!(r.cmp(&expected), Some(0), "n = {}", v);
    }
}
