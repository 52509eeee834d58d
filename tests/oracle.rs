//! Comparison of the computed values against MPFR/GMP at bit level.

#![cfg(target_arch = "x86_64")]

use astro_consts::{isqrt, BigFloat, Consts, PiAlgorithm, Radix, RoundingMode, WORD_BIT_SIZE};
use rand::random;
use rug::{float::Constant, Float, Integer};

// "{:b}" of BigFloat prints the exponent in binary; mpfr expects it decimal.
fn conv_str_to_mpfr_compat(s: String) -> String {
    let (sig, exp) = if let Some(pos) = s.find('e') {
        s.split_at(pos + 1)
    } else {
        (s.as_str(), "0")
    };
    let expn = i64::from_str_radix(exp, 2).unwrap();
    sig.to_owned() + &expn.to_string()
}

fn conv_to_mpfr(p: usize, n: &BigFloat) -> Float {
    let s = conv_str_to_mpfr_compat(format!("{:b}", n));
    Float::with_val(p as u32, Float::parse_radix(s, 2).unwrap())
}

#[test]
fn mpfr_compare_const() {
    let run_cnt = 20;

    let p_rng = 50;
    let p_min = 1;

    for _ in 0..run_cnt {
        let p = (random::<usize>() % p_rng + p_min) * WORD_BIT_SIZE;

        let mut cc = Consts::new().unwrap();
        let rm = RoundingMode::ToEven;

        // pi
        let n1 = cc.pi(p, rm).unwrap();
        let f1 = Float::with_val(p as u32, Constant::Pi);
        assert_eq!(conv_to_mpfr(p, &n1), f1, "const pi at {} bits", p);

        // ln(2)
        let n1 = cc.ln_2(p, rm).unwrap();
        let f1 = Float::with_val(p as u32, Constant::Log2);
        assert_eq!(conv_to_mpfr(p, &n1), f1, "const ln(2) at {} bits", p);

        // e
        let n1 = cc.e(p, rm).unwrap();
        let f1 = Float::with_val(p as u32, 1u32).exp();
        assert_eq!(conv_to_mpfr(p, &n1), f1, "const e at {} bits", p);

        // ln(10)
        let n1 = cc.ln_10(p, rm).unwrap();
        let f1 = Float::with_val(p as u32, 10u32).ln();
        assert_eq!(conv_to_mpfr(p, &n1), f1, "const ln(10) at {} bits", p);
    }
}

#[test]
fn mpfr_compare_pi_variants() {
    let p = 1024;
    let rm = RoundingMode::ToEven;
    let mut cc = Consts::new().unwrap();

    let f1 = Float::with_val(p as u32, Constant::Pi);

    for algo in PiAlgorithm::ALL {
        let n1 = cc.pi_with(algo, p, rm).unwrap();
        assert_eq!(conv_to_mpfr(p, &n1), f1, "{:?}", algo);
    }
}

#[test]
fn gmp_compare_integer_sqrt() {
    let run_cnt = 200;

    for _ in 0..run_cnt {
        // a random integer of 1 to 150 decimal digits
        let len = random::<usize>() % 150 + 1;
        let mut s = String::new();
        s.push((b'1' + random::<u8>() % 9) as char);
        for _ in 1..len {
            s.push((b'0' + random::<u8>() % 10) as char);
        }

        let n_gmp = Integer::from_str_radix(&s, 10).unwrap();
        let p = round_to_word(n_gmp.significant_bits() as usize + WORD_BIT_SIZE);
        let n = BigFloat::parse(&s, Radix::Dec, p, RoundingMode::None);

        let r = isqrt(&n).unwrap();
        let r_gmp = n_gmp.sqrt();

        let r_ref = BigFloat::parse(&r_gmp.to_string(), Radix::Dec, p, RoundingMode::None);
        assert_eq!(r.cmp(&r_ref), Some(0), "sqrt of {}", s);
    }
}

fn round_to_word(p: usize) -> usize {
    ((p + WORD_BIT_SIZE - 1) / WORD_BIT_SIZE) * WORD_BIT_SIZE
}
