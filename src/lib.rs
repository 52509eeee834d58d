//! Astro-consts computes arbitrary-precision mathematical constants with
//! convergent iterations on top of the
//! [astro-float](https://crates.io/crates/astro-float) multiple precision
//! floating point numbers.
//!
//! The crate provides:
//!
//!  - the pi number, computed by any of eight schemes ranging from the
//!    quadratic Gauss AGM to the nonic Borwein iteration and the Chudnovsky
//!    series,
//!  - ln(2) and ln(10) through the AGM method with adaptive termination,
//!  - the natural logarithm of an arbitrary positive argument,
//!  - the Euler number by direct series summation,
//!  - the exact integer square root,
//!
//! together with a precision-keyed constants cache and reference decimal
//! expansions of pi, ln(2), and e usable as correctness baselines.
//!
//! ## Examples
//!
//! ```
//! use astro_consts::{Consts, PiAlgorithm, RoundingMode};
//!
//! // Initialize the cache.
//! let mut cc = Consts::new().expect("Constants cache allocated");
//!
//! // pi and ln(2) with precision of 1024 bits.
//! let pi = cc.pi(1024, RoundingMode::ToEven).expect("pi computed");
//! let ln2 = cc.ln_2(1024, RoundingMode::ToEven).expect("ln(2) computed");
//!
//! // The nonic Borwein iteration gives the same value.
//! let pi2 = cc
//!     .pi_with(PiAlgorithm::BorweinNonic, 1024, RoundingMode::ToEven)
//!     .expect("pi computed");
//!
//! assert_eq!(pi, pi2);
//! # let _ = ln2;
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]

mod common;
mod consts;
mod defs;
mod isqrt;
mod literal;
mod ln;
mod pi;

pub use crate::common::util::iteration_count;
pub use crate::consts::Consts;
pub use crate::defs::ConvergenceOrder;
pub use crate::defs::Error;
pub use crate::isqrt::isqrt;
pub use crate::literal::E_DIGITS;
pub use crate::literal::LN2_DIGITS;
pub use crate::literal::PI_DIGITS;
pub use crate::pi::PiAlgorithm;

#[cfg(feature = "std")]
pub use crate::consts::CONSTS;

pub use astro_float_num::BigFloat;
pub use astro_float_num::Exponent;
pub use astro_float_num::Radix;
pub use astro_float_num::RoundingMode;
pub use astro_float_num::Sign;
pub use astro_float_num::Word;
pub use astro_float_num::WORD_BIT_SIZE;
