//! Constants cache.

mod e;
mod ln10;
mod ln2;
mod pi;

#[cfg(feature = "std")]
mod std;

use crate::common::util::{checked, round_p};
use crate::consts::e::ECache;
use crate::consts::ln10::Ln10Cache;
use crate::consts::ln2::Ln2Cache;
use crate::consts::pi::PiCache;
use crate::defs::Error;
use crate::ln;
use crate::pi::PiAlgorithm;
use astro_float_num::{BigFloat, RoundingMode, WORD_BIT_SIZE};

#[cfg(feature = "std")]
pub use crate::consts::std::CONSTS;

/// Constants cache contains arbitrary-precision mathematical constants.
///
/// Each constant keeps the value of its last computation together with the
/// precision it was computed at. A request at or below the cached precision
/// is served by rounding the cached value; a larger request recomputes the
/// constant and replaces the cache entry as a whole. Concurrent use is a
/// matter of ownership: either keep one cache per thread (the thread-local
/// `CONSTS` does that), or guard a shared instance with a mutex.
#[derive(Debug)]
pub struct Consts {
    pi: PiCache,
    e: ECache,
    ln2: Ln2Cache,
    ln10: Ln10Cache,
}

/// In an ideal situation, the `Consts` structure is initialized with
/// `Consts::new` only once, and then used where needed.
impl Consts {
    /// Initializes the constants cache.
    ///
    /// ## Errors
    ///
    ///  - Numeric, NonFinite: the underlying arithmetic failed.
    pub fn new() -> Result<Self, Error> {
        Ok(Consts {
            pi: PiCache::new()?,
            e: ECache::new()?,
            ln2: Ln2Cache::new()?,
            ln10: Ln10Cache::new()?,
        })
    }

    /// Returns the value of the pi number with precision `p` using rounding
    /// mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: precision is incorrect.
    ///  - Numeric, NonFinite: the underlying arithmetic failed.
    pub fn pi(&mut self, p: usize, rm: RoundingMode) -> Result<BigFloat, Error> {
        if p == 0 {
            return Err(Error::InvalidArgument);
        }

        self.pi.for_prec(p, rm)
    }

    /// Returns the value of the pi number with precision `p` using rounding
    /// mode `rm`, computed by the variant `algo`. The cache is reused when
    /// the cached value was produced by the same variant, and replaced
    /// otherwise.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: precision is incorrect.
    ///  - Numeric, NonFinite: the underlying arithmetic failed.
    pub fn pi_with(
        &mut self,
        algo: PiAlgorithm,
        p: usize,
        rm: RoundingMode,
    ) -> Result<BigFloat, Error> {
        if p == 0 {
            return Err(Error::InvalidArgument);
        }

        self.pi.for_prec_with(algo, p, rm)
    }

    /// Returns the value of the Euler number with precision `p` using
    /// rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: precision is incorrect.
    ///  - Numeric, NonFinite: the underlying arithmetic failed.
    pub fn e(&mut self, p: usize, rm: RoundingMode) -> Result<BigFloat, Error> {
        if p == 0 {
            return Err(Error::InvalidArgument);
        }

        self.e.for_prec(p, rm)
    }

    /// Returns the value of the natural logarithm of 2 with precision `p`
    /// using rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: precision is incorrect.
    ///  - Numeric, NonFinite: the underlying arithmetic failed.
    pub fn ln_2(&mut self, p: usize, rm: RoundingMode) -> Result<BigFloat, Error> {
        if p == 0 {
            return Err(Error::InvalidArgument);
        }

        self.ln2.for_prec(p, rm, &mut self.pi)
    }

    /// Returns the value of the natural logarithm of 10 with precision `p`
    /// using rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: precision is incorrect.
    ///  - Numeric, NonFinite: the underlying arithmetic failed.
    pub fn ln_10(&mut self, p: usize, rm: RoundingMode) -> Result<BigFloat, Error> {
        if p == 0 {
            return Err(Error::InvalidArgument);
        }

        self.ln10.for_prec(p, rm, &mut self.pi, &mut self.ln2)
    }

    /// Returns the natural logarithm of `x` with precision `p` using
    /// rounding mode `rm`. The computation combines pi and ln(2) from the
    /// cache with an AGM evaluation at the scaled argument.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: precision is incorrect, or `x` is not a positive
    ///    finite number.
    ///  - Numeric, NonFinite: the underlying arithmetic failed.
    pub fn ln(&mut self, x: &BigFloat, p: usize, rm: RoundingMode) -> Result<BigFloat, Error> {
        if p == 0 || x.is_nan() || x.is_inf() || x.is_zero() || x.is_negative() {
            return Err(Error::InvalidArgument);
        }

        let p_wrk = round_p(p) + 2 * WORD_BIT_SIZE;

        let pi_val = self.pi.for_prec(p_wrk, RoundingMode::None)?;
        let ln2_val = self.ln2.for_prec(p_wrk, RoundingMode::None, &mut self.pi)?;

        let mut ret = checked(ln::ln(x, &pi_val, &ln2_val, p_wrk))?;
        ret.set_precision(p, rm)?;

        Ok(ret)
    }
}
