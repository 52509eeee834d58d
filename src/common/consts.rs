//! Static constants.

use astro_float_num::BigFloat;
use lazy_static::lazy_static;

lazy_static! {

    /// 1
    pub(crate) static ref ONE: BigFloat = BigFloat::from_word(1, 1);

    /// 2
    pub(crate) static ref TWO: BigFloat = BigFloat::from_word(2, 1);

    /// 3
    pub(crate) static ref THREE: BigFloat = BigFloat::from_word(3, 1);

    /// 4
    pub(crate) static ref FOUR: BigFloat = BigFloat::from_word(4, 1);

    /// 5
    pub(crate) static ref FIVE: BigFloat = BigFloat::from_word(5, 1);

    /// 7
    pub(crate) static ref SEVEN: BigFloat = BigFloat::from_word(7, 1);

    /// 9
    pub(crate) static ref NINE: BigFloat = BigFloat::from_word(9, 1);

    /// 10
    pub(crate) static ref TEN: BigFloat = BigFloat::from_word(10, 1);

    /// 25
    pub(crate) static ref TWENTYFIVE: BigFloat = BigFloat::from_word(25, 1);

    /// 27
    pub(crate) static ref TWENTYSEVEN: BigFloat = BigFloat::from_word(27, 1);
}
