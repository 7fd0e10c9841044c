use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/// A value split the way a tape measure reads it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MixedNumber {
    /// An integer, e.g. `8`
    Whole(BigInt),
    /// A whole part and an unsigned proper fraction, e.g. `4 1/4`
    Mixed { whole: BigInt, fraction: BigRational },
    /// A value strictly between -1 and 1, e.g. `1/2`
    Proper(BigRational),
}

/// Split a rational into its mixed-number parts
///
/// The whole part is truncated toward zero, so the sign always lives on the
/// whole part and the fraction is unsigned.
pub fn to_mixed_number(value: &BigRational) -> MixedNumber {
    if value.is_integer() {
        return MixedNumber::Whole(value.to_integer());
    }

    if value.abs() >= BigRational::one() {
        let whole = value.trunc().to_integer();
        let fraction = value.fract().abs();
        if fraction.is_zero() {
            return MixedNumber::Whole(whole);
        }
        return MixedNumber::Mixed { whole, fraction };
    }

    MixedNumber::Proper(value.clone())
}

impl fmt::Display for MixedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MixedNumber::Whole(whole) => write!(f, "{whole}"),
            MixedNumber::Mixed { whole, fraction } => {
                write!(f, "{whole} {}/{}", fraction.numer(), fraction.denom())
            }
            MixedNumber::Proper(fraction) => write!(f, "{}/{}", fraction.numer(), fraction.denom()),
        }
    }
}
