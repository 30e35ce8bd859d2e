#![deny(unused_imports)]

//! Exact fractions over `i64`, with positive infinity, negative infinity and
//! not-a-number for the results of dividing by zero.

mod cmp;
mod convert;
mod error;
mod fmt;
mod op;


pub use error::{ArgumentPosition, FractionError};
use log::debug;

/// A rational number in lowest terms, or one of the special values.
///
/// Every value has exactly one representation: `4/5`, `24/30` and `-20/-25`
/// are the same `Fraction`. The sign always lives in the numerator.
#[derive(Clone, Copy)]
pub struct Fraction {
    value: FractionValue,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum FractionValue {
    // `denom` is always greater than 0, and `gcd(numer, denom)` is 1.
    // Zero is `0/1`.
    Finite { numer: i64, denom: i64 },
    PositiveInfinity,
    NegativeInfinity,
    NotANumber,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SpecialValue {
    PositiveInfinity,
    NegativeInfinity,
    NotANumber,
}

impl Fraction {
    pub const ZERO: Fraction = Fraction::finite(0, 1);
    pub const ONE: Fraction = Fraction::finite(1, 1);
    pub const INFINITY: Fraction = Fraction { value: FractionValue::PositiveInfinity };
    pub const NEG_INFINITY: Fraction = Fraction { value: FractionValue::NegativeInfinity };
    pub const NAN: Fraction = Fraction { value: FractionValue::NotANumber };

    /// Reduces `numer/denom` to lowest terms.
    ///
    /// A zero denominator is not an error: `n/0` is positive or negative
    /// infinity depending on the sign of `n`, and `0/0` is not-a-number.
    ///
    /// # Panics
    ///
    /// Panics if the reduced fraction doesn't fit in `i64`. It only happens
    /// when `numer` is `i64::MIN` and `denom` is negative, for example
    /// `Fraction::new(i64::MIN, -1)`. Use [`Fraction::try_new`] to get an error instead.
    pub fn new(numer: i64, denom: i64) -> Self {
        match Fraction::try_new(numer, denom) {
            Ok(f) => f,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn try_new(numer: i64, denom: i64) -> Result<Self, FractionError> {
        Fraction::reduce(numer as i128, denom as i128, "construct")
    }

    /// `n/1`
    pub fn from_int(n: i64) -> Self {
        Fraction::finite(n, 1)
    }

    const fn finite(numer: i64, denom: i64) -> Self {
        Fraction {
            value: FractionValue::Finite { numer, denom },
        }
    }

    // Every operation builds its result here. Only narrowing to `i64` can fail.
    pub(crate) fn reduce(numer: i128, denom: i128, operation: &'static str) -> Result<Self, FractionError> {
        let mut g = gcd(numer.unsigned_abs(), denom.unsigned_abs());

        // 0/0
        if g == 0 {
            g = 1;
        }

        let mut numer = numer / g as i128;
        let mut denom = denom / g as i128;

        if denom < 0 {
            numer = -numer;
            denom = -denom;
        }

        if denom == 0 {
            return Ok(match numer {
                0 => Fraction::NAN,
                1.. => Fraction::INFINITY,
                _ => Fraction::NEG_INFINITY,
            });
        }

        match (i64::try_from(numer), i64::try_from(denom)) {
            (Ok(numer), Ok(denom)) => Ok(Fraction::finite(numer, denom)),
            _ => {
                debug!("{operation} overflowed: {numer}/{denom} doesn't fit in i64");
                Err(FractionError::overflow(operation))
            },
        }
    }

    /// The canonical numerator. Not-a-number is `0/0` and the infinities are `1/0` and `-1/0`.
    pub fn numerator(&self) -> i64 {
        match self.value {
            FractionValue::Finite { numer, .. } => numer,
            FractionValue::PositiveInfinity => 1,
            FractionValue::NegativeInfinity => -1,
            FractionValue::NotANumber => 0,
        }
    }

    /// Always greater than or equal to 0. It's 0 only for the special values.
    pub fn denominator(&self) -> i64 {
        match self.value {
            FractionValue::Finite { denom, .. } => denom,
            _ => 0,
        }
    }

    /// 1 or -1. Zero and not-a-number have sign 1.
    pub fn sign(&self) -> i8 {
        if self.numerator() < 0 { -1 } else { 1 }
    }

    pub fn special_value(&self) -> Option<SpecialValue> {
        match self.value {
            FractionValue::Finite { .. } => None,
            FractionValue::PositiveInfinity => Some(SpecialValue::PositiveInfinity),
            FractionValue::NegativeInfinity => Some(SpecialValue::NegativeInfinity),
            FractionValue::NotANumber => Some(SpecialValue::NotANumber),
        }
    }

    pub fn is_finite(&self) -> bool {
        matches!(self.value, FractionValue::Finite { .. })
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self.value, FractionValue::PositiveInfinity | FractionValue::NegativeInfinity)
    }

    pub fn is_nan(&self) -> bool {
        matches!(self.value, FractionValue::NotANumber)
    }

    pub fn is_zero(&self) -> bool {
        matches!(self.value, FractionValue::Finite { numer: 0, .. })
    }

    pub fn is_integer(&self) -> bool {
        matches!(self.value, FractionValue::Finite { denom: 1, .. })
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }

    a
}
