use crate::{Fraction, FractionValue};
use std::fmt;

// It doesn't have a special notation for infinities and not-a-number.
// They're rendered as `1/0`, `-1/0` and `0/0`.
impl fmt::Display for Fraction {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self.denominator() {
            1 => write!(fmt, "{}", self.numerator()),
            denom => write!(fmt, "{}/{denom}", self.numerator()),
        }
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let s = match self.value {
            FractionValue::Finite { numer, denom } => format!("{numer}/{denom}"),
            FractionValue::PositiveInfinity => String::from("+inf"),
            FractionValue::NegativeInfinity => String::from("-inf"),
            FractionValue::NotANumber => String::from("NaN"),
        };

        write!(fmt, "Fraction({s})")
    }
}
