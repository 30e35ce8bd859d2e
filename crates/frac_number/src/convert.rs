use crate::{ArgumentPosition, Fraction, FractionError, FractionValue};
use hmath::{BigInt, Ratio};

impl From<i64> for Fraction {
    fn from(n: i64) -> Fraction {
        Fraction::from_int(n)
    }
}

impl Fraction {
    /// Builds `numer/denom` from dynamically typed numbers.
    ///
    /// Both operands must be integers: `Fraction::from_operands(1.5, 2)` is an
    /// `InvalidArgumentType` error, not `3/4`. Integers that don't fit in `i64`
    /// are an `Overflow` error.
    pub fn from_operands(numer: &Ratio, denom: &Ratio) -> Result<Fraction, FractionError> {
        let numer = operand_to_i64(numer, ArgumentPosition::Numerator)?;
        let denom = operand_to_i64(denom, ArgumentPosition::Denominator)?;

        Fraction::try_new(numer, denom)
    }

    /// `None` for the special values.
    pub fn to_ratio(&self) -> Option<Ratio> {
        match self.value {
            FractionValue::Finite { numer, denom } => Some(Ratio::from_denom_and_numer(
                BigInt::from(denom),
                BigInt::from(numer),
            )),
            _ => None,
        }
    }
}

fn operand_to_i64(n: &Ratio, position: ArgumentPosition) -> Result<i64, FractionError> {
    if !n.is_integer() {
        return Err(FractionError::invalid_argument_type(position, n.to_string()));
    }

    match i64::try_from(&n.truncate_bi()) {
        Ok(n) => Ok(n),
        Err(_) => Err(FractionError::overflow("construct")),
    }
}
