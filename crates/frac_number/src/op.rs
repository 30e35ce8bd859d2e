use crate::{Fraction, FractionError, FractionValue};
use log::debug;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl Fraction {
    pub fn checked_add(&self, other: &Fraction) -> Result<Fraction, FractionError> {
        match (self.value, other.value) {
            (
                FractionValue::Finite { numer: an, denom: ad },
                FractionValue::Finite { numer: bn, denom: bd },
            ) => add_finite(an as i128, ad as i128, bn as i128, bd as i128, "add"),
            _ => Ok(add_special(self, other)),
        }
    }

    /// `self + (-other)`
    pub fn checked_sub(&self, other: &Fraction) -> Result<Fraction, FractionError> {
        match (self.value, other.value) {
            // `-other` is not narrowed to `i64` here, so `-1 - i64::MIN` still works
            (
                FractionValue::Finite { numer: an, denom: ad },
                FractionValue::Finite { numer: bn, denom: bd },
            ) => add_finite(an as i128, ad as i128, -(bn as i128), bd as i128, "subtract"),
            _ => self.checked_add(&other.checked_neg()?),
        }
    }

    pub fn checked_mul(&self, other: &Fraction) -> Result<Fraction, FractionError> {
        match (self.value, other.value) {
            (
                FractionValue::Finite { numer: an, denom: ad },
                FractionValue::Finite { numer: bn, denom: bd },
            ) => Fraction::reduce(
                an as i128 * bn as i128,
                ad as i128 * bd as i128,
                "multiply",
            ),
            _ => Ok(mul_special(self, other)),
        }
    }

    /// Only `i64::MIN` overflows.
    pub fn checked_neg(&self) -> Result<Fraction, FractionError> {
        // infinities and not-a-number go through `reduce` too, which flips `1/0` and `-1/0`
        Fraction::reduce(
            -(self.numerator() as i128),
            self.denominator() as i128,
            "negate",
        )
    }
}

// a/b + c/d = (ad + bc) / bd
fn add_finite(an: i128, ad: i128, bn: i128, bd: i128, operation: &'static str) -> Result<Fraction, FractionError> {
    Fraction::reduce(bd * an + ad * bn, ad * bd, operation)
}

fn add_special(a: &Fraction, b: &Fraction) -> Fraction {
    match (a.value, b.value) {
        (FractionValue::NotANumber, _) | (_, FractionValue::NotANumber) => Fraction::NAN,
        (FractionValue::PositiveInfinity, FractionValue::NegativeInfinity)
        | (FractionValue::NegativeInfinity, FractionValue::PositiveInfinity) => {
            debug!("indeterminate form: {a:?} + {b:?}");
            Fraction::NAN
        },
        (FractionValue::PositiveInfinity, _) | (_, FractionValue::PositiveInfinity) => Fraction::INFINITY,
        _ => Fraction::NEG_INFINITY,
    }
}

fn mul_special(a: &Fraction, b: &Fraction) -> Fraction {
    if a.is_nan() || b.is_nan() {
        Fraction::NAN
    }

    // 0 * inf
    else if a.numerator() == 0 || b.numerator() == 0 {
        debug!("indeterminate form: {a:?} * {b:?}");
        Fraction::NAN
    }

    else if a.sign() * b.sign() == -1 {
        Fraction::NEG_INFINITY
    }

    else {
        Fraction::INFINITY
    }
}

fn unwrap_or_panic(result: Result<Fraction, FractionError>) -> Fraction {
    match result {
        Ok(f) => f,
        Err(e) => panic!("{e}"),
    }
}

// The operators panic on overflow, like the operators of primitive integers.
// Use `checked_*` methods to handle it.
macro_rules! impl_binary_op {
    ($op: ident, $method: ident, $op_assign: ident, $method_assign: ident, $checked: ident) => {
        impl $op for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: Fraction) -> Fraction {
                unwrap_or_panic(self.$checked(&rhs))
            }
        }

        impl $op<&Fraction> for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: &Fraction) -> Fraction {
                unwrap_or_panic(self.$checked(rhs))
            }
        }

        impl $op<Fraction> for &Fraction {
            type Output = Fraction;

            fn $method(self, rhs: Fraction) -> Fraction {
                unwrap_or_panic(self.$checked(&rhs))
            }
        }

        impl $op<&Fraction> for &Fraction {
            type Output = Fraction;

            fn $method(self, rhs: &Fraction) -> Fraction {
                unwrap_or_panic(self.$checked(rhs))
            }
        }

        impl $op_assign for Fraction {
            fn $method_assign(&mut self, rhs: Fraction) {
                *self = unwrap_or_panic(self.$checked(&rhs));
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, checked_add);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, checked_sub);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, checked_mul);

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        unwrap_or_panic(self.checked_neg())
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        unwrap_or_panic(self.checked_neg())
    }
}
