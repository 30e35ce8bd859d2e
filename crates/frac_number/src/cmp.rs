use crate::{Fraction, FractionValue};

impl Fraction {
    /// `self > other`
    ///
    /// Finite values are compared exactly. Positive infinity is greater than
    /// anything but itself. Any other comparison that involves a special value
    /// is false, including `1 > -inf`. That's why `Fraction` doesn't implement
    /// `PartialOrd`: this relation is not an ordering.
    pub fn greater_than(&self, other: &Fraction) -> bool {
        match (self.value, other.value) {
            // denominators are positive, so the direction of the comparison doesn't change
            (
                FractionValue::Finite { numer: an, denom: ad },
                FractionValue::Finite { numer: bn, denom: bd },
            ) => an as i128 * bd as i128 > bn as i128 * ad as i128,
            (a, b) if a == b => false,
            (FractionValue::PositiveInfinity, _) => true,
            _ => false,
        }
    }

    /// Compares the canonical numerator/denominator pairs.
    ///
    /// It's the same as `==` except that not-a-number is identical to itself.
    pub fn is_identical(&self, other: &Fraction) -> bool {
        self.value == other.value
    }
}

/// Not-a-number is not equal to anything, not even to itself.
impl PartialEq for Fraction {
    fn eq(&self, other: &Fraction) -> bool {
        !self.is_nan() && self.is_identical(other)
    }
}
