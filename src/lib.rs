#![deny(unused_imports)]

//! Exact fractions with infinities and not-a-number.
//!
//! ```
//! use frac::Fraction;
//!
//! let sum = Fraction::new(1, 12) + Fraction::new(2, 3);
//! assert_eq!(sum, Fraction::new(3, 4));
//! assert_eq!(Fraction::new(36, -60).to_string(), "-3/5");
//! assert!((Fraction::new(1, 0) + Fraction::new(-1, 0)).is_nan());
//! ```

pub use frac_number::{ArgumentPosition, Fraction, FractionError, SpecialValue};
