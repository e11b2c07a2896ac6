//! # Interactions with fixed size integers
//!
//! Mixing a fraction with a bare integer of its own backing type avoids spelling out
//! `Fraction::from` at every call site.
use std::ops::{Add, Mul, Sub};

use num::One;

use crate::data::number_types::fraction::Fraction;

macro_rules! define_interactions {
    ($t:ty) => {
        impl PartialEq<$t> for Fraction<$t> {
            fn eq(&self, other: &$t) -> bool {
                self.denominator.is_one() && self.numerator == *other
            }
        }

        impl PartialEq<Fraction<$t>> for $t {
            fn eq(&self, other: &Fraction<$t>) -> bool {
                other == self
            }
        }

        impl Add<$t> for Fraction<$t> {
            type Output = Self;

            fn add(self, rhs: $t) -> Self::Output {
                // Adding an integer keeps numerator and denominator coprime.
                Fraction::new_unchecked(self.numerator + rhs * self.denominator, self.denominator)
            }
        }

        impl Sub<$t> for Fraction<$t> {
            type Output = Self;

            fn sub(self, rhs: $t) -> Self::Output {
                Fraction::new_unchecked(self.numerator - rhs * self.denominator, self.denominator)
            }
        }

        impl Mul<$t> for Fraction<$t> {
            type Output = Self;

            fn mul(self, rhs: $t) -> Self::Output {
                self * Fraction::from(rhs)
            }
        }
    };
}

define_interactions!(i8);
define_interactions!(i16);
define_interactions!(i32);
define_interactions!(i64);
define_interactions!(i128);
define_interactions!(isize);
