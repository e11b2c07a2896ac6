//! # Field operations
//!
//! All results are renormalized. Division lives on `Fraction` itself as it can fail.
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num::{One, Zero};

use crate::data::number_types::fraction::Fraction;
use crate::data::number_types::traits::FractionInteger;

/// The denominator of a product of two fractions is a product of positive numbers, so the only
/// way to fail normalization is through overflow, which isn't handled.
fn normalized<I: FractionInteger>(numerator: I, denominator: I) -> Fraction<I> {
    let gcd = numerator.gcd(&denominator);
    Fraction::new_unchecked(numerator / gcd, denominator / gcd)
}

macro_rules! define_binary_operation {
    ($operation:ident, $method:ident, $assign:ident, $assign_method:ident, |$lhs:ident, $rhs:ident| $body:expr) => {
        impl<I: FractionInteger> $operation for Fraction<I> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                let ($lhs, $rhs) = (self, rhs);
                $body
            }
        }

        impl<I: FractionInteger> $operation<&Fraction<I>> for Fraction<I> {
            type Output = Self;

            fn $method(self, rhs: &Self) -> Self::Output {
                $operation::$method(self, *rhs)
            }
        }

        impl<I: FractionInteger> $operation for &Fraction<I> {
            type Output = Fraction<I>;

            fn $method(self, rhs: Self) -> Self::Output {
                $operation::$method(*self, *rhs)
            }
        }

        impl<I: FractionInteger> $assign for Fraction<I> {
            fn $assign_method(&mut self, rhs: Self) {
                *self = $operation::$method(*self, rhs);
            }
        }

        impl<I: FractionInteger> $assign<&Fraction<I>> for Fraction<I> {
            fn $assign_method(&mut self, rhs: &Self) {
                *self = $operation::$method(*self, *rhs);
            }
        }
    };
}

define_binary_operation!(Add, add, AddAssign, add_assign, |lhs, rhs| normalized(
    lhs.numerator * rhs.denominator + rhs.numerator * lhs.denominator,
    lhs.denominator * rhs.denominator,
));

define_binary_operation!(Sub, sub, SubAssign, sub_assign, |lhs, rhs| normalized(
    lhs.numerator * rhs.denominator - rhs.numerator * lhs.denominator,
    lhs.denominator * rhs.denominator,
));

define_binary_operation!(Mul, mul, MulAssign, mul_assign, |lhs, rhs| normalized(
    lhs.numerator * rhs.numerator,
    lhs.denominator * rhs.denominator,
));

impl<I: FractionInteger> Neg for Fraction<I> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Fraction::new_unchecked(-self.numerator, self.denominator)
    }
}

impl<I: FractionInteger> Neg for &Fraction<I> {
    type Output = Fraction<I>;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl<I: FractionInteger> Sum for Fraction<I> {
    fn sum<T: Iterator<Item = Self>>(iter: T) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<I: FractionInteger> Product for Fraction<I> {
    fn product<T: Iterator<Item = Self>>(iter: T) -> Self {
        iter.fold(Self::one(), Mul::mul)
    }
}
