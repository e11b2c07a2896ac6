//! # Fractions
//!
//! Exact rational numbers over a fixed width signed integer, always stored in lowest terms with a
//! positive denominator.
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num::{One, ToPrimitive, Zero};

use crate::data::number_types::format::NumberFormat;
use crate::data::number_types::traits::FractionInteger;
use crate::data::number_types::FractionError;

mod arithmetic;
mod with_primitive;

pub type Fraction32 = Fraction<i32>;
pub type Fraction64 = Fraction<i64>;
pub type Fraction128 = Fraction<i128>;

/// Rational number `numerator / denominator`.
///
/// Invariants:
///
/// * `denominator > 0`, the sign lives in the numerator;
/// * `gcd(|numerator|, denominator) == 1`, in particular zero is stored as `0/1`.
///
/// Because the representation is canonical, the derived equality and hash coincide with
/// equality of the rational values.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Fraction<I> {
    numerator: I,
    denominator: I,
}

impl<I: FractionInteger> Fraction<I> {
    /// Create a normalized fraction.
    ///
    /// # Errors
    ///
    /// `FractionError::DivisionByZero` if `denominator` is zero.
    pub fn new(numerator: I, denominator: I) -> Result<Self, FractionError> {
        if denominator.is_zero() {
            return Err(FractionError::DivisionByZero);
        }

        // gcd(0, d) == |d|, so zero ends up as 0/1
        let gcd = numerator.gcd(&denominator);
        let sign = denominator.signum();

        Ok(Self::new_unchecked(numerator * sign / gcd, denominator.abs() / gcd))
    }

    /// Wrap a pair that is already in canonical form.
    pub(crate) fn new_unchecked(numerator: I, denominator: I) -> Self {
        debug_assert!(denominator > I::zero(), "denominator not positive");
        debug_assert!(numerator.gcd(&denominator).is_one(), "numerator and denominator not coprime");

        Self { numerator, denominator }
    }

    pub fn numerator(&self) -> I {
        self.numerator
    }

    /// Always strictly positive.
    pub fn denominator(&self) -> I {
        self.denominator
    }

    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Multiplicative inverse, `None` for zero.
    pub fn reciprocal(self) -> Option<Self> {
        if self.numerator.is_zero() {
            None
        } else {
            let sign = self.numerator.signum();
            Some(Self::new_unchecked(self.denominator * sign, self.numerator.abs()))
        }
    }

    /// Divide by another fraction.
    ///
    /// # Errors
    ///
    /// `FractionError::DivisionByZero` if `rhs` is zero.
    pub fn divide(self, rhs: Self) -> Result<Self, FractionError> {
        Self::new(self.numerator * rhs.denominator, self.denominator * rhs.numerator)
    }

    /// Approximate value, for display only.
    pub fn to_f64(self) -> f64 {
        let numerator = self.numerator.to_f64().unwrap_or(f64::NAN);
        let denominator = self.denominator.to_f64().unwrap_or(f64::NAN);

        numerator / denominator
    }

    /// Render with the digit grouping of `format`.
    pub fn display(&self, format: NumberFormat) -> FractionDisplay<I> {
        FractionDisplay { fraction: *self, format }
    }
}

impl<I: FractionInteger> From<I> for Fraction<I> {
    fn from(value: I) -> Self {
        Self::new_unchecked(value, I::one())
    }
}

impl<I: FractionInteger> From<Fraction<I>> for f64 {
    fn from(value: Fraction<I>) -> Self {
        value.to_f64()
    }
}

impl<I: FractionInteger> Zero for Fraction<I> {
    fn zero() -> Self {
        Self::new_unchecked(I::zero(), I::one())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl<I: FractionInteger> One for Fraction<I> {
    fn one() -> Self {
        Self::new_unchecked(I::one(), I::one())
    }
}

impl<I: FractionInteger> Default for Fraction<I> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<I: FractionInteger> Ord for Fraction<I> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross multiplication keeps the direction.
        (self.numerator * other.denominator).cmp(&(other.numerator * self.denominator))
    }
}

impl<I: FractionInteger> PartialOrd for Fraction<I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<I: FractionInteger> ToPrimitive for Fraction<I> {
    fn to_i64(&self) -> Option<i64> {
        if self.is_integer() {
            self.numerator.to_i64()
        } else {
            None
        }
    }

    fn to_u64(&self) -> Option<u64> {
        if self.is_integer() {
            self.numerator.to_u64()
        } else {
            None
        }
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Fraction::to_f64(*self))
    }
}

impl<I: FractionInteger> fmt::Display for Fraction<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(NumberFormat::INVARIANT), f)
    }
}

/// Helper returned by [`Fraction::display`].
#[derive(Copy, Clone, Debug)]
pub struct FractionDisplay<I> {
    fraction: Fraction<I>,
    format: NumberFormat,
}

impl<I: FractionInteger> fmt::Display for FractionDisplay<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Fraction { numerator, denominator } = self.fraction;
        let text = if denominator.is_one() {
            self.format.group(numerator)
        } else {
            format!("{}/{}", self.format.group(numerator), self.format.group(denominator))
        };

        f.pad(&text)
    }
}

impl<I: FractionInteger> FromStr for Fraction<I> {
    type Err = FractionError;

    /// Parse `N` or `N/D`, surrounding whitespace allowed.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || FractionError::InvalidLiteral { literal: text.to_string() };
        let parse = |part: &str| {
            let part = part.trim();
            if part.is_empty() || part.contains(char::is_whitespace) {
                return Err(invalid());
            }
            I::from_str_radix(part, 10).map_err(|_| invalid())
        };

        match text.split_once('/') {
            None => parse(text).map(Self::from),
            Some((numerator, denominator)) => Self::new(parse(numerator)?, parse(denominator)?),
        }
    }
}
