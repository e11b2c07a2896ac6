//! # Bounds on the integer types backing a fraction
use std::fmt::{Debug, Display};
use std::hash::Hash;

use num::{Integer, PrimInt, Signed};

/// Fixed width signed integer usable as numerator and denominator.
///
/// Implemented for all primitive signed integers. Arithmetic on these is not checked for
/// overflow.
pub trait FractionInteger: PrimInt + Signed + Integer + Hash + Display + Debug {}

impl<T> FractionInteger for T
where
    T: PrimInt + Signed + Integer + Hash + Display + Debug,
{
}
