//! # rust-gauss
//!
//! Exact Gaussian elimination on augmented matrices of rational numbers.
//!
//! Values are [`Fraction`]s over a fixed width signed integer. Every operation keeps them in
//! lowest terms, so a reduced matrix is exact and independent of conditioning. Overflow of the
//! underlying integer type is not guarded against.
//!
//! ```
//! use rust_gauss::{frac, Matrix};
//!
//! let mut system: Matrix<i64> = Matrix::from_rows(vec![
//!     vec![1, 1, 2, 9],
//!     vec![2, 4, -3, 1],
//!     vec![3, 6, -5, 0],
//! ]).unwrap();
//! system.eliminate();
//!
//! assert_eq!(system[(0, 3)], frac!(1));
//! assert_eq!(system[(1, 3)], frac!(2));
//! assert_eq!(system[(2, 3)], frac!(3));
//! ```
pub mod algorithm;
pub mod data;

pub use algorithm::gaussian_elimination::{ColumnObserver, GaussianElimination};
pub use data::linear_algebra::matrix::{Dimensions, Matrix};
pub use data::linear_algebra::MatrixError;
pub use data::number_types::fraction::{Fraction, Fraction128, Fraction32, Fraction64};
pub use data::number_types::format::NumberFormat;
pub use data::number_types::FractionError;

/// Shorthand to create a fraction from integer literals.
///
/// Panics when a zero denominator is written down; use [`Fraction::new`] for values that are
/// not known to be valid.
#[macro_export]
macro_rules! frac {
    ($value:expr) => {
        $crate::Fraction::from($value)
    };
    ($numerator:expr, $denominator:expr) => {
        match $crate::Fraction::new($numerator, $denominator) {
            Ok(value) => value,
            Err(error) => panic!("invalid fraction literal: {}", error),
        }
    };
}
