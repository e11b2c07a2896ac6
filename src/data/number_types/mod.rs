//! # Number types
//!
//! Exact rational numbers over fixed width integers, and their textual representation.
use thiserror::Error;

pub mod format;
pub mod fraction;
pub mod traits;

/// Errors raised while constructing or dividing fractions.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum FractionError {
    /// A zero denominator was requested, directly or through division by zero.
    #[error("Cannot have a denominator 0")]
    DivisionByZero,

    /// Text that is not of the form `N` or `N/D`.
    #[error("Invalid fraction literal: {literal:?}")]
    InvalidLiteral { literal: String },
}
