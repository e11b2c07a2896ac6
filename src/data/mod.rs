//! # Data structures
//!
//! Number types and the augmented matrix they are stored in.
pub mod linear_algebra;
pub mod number_types;
