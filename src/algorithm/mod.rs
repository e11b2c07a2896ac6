//! # Algorithms
pub mod gaussian_elimination;
