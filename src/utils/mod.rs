//! Scalar utility functions.

pub mod scalar;
pub use scalar::{degrees_to_radians, modulo, radians_to_degrees};
