//! Polynomial interpolation interfaces.

pub mod lagrange;
pub use lagrange::{lagrange_interpolate, try_lagrange_interpolate};
