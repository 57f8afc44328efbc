//! Vector-algebra interfaces.

pub mod vector;
pub use vector::{Axis, add, add_scalar, cross, dot, norm, normalize, scale, squared_norm, unit_vector};
