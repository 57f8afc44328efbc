//! smath: generic vector algebra and Lagrange interpolation
//!
//! This crate provides small, container-agnostic numerical building blocks:
//! vector-algebra primitives (cross/dot products, norms, normalization,
//! elementwise arithmetic), a classical Lagrange polynomial interpolator over
//! scattered (x, y) samples, and a handful of scalar helpers (congruence
//! modulo, angle conversions).
//!
//! Every operation is generic over a capability trait rather than a concrete
//! vector type: anything that can report its length, be read and written by
//! index, and be constructed with a given element count works. `Vec<T>`,
//! `[T; N]`, and n×1 `faer::Mat<T>` columns are supported out of the box.

pub mod algebra;
pub mod constants;
pub mod core;
pub mod error;
pub mod interpolate;
pub mod utils;

// Re-exports for convenience
pub use algebra::*;
pub use core::*;
pub use error::*;
pub use interpolate::*;
pub use utils::*;

// Re-export the π constant at the crate root for convenience
pub use constants::PI;
