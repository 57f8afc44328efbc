//! Vector-algebra operations over the generic [`Vector`] trait.
//!
//! All functions are pure: inputs are only read, results are newly
//! constructed values. Operations with a shape precondition validate it
//! before touching any element and fail with a [`MathError`] without partial
//! results.

use crate::core::traits::Vector;
use crate::error::MathError;
use num_traits::{Float, One, Zero};

/// Coordinate axis selector for [`unit_vector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Compute the cross product r = a × b of two 3-vectors.
///
/// The components are
///
/// ```text
/// r[0] = a[1]·b[2] − a[2]·b[1]
/// r[1] = a[2]·b[0] − a[0]·b[2]
/// r[2] = a[0]·b[1] − a[1]·b[0]
/// ```
///
/// Fails with [`MathError::NotThreeDimensional`] if either input does not
/// have exactly three elements.
pub fn cross<V: Vector>(a: &V, b: &V) -> Result<V, MathError> {
    if a.len() != 3 {
        return Err(MathError::NotThreeDimensional(a.len()));
    }
    if b.len() != 3 {
        return Err(MathError::NotThreeDimensional(b.len()));
    }
    let mut r = V::zeros(3);
    r.set(0, a.get(1) * b.get(2) - a.get(2) * b.get(1));
    r.set(1, a.get(2) * b.get(0) - a.get(0) * b.get(2));
    r.set(2, a.get(0) * b.get(1) - a.get(1) * b.get(0));
    Ok(r)
}

/// Compute the dot product Σ a[i]·b[i] of two equal-length vectors.
///
/// Accumulation starts at zero and runs strictly left to right in ascending
/// index order; that order is part of the contract so results are
/// bit-reproducible on a given platform.
///
/// Fails with [`MathError::LengthMismatch`] if the lengths differ.
pub fn dot<V: Vector>(a: &V, b: &V) -> Result<V::Scalar, MathError> {
    if a.len() != b.len() {
        return Err(MathError::LengthMismatch(a.len(), b.len()));
    }
    Ok(accumulate(a, b))
}

// Shared accumulation loop for dot and squared_norm; both must use the exact
// same index-ascending order.
fn accumulate<V: Vector>(a: &V, b: &V) -> V::Scalar {
    let mut acc = V::Scalar::zero();
    for i in 0..a.len() {
        acc = acc + a.get(i) * b.get(i);
    }
    acc
}

/// Compute the squared Euclidean norm of a vector, i.e. `dot(v, v)`.
pub fn squared_norm<V: Vector>(v: &V) -> V::Scalar {
    accumulate(v, v)
}

/// Compute the Euclidean norm ‖v‖₂ of a vector.
pub fn norm<V: Vector>(v: &V) -> V::Scalar {
    squared_norm(v).sqrt()
}

/// Divide each element of `v` by ‖v‖₂, yielding a unit vector.
///
/// Caller contract: `norm(v)` must be non-zero. A zero vector is not guarded
/// against and produces non-finite elements, matching direct evaluation of
/// the formula.
pub fn normalize<V: Vector>(v: &V) -> V {
    let n = norm(v);
    let mut out = V::zeros(v.len());
    for i in 0..v.len() {
        out.set(i, v.get(i) / n);
    }
    out
}

/// Build a fresh 3-vector with 1 in the `axis` slot and 0 elsewhere.
pub fn unit_vector<V: Vector>(axis: Axis) -> V {
    let mut v = V::zeros(3);
    let slot = match axis {
        Axis::X => 0,
        Axis::Y => 1,
        Axis::Z => 2,
    };
    v.set(slot, V::Scalar::one());
    v
}

/// Multiply each element by a scalar, as `multiplier × element`.
pub fn scale<V: Vector>(v: &V, multiplier: V::Scalar) -> V {
    let mut out = V::zeros(v.len());
    for i in 0..v.len() {
        out.set(i, multiplier * v.get(i));
    }
    out
}

/// Add a scalar to each element, as `adder + element`.
pub fn add_scalar<V: Vector>(v: &V, adder: V::Scalar) -> V {
    let mut out = V::zeros(v.len());
    for i in 0..v.len() {
        out.set(i, adder + v.get(i));
    }
    out
}

/// Add two equal-length vectors elementwise.
///
/// Fails with [`MathError::LengthMismatch`] if the lengths differ.
pub fn add<V: Vector>(a: &V, b: &V) -> Result<V, MathError> {
    if a.len() != b.len() {
        return Err(MathError::LengthMismatch(a.len(), b.len()));
    }
    let mut out = V::zeros(a.len());
    for i in 0..a.len() {
        out.set(i, a.get(i) + b.get(i));
    }
    Ok(out)
}
