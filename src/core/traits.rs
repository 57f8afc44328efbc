//! Core capability traits for smath.

use num_traits::Float;

/// Uniform access to a vector-like container: an ordered sequence of real
/// numbers with zero-based indexed reads/writes, a reportable element count,
/// and construction by length.
///
/// The algebra functions only ever go through this trait, so any backing
/// container works: a growable `Vec`, a fixed-size array, or a third-party
/// dense type such as an n×1 `faer::Mat` column.
pub trait Vector: Sized {
    /// Element scalar type.
    type Scalar: Float;

    /// Build a fresh vector of `len` elements, all zero.
    fn zeros(len: usize) -> Self;

    /// Number of elements.
    fn len(&self) -> usize;

    /// True if the vector holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read element `i`. Valid for `i` in `[0, len)`.
    fn get(&self, i: usize) -> Self::Scalar;

    /// Write element `i`. Valid for `i` in `[0, len)`.
    fn set(&mut self, i: usize, value: Self::Scalar);
}

/// Indexed access to a collection of (x, y) function samples.
///
/// Samples are identified positionally: index `i` names the pair, and two
/// samples are "the same" exactly when their indices coincide. Iteration in
/// the interpolator is index-ascending, so the caller's ordering (e.g. sorted
/// by abscissa) is the ordering that fixes floating-point rounding.
pub trait SampleSet<T> {
    /// Number of (x, y) pairs.
    fn len(&self) -> usize;

    /// True if the collection holds no pairs.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Independent-variable value of sample `i`.
    fn x(&self, i: usize) -> T;

    /// Dependent-variable value of sample `i`.
    fn y(&self, i: usize) -> T;
}
