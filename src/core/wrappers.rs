//! Trait implementations for standard and faer container types.
//!
//! This module wires `Vec<T>`, fixed-size arrays, and `faer::Mat` columns
//! into the [`Vector`] capability trait, and slices/vectors of pairs into
//! [`SampleSet`], so they can all be fed to the generic algebra and
//! interpolation routines without adaptation on the caller's side.

use crate::core::traits::{SampleSet, Vector};
use faer::Mat;
use num_traits::Float;

impl<T: Float> Vector for Vec<T> {
    type Scalar = T;

    fn zeros(len: usize) -> Self {
        vec![T::zero(); len]
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, i: usize) -> T {
        self[i]
    }

    fn set(&mut self, i: usize, value: T) {
        self[i] = value;
    }
}

impl<T: Float, const N: usize> Vector for [T; N] {
    type Scalar = T;

    fn zeros(len: usize) -> Self {
        assert_eq!(len, N, "requested length {len} for a fixed [T; {N}] array");
        [T::zero(); N]
    }

    fn len(&self) -> usize {
        N
    }

    fn get(&self, i: usize) -> T {
        self[i]
    }

    fn set(&mut self, i: usize, value: T) {
        self[i] = value;
    }
}

/// An n×1 `faer::Mat` column used as a vector.
///
/// Lets faer's dense storage flow straight through the generic algebra
/// functions without copying into an intermediate `Vec`.
impl<T: Float> Vector for Mat<T> {
    type Scalar = T;

    fn zeros(len: usize) -> Self {
        Mat::from_fn(len, 1, |_, _| T::zero())
    }

    fn len(&self) -> usize {
        self.nrows()
    }

    fn get(&self, i: usize) -> T {
        self[(i, 0)]
    }

    fn set(&mut self, i: usize, value: T) {
        self[(i, 0)] = value;
    }
}

impl<T: Float> SampleSet<T> for [(T, T)] {
    fn len(&self) -> usize {
        <[(T, T)]>::len(self)
    }

    fn x(&self, i: usize) -> T {
        self[i].0
    }

    fn y(&self, i: usize) -> T {
        self[i].1
    }
}

impl<T: Float> SampleSet<T> for Vec<(T, T)> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn x(&self, i: usize) -> T {
        self[i].0
    }

    fn y(&self, i: usize) -> T {
        self[i].1
    }
}

impl<T: Float, const N: usize> SampleSet<T> for [(T, T); N] {
    fn len(&self) -> usize {
        N
    }

    fn x(&self, i: usize) -> T {
        self[i].0
    }

    fn y(&self, i: usize) -> T {
        self[i].1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_roundtrip() {
        let mut v: Vec<f64> = Vector::zeros(4);
        assert_eq!(Vector::len(&v), 4);
        v.set(2, 7.5);
        assert_eq!(v.get(2), 7.5);
        assert_eq!(v.get(0), 0.0);
    }

    #[test]
    fn array_roundtrip() {
        let mut a: [f32; 3] = Vector::zeros(3);
        a.set(0, 1.0);
        assert_eq!(a.get(0), 1.0);
        assert_eq!(Vector::len(&a), 3);
    }

    #[test]
    #[should_panic]
    fn array_zeros_wrong_length() {
        let _: [f64; 3] = Vector::zeros(4);
    }

    #[test]
    fn faer_column_roundtrip() {
        let mut m: Mat<f64> = Vector::zeros(5);
        assert_eq!(Vector::len(&m), 5);
        m.set(4, -2.0);
        // faer has an inherent two-argument `Mat::get`, so the trait method
        // must be called through its path on `Mat` receivers
        assert_eq!(Vector::get(&m, 4), -2.0);
    }

    #[test]
    fn sample_set_pairs() {
        let s = vec![(0.0, 3.0), (1.0, 2.0)];
        assert_eq!(SampleSet::len(&s), 2);
        assert_eq!(s.x(1), 1.0);
        assert_eq!(s.y(0), 3.0);
    }
}
