//! Lagrange polynomial interpolation per direct evaluation of the basis form.

use crate::core::traits::SampleSet;
use crate::error::MathError;
use num_traits::Float;

/// Evaluate the Lagrange interpolating polynomial through `samples` at `x`.
///
/// Given N pairs (xᵢ, yᵢ) with pairwise-distinct abscissae, computes the
/// unique degree-(N−1) polynomial through all of them and evaluates it at
/// `x`:
///
/// ```text
/// result = Σᵢ yᵢ · Πⱼ≠ᵢ (x − xⱼ) / (xᵢ − xⱼ)
/// ```
///
/// Both loops run in ascending sample index order, so the caller's ordering
/// of the collection (typically ascending in x) fixes the floating-point
/// rounding and makes results reproducible.
///
/// Caller contract, not validated here: at least one sample, and no two
/// samples sharing an abscissa. A duplicate makes a basis denominator zero
/// and the result non-finite. Use [`try_lagrange_interpolate`] for a checked
/// entry point with identical numeric output.
///
/// Accuracy caveat: this is the classical direct-evaluation form, which
/// loses accuracy for query points near or outside the boundary of the
/// sample range. For best results `x` should lie well inside the sampled
/// interval. See
/// <https://mathworld.wolfram.com/LagrangeInterpolatingPolynomial.html>.
pub fn lagrange_interpolate<T, S>(samples: &S, x: T) -> T
where
    T: Float,
    S: SampleSet<T> + ?Sized,
{
    let n = samples.len();
    let mut result = T::zero();
    for i in 0..n {
        let mut term = samples.y(i);
        for j in 0..n {
            // Pair identity is positional: only j == i is "the same sample".
            if j != i {
                let multiplier = (x - samples.x(j)) / (samples.x(i) - samples.x(j));
                term = term * multiplier;
            }
        }
        result = result + term;
    }
    result
}

/// Checked variant of [`lagrange_interpolate`].
///
/// Validates the caller contract up front (at least one sample, pairwise
/// distinct abscissae under exact `==` comparison) and then delegates to the
/// unchecked routine, so a successful call returns bit-identical output.
pub fn try_lagrange_interpolate<T, S>(samples: &S, x: T) -> Result<T, MathError>
where
    T: Float,
    S: SampleSet<T> + ?Sized,
{
    let n = samples.len();
    if n == 0 {
        return Err(MathError::EmptySampleSet);
    }
    for i in 1..n {
        for j in 0..i {
            if samples.x(i) == samples.x(j) {
                return Err(MathError::DuplicateAbscissa(i));
            }
        }
    }
    Ok(lagrange_interpolate(samples, x))
}
