//! Scalar helper functions: congruence modulo and angle conversions.

use crate::constants::PI;
use num_traits::Float;

/// Compute the remainder of `dividend / divisor` in the congruence sense.
///
/// The result is `dividend − divisor·⌊dividend/divisor⌋`, which for a
/// positive divisor always lies in `[0, divisor)` regardless of the sign of
/// the dividend. This differs from the language-native truncating remainder,
/// which follows the sign of the dividend. See
/// <https://mathworld.wolfram.com/Congruence.html>.
pub fn modulo<T: Float>(dividend: T, divisor: T) -> T {
    dividend - divisor * (dividend / divisor).floor()
}

/// Convert an angle in radians to degrees.
pub fn radians_to_degrees<T: Float>(angle_in_radians: T) -> T {
    let pi = num_traits::cast::<f64, T>(PI).unwrap();
    let half_turn = num_traits::cast::<f64, T>(180.0).unwrap();
    angle_in_radians / pi * half_turn
}

/// Convert an angle in degrees to radians.
pub fn degrees_to_radians<T: Float>(angle_in_degrees: T) -> T {
    let pi = num_traits::cast::<f64, T>(PI).unwrap();
    let half_turn = num_traits::cast::<f64, T>(180.0).unwrap();
    angle_in_degrees * pi / half_turn
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn modulo_stays_in_divisor_range() {
        assert_eq!(modulo(7.5, 2.0), 1.5);
        assert_eq!(modulo(-1.0, 3.0), 2.0);
        assert_eq!(modulo(6.0, 3.0), 0.0);
    }

    #[test]
    fn modulo_differs_from_truncating_remainder() {
        // -1 % 3 is -1 with the native operator, 2 in the congruence sense.
        assert_eq!(-1.0_f64 % 3.0, -1.0);
        assert_eq!(modulo(-1.0_f64, 3.0), 2.0);
    }

    #[test]
    fn angle_conversions_roundtrip() {
        assert_abs_diff_eq!(radians_to_degrees(PI), 180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(degrees_to_radians(90.0), PI / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            radians_to_degrees(degrees_to_radians(123.456)),
            123.456,
            epsilon = 1e-12
        );
    }
}
