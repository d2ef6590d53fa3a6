//! Epsilon-aware floating point comparison.

/// Compares two values for equality within relative and absolute tolerances.
///
/// The values compare equal when their difference is within
/// `absolute_epsilon`, or within `relative_epsilon` scaled by the larger
/// magnitude of the two. The absolute test covers values near zero, where a
/// relative test alone degenerates.
pub fn equals_epsilon(left: f64, right: f64, relative_epsilon: f64, absolute_epsilon: f64) -> bool {
    let diff = (left - right).abs();
    diff <= absolute_epsilon || diff <= relative_epsilon * left.abs().max(right.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_values_are_equal() {
        assert!(equals_epsilon(1.0, 1.0, 0.0, 0.0));
        assert!(equals_epsilon(-42.5, -42.5, 0.0, 0.0));
    }

    #[test]
    fn test_absolute_epsilon_near_zero() {
        // A relative test alone would reject these: the magnitudes are tiny.
        assert!(equals_epsilon(1.0e-14, -1.0e-14, 1.0e-10, 1.0e-12));
        assert!(!equals_epsilon(1.0e-9, -1.0e-9, 1.0e-10, 1.0e-12));
    }

    #[test]
    fn test_relative_epsilon_large_magnitudes() {
        // 1 mm apart at planetary scale passes a 1e-9 relative tolerance.
        assert!(equals_epsilon(6_378_137.0, 6_378_137.001, 1.0e-9, 0.0));
        assert!(!equals_epsilon(6_378_137.0, 6_378_200.0, 1.0e-9, 0.0));
    }

    #[test]
    fn test_sign_of_difference_is_irrelevant() {
        assert!(equals_epsilon(2.0, 2.0 + 1.0e-13, 1.0e-12, 0.0));
        assert!(equals_epsilon(2.0 + 1.0e-13, 2.0, 1.0e-12, 0.0));
    }

    #[test]
    fn test_nan_never_compares_equal() {
        assert!(!equals_epsilon(f64::NAN, f64::NAN, 1.0e-3, 1.0e-3));
        assert!(!equals_epsilon(f64::NAN, 0.0, 1.0e-3, 1.0e-3));
        assert!(!equals_epsilon(0.0, f64::NAN, 1.0e-3, 1.0e-3));
    }
}
