//! Sign and domain-clamped inverse trigonometry.

/// Mathematical sign: 1.0 for positive, -1.0 for negative, 0.0 for zero.
///
/// Unlike `f64::signum`, zero maps to zero. NaN, having no sign, also maps
/// to zero.
pub fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// `asin` with the input clamped to [-1, 1] first.
///
/// Accumulated rounding can push a value that is mathematically a sine a few
/// ULPs outside the domain; clamping yields the boundary angle instead of NaN.
pub fn asin_clamped(value: f64) -> f64 {
    value.clamp(-1.0, 1.0).asin()
}

/// `acos` with the input clamped to [-1, 1] first.
pub fn acos_clamped(value: f64) -> f64 {
    value.clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-15;

    #[test]
    fn test_sign_basic() {
        assert_eq!(sign(3.7), 1.0);
        assert_eq!(sign(-0.001), -1.0);
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-0.0), 0.0);
    }

    #[test]
    fn test_sign_of_nan_is_zero() {
        assert_eq!(sign(f64::NAN), 0.0);
    }

    #[test]
    fn test_sign_differs_from_signum_at_zero() {
        assert_eq!((0.0_f64).signum(), 1.0);
        assert_eq!(sign(0.0), 0.0);
    }

    #[test]
    fn test_asin_clamped_inside_domain() {
        assert!((asin_clamped(0.5) - (0.5_f64).asin()).abs() < EPSILON);
        assert!((asin_clamped(-1.0) + FRAC_PI_2).abs() < EPSILON);
    }

    #[test]
    fn test_asin_clamped_just_outside_domain() {
        // 1.0 + 2 ULP would be NaN through a bare asin.
        let drifted = 1.0 + 2.0 * f64::EPSILON;
        assert!(drifted.asin().is_nan());
        assert!((asin_clamped(drifted) - FRAC_PI_2).abs() < EPSILON);
        assert!((asin_clamped(-drifted) + FRAC_PI_2).abs() < EPSILON);
    }

    #[test]
    fn test_acos_clamped_just_outside_domain() {
        let drifted = 1.0 + 2.0 * f64::EPSILON;
        assert!(drifted.acos().is_nan());
        assert_eq!(acos_clamped(drifted), 0.0);
        assert!((acos_clamped(-drifted) - std::f64::consts::PI).abs() < EPSILON);
    }
}
