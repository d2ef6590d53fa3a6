//! Geodetic surface projection: the Newton solve behind cartesian→cartographic.
//!
//! Given an arbitrary point P, its geodetic surface point is the point on the
//! ellipsoid whose outward normal line passes through P. On a sphere that is
//! plain radial scaling; on a general tri-axial ellipsoid no closed form
//! exists, so the scaling is found by Newton's method on the implicit surface
//! equation, vectorized over the three axes.

use glam::DVec3;

/// Convergence tolerance on |F(s)|, the implicit surface residual.
pub const NEWTON_TOLERANCE: f64 = 1.0e-12;

/// Evaluation cap for the Newton loop. Physically reasonable inputs converge
/// in 2-5 evaluations; the cap bounds extreme eccentricities, where the last
/// iterate is still the best available estimate.
pub const MAX_NEWTON_STEPS: usize = 10;

/// Scales `position` along its geodetic normal line onto the ellipsoid
/// surface described by the reciprocal radii.
///
/// Solves `F(s) = Σ (Pᵢ / (1 + s·wᵢ))²·wᵢ − 1 = 0` for the scalar `s`, where
/// `wᵢ` are the `one_over_radii_squared` components, then returns
/// `Pᵢ / (1 + s·wᵢ)` componentwise. The iteration is seeded from the
/// geocentric intersection, with [`NEWTON_TOLERANCE`] and [`MAX_NEWTON_STEPS`]
/// bounding the refinement.
///
/// Returns `None` when `position` is not finite, or when its scaled-space
/// squared norm is within `center_tolerance_squared` of the origin; points
/// that close to the center have no well-defined geodetic projection.
pub fn scale_to_geodetic_surface(
    position: DVec3,
    one_over_radii: DVec3,
    one_over_radii_squared: DVec3,
    center_tolerance_squared: f64,
) -> Option<DVec3> {
    if !position.is_finite() {
        return None;
    }

    let scaled = position * one_over_radii;
    let squared_norm = scaled.length_squared();
    if squared_norm <= center_tolerance_squared {
        return None;
    }

    // Geocentric intersection: the initial estimate of the surface point.
    let ratio = (1.0 / squared_norm).sqrt();
    let intersection = position * ratio;
    let gradient = 2.0 * (intersection * one_over_radii_squared);

    // Initial normal multiplier: distance from the point to the intersection
    // over half the gradient magnitude there.
    let mut lambda = (1.0 - ratio) * position.length() / (0.5 * gradient.length());
    let mut correction = 0.0;

    let position_squared = position * position;
    let numerator = position_squared * one_over_radii_squared;
    let mut multiplier = DVec3::ONE;

    for _ in 0..MAX_NEWTON_STEPS {
        lambda -= correction;

        multiplier = (DVec3::ONE + lambda * one_over_radii_squared).recip();
        let multiplier_squared = multiplier * multiplier;
        let multiplier_cubed = multiplier_squared * multiplier;

        let func = numerator.dot(multiplier_squared) - 1.0;
        if func.abs() < NEWTON_TOLERANCE {
            break;
        }

        // F'(s) = -2 Σ Pᵢ²·wᵢ² / (1 + s·wᵢ)³
        let derivative = -2.0 * (numerator * one_over_radii_squared).dot(multiplier_cubed);
        correction = func / derivative;
    }

    Some(position * multiplier)
}
