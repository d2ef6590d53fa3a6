//! Horizon occlusion culling against an ellipsoidal globe.
//!
//! Works in the scaled space where the ellipsoid is the unit sphere, so the
//! horizon of a tri-axial ellipsoid becomes the horizon of a sphere. All
//! per-camera state is precomputed once, leaving each visibility query a
//! subtraction, a dot product, and two comparisons. For terrain tiles the
//! per-frame cost drops further: a single precomputed point stands in for
//! the whole tile.

use glam::DVec3;
use meridian_ellipsoid::{Ellipsoid, Rectangle};

/// Occlusion tester for points behind the horizon of an ellipsoid.
#[derive(Clone, Debug)]
pub struct EllipsoidalOccluder {
    /// The globe shape doing the occluding.
    ellipsoid: Ellipsoid,
    /// Camera position in world coordinates.
    camera_position: DVec3,
    /// Camera position divided componentwise by the radii.
    camera_position_in_scaled_space: DVec3,
    /// Squared distance from the scaled-space camera to the horizon,
    /// by Pythagoras on the unit sphere. Zero when the camera is on or
    /// below the surface.
    distance_to_limb_in_scaled_space_squared: f64,
}

impl EllipsoidalOccluder {
    /// Create an occluder for `ellipsoid` with the camera at
    /// `camera_position`.
    pub fn new(ellipsoid: Ellipsoid, camera_position: DVec3) -> Self {
        let mut occluder = Self {
            ellipsoid,
            camera_position: DVec3::ZERO,
            camera_position_in_scaled_space: DVec3::ZERO,
            distance_to_limb_in_scaled_space_squared: 0.0,
        };
        occluder.set_camera_position(camera_position);
        occluder
    }

    /// Move the camera, recomputing the cached scaled-space state.
    pub fn set_camera_position(&mut self, camera_position: DVec3) {
        let scaled = self
            .ellipsoid
            .transform_position_to_scaled_space(camera_position);
        self.camera_position = camera_position;
        self.camera_position_in_scaled_space = scaled;
        self.distance_to_limb_in_scaled_space_squared = (scaled.length_squared() - 1.0).max(0.0);
    }

    /// The ellipsoid this occluder tests against.
    #[must_use]
    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// Camera position in world coordinates.
    #[must_use]
    pub fn camera_position(&self) -> DVec3 {
        self.camera_position
    }

    /// Camera position in scaled space.
    #[must_use]
    pub fn camera_position_in_scaled_space(&self) -> DVec3 {
        self.camera_position_in_scaled_space
    }

    /// Squared scaled-space distance from the camera to the horizon.
    #[must_use]
    pub fn distance_to_limb_in_scaled_space_squared(&self) -> f64 {
        self.distance_to_limb_in_scaled_space_squared
    }

    /// Test whether a world-space point is on the camera's side of the
    /// horizon.
    ///
    /// Returns `true` if the point might be visible, `false` if the
    /// ellipsoid definitely hides it.
    #[must_use]
    pub fn is_point_visible(&self, occludee: DVec3) -> bool {
        let scaled = self.ellipsoid.transform_position_to_scaled_space(occludee);
        self.is_scaled_space_point_visible(scaled)
    }

    /// Visibility test for a point already expressed in scaled space, such
    /// as a stored horizon culling point.
    ///
    /// A point is hidden when it lies inside the shadow cone the ellipsoid
    /// casts away from the camera: behind the plane through the horizon
    /// circle, and within the cone of tangent rays. Both checks reduce to
    /// comparisons against the squared distance to the limb.
    #[must_use]
    pub fn is_scaled_space_point_visible(&self, occludee_scaled_space_position: DVec3) -> bool {
        let camera = self.camera_position_in_scaled_space;
        let vh_magnitude_squared = self.distance_to_limb_in_scaled_space_squared;
        let vt = occludee_scaled_space_position - camera;
        let vt_dot_vc = -vt.dot(camera);
        // With the limb distance clamped at zero, a camera on or below the
        // surface degenerates to culling the half space behind the camera.
        let occluded = vt_dot_vc > vh_magnitude_squared
            && vt_dot_vc * vt_dot_vc / vt.length_squared() > vh_magnitude_squared;
        !occluded
    }

    /// Compute a single scaled-space point that proxies `positions` for
    /// horizon culling: whenever this point is hidden by the horizon, every
    /// one of the positions is hidden too. Test it each frame with
    /// [`is_scaled_space_point_visible`](Self::is_scaled_space_point_visible).
    ///
    /// The point lies along `direction_to_point` (world space, usually
    /// through the center of the positions; it need not be normalized).
    /// Returns `None` when no such point exists: a zero direction, an empty
    /// slice, or a position at or beyond ninety degrees from the direction,
    /// whose horizon footprint no point along the axis can cover.
    pub fn compute_horizon_culling_point(
        &self,
        direction_to_point: DVec3,
        positions: &[DVec3],
    ) -> Option<DVec3> {
        let scaled_space_direction = self.scaled_space_direction(direction_to_point)?;
        let mut result_magnitude = 0.0_f64;
        for &position in positions {
            let candidate = self.horizon_magnitude(position, scaled_space_direction)?;
            result_magnitude = result_magnitude.max(candidate);
        }
        magnitude_to_point(scaled_space_direction, result_magnitude)
    }

    /// [`compute_horizon_culling_point`](Self::compute_horizon_culling_point)
    /// over a flat vertex buffer, as produced by terrain meshing. Each
    /// vertex starts with x, y, z relative to `center`; any further
    /// attributes within the stride are ignored.
    ///
    /// # Panics
    ///
    /// Panics if `stride` is less than 3 or does not divide the buffer
    /// length evenly.
    pub fn compute_horizon_culling_point_from_vertices(
        &self,
        direction_to_point: DVec3,
        vertices: &[f64],
        stride: usize,
        center: DVec3,
    ) -> Option<DVec3> {
        assert!(stride >= 3, "vertex stride must be at least 3, got {stride}");
        assert!(
            vertices.len() % stride == 0,
            "vertex buffer length {} is not a multiple of stride {stride}",
            vertices.len()
        );

        let scaled_space_direction = self.scaled_space_direction(direction_to_point)?;
        let mut result_magnitude = 0.0_f64;
        for vertex in vertices.chunks_exact(stride) {
            let position = center + DVec3::new(vertex[0], vertex[1], vertex[2]);
            let candidate = self.horizon_magnitude(position, scaled_space_direction)?;
            result_magnitude = result_magnitude.max(candidate);
        }
        magnitude_to_point(scaled_space_direction, result_magnitude)
    }

    /// Horizon culling point for a longitude/latitude rectangle on the
    /// ellipsoid surface, using boundary samples of the patch and the
    /// surface point at its center as the axis.
    pub fn compute_horizon_culling_point_from_rectangle(
        &self,
        rectangle: Rectangle,
    ) -> Option<DVec3> {
        let positions = rectangle.subsample(&self.ellipsoid, 0.0);
        let direction_to_point = self.ellipsoid.cartographic_to_cartesian(rectangle.center());
        self.compute_horizon_culling_point(direction_to_point, &positions)
    }

    /// The culling point axis in scaled space. `None` when the direction is
    /// zero (or non-finite) and no axis is defined.
    fn scaled_space_direction(&self, direction_to_point: DVec3) -> Option<DVec3> {
        self.ellipsoid
            .transform_position_to_scaled_space(direction_to_point)
            .try_normalize()
    }

    /// How far along the axis the culling point must sit so that it is
    /// hidden only when `position` is hidden, for any camera.
    ///
    /// In scaled space, `position` is hidden exactly when the camera is
    /// inside the cone of rays grazing the unit sphere toward it. The point
    /// on the axis with the same grazing cone sits at distance
    /// 1 / cos(alpha + beta), where alpha is the angle between `position`
    /// and the axis and beta is the angle subtended by `position`'s own
    /// horizon. `None` when that cosine is not positive: the position is at
    /// or beyond ninety degrees from the axis and no axis point covers it.
    fn horizon_magnitude(&self, position: DVec3, scaled_space_direction: DVec3) -> Option<f64> {
        let scaled_space_position = self.ellipsoid.transform_position_to_scaled_space(position);
        let magnitude_squared = scaled_space_position.length_squared();
        if magnitude_squared == 0.0 {
            return None;
        }
        let direction = scaled_space_position / magnitude_squared.sqrt();

        // Positions below the surface are treated as if they were on it.
        let magnitude_squared = magnitude_squared.max(1.0);
        let magnitude = magnitude_squared.sqrt();

        let cos_alpha = direction.dot(scaled_space_direction);
        let sin_alpha = direction.cross(scaled_space_direction).length();
        let cos_beta = 1.0 / magnitude;
        let sin_beta = (magnitude_squared - 1.0).sqrt() * cos_beta;

        // cos(alpha + beta), by the angle addition formula.
        let denominator = cos_alpha * cos_beta - sin_alpha * sin_beta;
        if denominator > 0.0 {
            Some(1.0 / denominator)
        } else {
            None
        }
    }
}

/// Place the culling point `magnitude` along the scaled-space axis. The
/// magnitude accumulates over positions as a running maximum starting at
/// zero, so zero means there were no positions; infinity means some position
/// sat exactly on the ninety-degree boundary.
fn magnitude_to_point(scaled_space_direction: DVec3, magnitude: f64) -> Option<DVec3> {
    if !magnitude.is_finite() || magnitude <= 0.0 {
        return None;
    }
    Some(scaled_space_direction * magnitude)
}
