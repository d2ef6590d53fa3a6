//! Tri-axial ellipsoid shape and the coordinate transforms defined on it.

use glam::DVec3;
use meridian_math::{asin_clamped, sign};

use crate::Cartographic;
use crate::error::EllipsoidError;
use crate::surface::scale_to_geodetic_surface;

/// Squared scaled-space norm below which a point counts as "at the center"
/// and has no geodetic surface projection. Dimensionless: in scaled space the
/// ellipsoid surface sits at squared norm 1.
pub const CENTER_TOLERANCE_SQUARED: f64 = 1.0e-1;

/// A tri-axial ellipsoid centered at the origin with axis-aligned semi-axes.
///
/// Quantities derived from the radii are computed once at construction and
/// cached behind accessors, so they can never disagree with the radii. The
/// type is an immutable `Copy` value: one ellipsoid is created per world and
/// shared freely; every method is a pure function of `self` and arguments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    radii: DVec3,
    radii_squared: DVec3,
    radii_to_the_fourth: DVec3,
    one_over_radii: DVec3,
    one_over_radii_squared: DVec3,
    minimum_radius: f64,
    maximum_radius: f64,
    center_tolerance_squared: f64,
}

impl Ellipsoid {
    /// Construct an ellipsoid from its x/y/z semi-axis lengths in meters.
    ///
    /// # Panics
    ///
    /// Panics if any component is non-positive or non-finite. For radii that
    /// come from user data, use [`Ellipsoid::try_from_radii`] instead.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        let radii = DVec3::new(x, y, z);
        assert!(
            radii_are_valid(radii),
            "ellipsoid radii must be positive and finite, got ({x}, {y}, {z})"
        );
        Self::from_validated_radii(radii)
    }

    /// Construct from a radii vector. Panics exactly like [`Ellipsoid::new`].
    pub fn from_radii(radii: DVec3) -> Self {
        Self::new(radii.x, radii.y, radii.z)
    }

    /// Validating constructor for radii originating outside the program.
    pub fn try_from_radii(radii: DVec3) -> Result<Self, EllipsoidError> {
        if radii_are_valid(radii) {
            Ok(Self::from_validated_radii(radii))
        } else {
            Err(EllipsoidError::InvalidRadii(radii.x, radii.y, radii.z))
        }
    }

    fn from_validated_radii(radii: DVec3) -> Self {
        let radii_squared = radii * radii;
        Self {
            radii,
            radii_squared,
            radii_to_the_fourth: radii_squared * radii_squared,
            one_over_radii: radii.recip(),
            one_over_radii_squared: radii_squared.recip(),
            minimum_radius: radii.min_element(),
            maximum_radius: radii.max_element(),
            center_tolerance_squared: CENTER_TOLERANCE_SQUARED,
        }
    }

    /// The WGS84 Earth ellipsoid (semi-major 6 378 137 m).
    pub fn wgs84() -> Self {
        Self::new(6_378_137.0, 6_378_137.0, 6_356_752.314_245_179_3)
    }

    /// The GRS80 Earth ellipsoid, used by most national datums.
    pub fn grs80() -> Self {
        Self::new(6_378_137.0, 6_378_137.0, 6_356_752.314_140_356)
    }

    /// Spherical Moon (mean radius 1 737 400 m).
    pub fn moon() -> Self {
        Self::new(1_737_400.0, 1_737_400.0, 1_737_400.0)
    }

    /// The unit sphere, the reference shape of scaled space.
    pub fn unit_sphere() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Resolve a preset by case-insensitive name.
    ///
    /// Known names: `wgs84`, `grs80`, `moon`, `unit` (or `unit_sphere`).
    /// Intended for configuration files and CLI arguments.
    pub fn named(name: &str) -> Result<Self, EllipsoidError> {
        match name.to_ascii_lowercase().as_str() {
            "wgs84" => Ok(Self::wgs84()),
            "grs80" => Ok(Self::grs80()),
            "moon" => Ok(Self::moon()),
            "unit" | "unit_sphere" => Ok(Self::unit_sphere()),
            _ => Err(EllipsoidError::UnknownPreset(name.to_string())),
        }
    }

    /// Semi-axis lengths in meters.
    #[must_use]
    pub fn radii(&self) -> DVec3 {
        self.radii
    }

    /// Componentwise squared radii.
    #[must_use]
    pub fn radii_squared(&self) -> DVec3 {
        self.radii_squared
    }

    /// Componentwise fourth powers of the radii.
    #[must_use]
    pub fn radii_to_the_fourth(&self) -> DVec3 {
        self.radii_to_the_fourth
    }

    /// Componentwise reciprocal radii.
    #[must_use]
    pub fn one_over_radii(&self) -> DVec3 {
        self.one_over_radii
    }

    /// Componentwise reciprocal squared radii.
    #[must_use]
    pub fn one_over_radii_squared(&self) -> DVec3 {
        self.one_over_radii_squared
    }

    /// The smallest semi-axis length.
    #[must_use]
    pub fn minimum_radius(&self) -> f64 {
        self.minimum_radius
    }

    /// The largest semi-axis length.
    #[must_use]
    pub fn maximum_radius(&self) -> f64 {
        self.maximum_radius
    }

    /// Outward geodetic surface normal at a point on the ellipsoid surface:
    /// the normalized gradient of the implicit surface function.
    ///
    /// Returns `None` for the zero vector (and non-finite input), where no
    /// direction is defined.
    #[must_use]
    pub fn geodetic_surface_normal(&self, position: DVec3) -> Option<DVec3> {
        (position * self.one_over_radii_squared).try_normalize()
    }

    /// Geodetic surface normal for a cartographic position. Direction only;
    /// independent of the radii.
    #[must_use]
    pub fn geodetic_surface_normal_cartographic(&self, cartographic: Cartographic) -> DVec3 {
        let (sin_latitude, cos_latitude) = cartographic.latitude.sin_cos();
        let (sin_longitude, cos_longitude) = cartographic.longitude.sin_cos();
        DVec3::new(
            cos_latitude * cos_longitude,
            cos_latitude * sin_longitude,
            sin_latitude,
        )
    }

    /// Converts a geodetic position to Cartesian coordinates. Exact closed
    /// form, no iteration.
    #[must_use]
    pub fn cartographic_to_cartesian(&self, cartographic: Cartographic) -> DVec3 {
        let normal = self.geodetic_surface_normal_cartographic(cartographic);
        // radii_squared ⊙ n points along the position whose geodetic normal
        // is n; dividing by sqrt(n·k) lands it on the surface.
        let k = self.radii_squared * normal;
        let gamma = normal.dot(k).sqrt();
        k / gamma + cartographic.height * normal
    }

    /// Converts a Cartesian position to geodetic coordinates.
    ///
    /// Returns `None` when the position is within the center tolerance of the
    /// origin and therefore has no meaningful longitude/latitude.
    pub fn cartesian_to_cartographic(&self, position: DVec3) -> Option<Cartographic> {
        let surface_point = self.scale_to_geodetic_surface(position)?;
        let normal = self.geodetic_surface_normal(surface_point)?;
        let height_vector = position - surface_point;

        Some(Cartographic::new(
            normal.y.atan2(normal.x),
            asin_clamped(normal.z),
            // Negative height when the position is inside the surface.
            sign(height_vector.dot(position)) * height_vector.length(),
        ))
    }

    /// Scales `position` along its geodetic normal line onto the surface.
    /// See [`scale_to_geodetic_surface`](crate::scale_to_geodetic_surface)
    /// for the solve and its failure cases.
    pub fn scale_to_geodetic_surface(&self, position: DVec3) -> Option<DVec3> {
        scale_to_geodetic_surface(
            position,
            self.one_over_radii,
            self.one_over_radii_squared,
            self.center_tolerance_squared,
        )
    }

    /// Scales `position` along the ray from the center onto the surface.
    /// Closed form and cheaper than the geodetic projection; the result is
    /// the geocentric surface point, which only matches the geodetic one on
    /// a sphere.
    ///
    /// Returns `None` for the zero vector.
    pub fn scale_to_geocentric_surface(&self, position: DVec3) -> Option<DVec3> {
        if !position.is_finite() {
            return None;
        }
        let squared_norm = (position * position).dot(self.one_over_radii_squared);
        if squared_norm == 0.0 {
            return None;
        }
        Some(position * (1.0 / squared_norm.sqrt()))
    }

    /// Maps a position into the space where this ellipsoid is the unit
    /// sphere (componentwise division by the radii).
    #[must_use]
    pub fn transform_position_to_scaled_space(&self, position: DVec3) -> DVec3 {
        position * self.one_over_radii
    }

    /// Maps a scaled-space position back to world coordinates (componentwise
    /// multiplication by the radii).
    #[must_use]
    pub fn transform_position_from_scaled_space(&self, position: DVec3) -> DVec3 {
        position * self.radii
    }
}

fn radii_are_valid(radii: DVec3) -> bool {
    radii.is_finite() && radii.x > 0.0 && radii.y > 0.0 && radii.z > 0.0
}
