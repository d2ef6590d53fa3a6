//! Longitude/latitude/height position relative to an ellipsoid.

/// A geodetic position: longitude and latitude in radians, height in meters
/// above (negative: below) the ellipsoid surface along the geodetic normal.
///
/// No range invariants are enforced. Longitude may be any real value and
/// callers normalize; latitude outside [-π/2, π/2] produces geometrically
/// meaningless but well-defined results.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cartographic {
    /// Longitude in radians.
    pub longitude: f64,
    /// Latitude in radians.
    pub latitude: f64,
    /// Height in meters above the ellipsoid surface.
    pub height: f64,
}

impl Cartographic {
    /// The position at longitude 0, latitude 0, height 0.
    pub const ZERO: Self = Self {
        longitude: 0.0,
        latitude: 0.0,
        height: 0.0,
    };

    /// Construct from angles in radians and height in meters.
    pub fn new(longitude: f64, latitude: f64, height: f64) -> Self {
        Self {
            longitude,
            latitude,
            height,
        }
    }

    /// Construct from angles in degrees; height stays in meters.
    pub fn from_degrees(longitude: f64, latitude: f64, height: f64) -> Self {
        Self::new(longitude.to_radians(), latitude.to_radians(), height)
    }
}
