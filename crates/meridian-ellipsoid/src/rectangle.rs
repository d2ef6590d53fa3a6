//! Geographic rectangles and their Cartesian boundary samples.

use glam::DVec3;

use crate::{Cartographic, Ellipsoid};

/// A longitude/latitude rectangle in radians.
///
/// Bounds are inclusive. `west <= east` is required: a rectangle crossing the
/// antimeridian must be split by the caller before it reaches this type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl Rectangle {
    /// Construct from bounds in radians.
    ///
    /// # Panics
    ///
    /// Panics if `west > east` or `south > north`.
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        assert!(west <= east, "rectangle west {west} exceeds east {east}");
        assert!(south <= north, "rectangle south {south} exceeds north {north}");
        Self { west, south, east, north }
    }

    /// Construct from bounds in degrees.
    pub fn from_degrees(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self::new(
            west.to_radians(),
            south.to_radians(),
            east.to_radians(),
            north.to_radians(),
        )
    }

    /// Angular width in radians.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Angular height in radians.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// The center of the rectangle at height zero.
    #[must_use]
    pub fn center(&self) -> Cartographic {
        Cartographic::new(
            (self.west + self.east) * 0.5,
            (self.south + self.north) * 0.5,
            0.0,
        )
    }

    /// Whether the cartographic position lies within the bounds (inclusive).
    /// Height is ignored.
    #[must_use]
    pub fn contains(&self, position: Cartographic) -> bool {
        position.longitude >= self.west
            && position.longitude <= self.east
            && position.latitude >= self.south
            && position.latitude <= self.north
    }

    /// Cartesian samples of the rectangle boundary at `surface_height` meters
    /// above the ellipsoid, dense enough to bound the curved patch.
    ///
    /// Samples the four corners and the midpoints of the north and south
    /// edges. The east and west edges bow outward where they come closest to
    /// the equator, so when that extreme latitude is interior to the
    /// rectangle the two edge points there are sampled as well, for a total
    /// of six to eight positions.
    pub fn subsample(&self, ellipsoid: &Ellipsoid, surface_height: f64) -> Vec<DVec3> {
        let mut positions = Vec::with_capacity(8);
        let mut push = |longitude: f64, latitude: f64| {
            positions.push(ellipsoid.cartographic_to_cartesian(Cartographic::new(
                longitude,
                latitude,
                surface_height,
            )));
        };

        push(self.west, self.north);
        push(self.east, self.north);
        push(self.west, self.south);
        push(self.east, self.south);

        let longitude_midpoint = (self.west + self.east) * 0.5;
        push(longitude_midpoint, self.north);
        push(longitude_midpoint, self.south);

        // Latitude of the widest parallel the rectangle touches: the equator
        // when it spans it, otherwise the bound nearest the equator.
        let bulge_latitude = if self.south > 0.0 {
            self.south
        } else if self.north < 0.0 {
            self.north
        } else {
            0.0
        };
        if bulge_latitude != self.south && bulge_latitude != self.north {
            push(self.west, bulge_latitude);
            push(self.east, bulge_latitude);
        }

        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "exceeds east")]
    fn test_inverted_longitude_bounds_panic() {
        Rectangle::from_degrees(10.0, 0.0, -10.0, 5.0);
    }

    #[test]
    #[should_panic(expected = "exceeds north")]
    fn test_inverted_latitude_bounds_panic() {
        Rectangle::from_degrees(0.0, 20.0, 10.0, -20.0);
    }

    #[test]
    fn test_dimensions_and_center() {
        let rectangle = Rectangle::from_degrees(-10.0, 20.0, 30.0, 40.0);
        assert!((rectangle.width() - 40.0_f64.to_radians()).abs() < 1e-15);
        assert!((rectangle.height() - 20.0_f64.to_radians()).abs() < 1e-15);

        let center = rectangle.center();
        assert!((center.longitude - 10.0_f64.to_radians()).abs() < 1e-15);
        assert!((center.latitude - 30.0_f64.to_radians()).abs() < 1e-15);
        assert_eq!(center.height, 0.0);
    }

    #[test]
    fn test_contains() {
        let rectangle = Rectangle::from_degrees(-10.0, -5.0, 10.0, 5.0);
        assert!(rectangle.contains(Cartographic::from_degrees(0.0, 0.0, 0.0)));
        assert!(rectangle.contains(Cartographic::from_degrees(-10.0, 5.0, 0.0)));
        assert!(!rectangle.contains(Cartographic::from_degrees(-10.1, 0.0, 0.0)));
        assert!(!rectangle.contains(Cartographic::from_degrees(0.0, 5.1, 0.0)));
    }

    #[test]
    fn test_subsample_spanning_equator_has_bulge_points() {
        let wgs84 = Ellipsoid::wgs84();
        let rectangle = Rectangle::from_degrees(-20.0, -10.0, 20.0, 30.0);
        let positions = rectangle.subsample(&wgs84, 0.0);
        assert_eq!(positions.len(), 8);

        // The first corner is the northwest one.
        let northwest = wgs84.cartographic_to_cartesian(Cartographic::from_degrees(
            -20.0, 30.0, 0.0,
        ));
        assert!(positions[0].distance(northwest) < 1e-8);

        // The bulge points sit on the equator at the west and east bounds.
        let equator_west =
            wgs84.cartographic_to_cartesian(Cartographic::from_degrees(-20.0, 0.0, 0.0));
        assert!(positions[6].distance(equator_west) < 1e-8);
    }

    #[test]
    fn test_subsample_north_of_equator_has_no_extra_points() {
        let wgs84 = Ellipsoid::wgs84();
        // South bound is the latitude nearest the equator, already sampled by
        // the corners.
        let rectangle = Rectangle::from_degrees(-20.0, 10.0, 20.0, 30.0);
        assert_eq!(rectangle.subsample(&wgs84, 0.0).len(), 6);

        let southern = Rectangle::from_degrees(5.0, -45.0, 15.0, -30.0);
        assert_eq!(southern.subsample(&wgs84, 0.0).len(), 6);
    }

    #[test]
    fn test_subsample_honors_surface_height() {
        let wgs84 = Ellipsoid::wgs84();
        let rectangle = Rectangle::from_degrees(0.0, 10.0, 10.0, 20.0);
        let at_surface = rectangle.subsample(&wgs84, 0.0);
        let raised = rectangle.subsample(&wgs84, 8_000.0);

        for (low, high) in at_surface.iter().zip(&raised) {
            let lift = high.distance(*low);
            assert!((lift - 8_000.0).abs() < 1e-6, "lift was {lift}");
        }
    }
}
