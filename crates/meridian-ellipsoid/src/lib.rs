//! Tri-axial ellipsoid geometry: geodetic/Cartesian coordinate conversions
//! and the scaled-space transforms built on top of them.
//!
//! The central type is [`Ellipsoid`], an immutable value caching every
//! radii-derived quantity the conversions need. Positions come in two
//! flavors: Cartesian `DVec3` in meters and [`Cartographic`]
//! longitude/latitude/height. All angles are radians.

mod cartographic;
mod ellipsoid;
mod error;
mod rectangle;
mod surface;

pub use cartographic::Cartographic;
pub use ellipsoid::{CENTER_TOLERANCE_SQUARED, Ellipsoid};
pub use error::EllipsoidError;
pub use rectangle::Rectangle;
pub use surface::{MAX_NEWTON_STEPS, NEWTON_TOLERANCE, scale_to_geodetic_surface};
