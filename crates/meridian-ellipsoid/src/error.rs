//! Error types for ellipsoid construction from external data.

/// Errors produced when resolving or validating an ellipsoid description
/// that originates outside the program (configuration files, CLI arguments).
///
/// Geometric failure modes (degenerate inputs, center proximity, parallel
/// horizon geometry) are not errors; those are `None` returns on the
/// operations themselves.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum EllipsoidError {
    /// A preset name matched no known ellipsoid.
    #[error("unknown ellipsoid preset `{0}` (known presets: wgs84, grs80, moon, unit)")]
    UnknownPreset(String),

    /// Radii were non-positive or non-finite.
    #[error("ellipsoid radii must be positive and finite, got ({0}, {1}, {2})")]
    InvalidRadii(f64, f64, f64),
}
