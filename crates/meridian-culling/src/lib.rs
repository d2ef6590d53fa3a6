//! Visibility culling for ellipsoidal globes.
//!
//! Terrain renderers ask one question thousands of times per frame: is this
//! tile hidden behind the planet? [`EllipsoidalOccluder`] answers it with a
//! horizon test in the space where the ellipsoid is a unit sphere, and can
//! collapse a whole tile into a single precomputed culling point so the
//! per-frame cost stays flat.

mod occluder;

pub use occluder::EllipsoidalOccluder;
