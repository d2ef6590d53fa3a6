//! Scalar numeric helpers shared by the Meridian geometry crates.

mod epsilon;
mod scalar;

pub use epsilon::equals_epsilon;
pub use scalar::{acos_clamped, asin_clamped, sign};
