//! Ecliptic frame helpers shared by the ephemeris and Vedic layers.
//!
//! - Angle normalization ([`normalize_360`], [`wrap_180`])
//! - Spherical ↔ Cartesian conversion in the ecliptic frame
//! - Mean and true obliquity of the ecliptic
//! - Truncated IAU 2000B nutation

pub mod angle;
pub mod nutation;
pub mod obliquity;
pub mod spherical;

pub use angle::{normalize_360, wrap_180};
pub use nutation::{Nutation, fundamental_arguments, nutation};
pub use obliquity::{mean_obliquity_deg, mean_obliquity_rad, true_obliquity_rad};
pub use spherical::{SphericalCoords, cartesian_to_spherical, spherical_to_cartesian, sub};
