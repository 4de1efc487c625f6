//! Heliocentric → geocentric conversion.

use drik_frames::{SphericalCoords, cartesian_to_spherical, spherical_to_cartesian, sub};

/// Position of the Sun in heliocentric coordinates: the origin.
pub const SUN_AT_ORIGIN: SphericalCoords = SphericalCoords {
    lon_deg: 0.0,
    lat_deg: 0.0,
    distance_au: 0.0,
};

/// Geocentric ecliptic coordinates of a body from its heliocentric
/// position and Earth's, both at the same instant.
///
/// The subtraction is done on Cartesian vectors. Subtracting longitudes
/// directly is wrong whenever either latitude is non-zero.
pub fn heliocentric_to_geocentric(body: &SphericalCoords, earth: &SphericalCoords) -> SphericalCoords {
    let rel = sub(&spherical_to_cartesian(body), &spherical_to_cartesian(earth));
    cartesian_to_spherical(&rel)
}
