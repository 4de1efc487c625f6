//! Ecliptic spherical ↔ Cartesian conversion.
//!
//! Distances are in astronomical units throughout.

/// Ecliptic spherical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in degrees, [0, 360).
    pub lon_deg: f64,
    /// Latitude in degrees, [-90, 90].
    pub lat_deg: f64,
    /// Distance from the origin in AU.
    pub distance_au: f64,
}

impl SphericalCoords {
    /// Build from radians, the unit the periodic series produce.
    pub fn from_radians(lon_rad: f64, lat_rad: f64, distance_au: f64) -> Self {
        Self {
            lon_deg: lon_rad.to_degrees().rem_euclid(360.0),
            lat_deg: lat_rad.to_degrees(),
            distance_au,
        }
    }
}

/// `[x, y, z]` from spherical coordinates:
/// x = r·cosβ·cosλ, y = r·cosβ·sinλ, z = r·sinβ.
pub fn spherical_to_cartesian(s: &SphericalCoords) -> [f64; 3] {
    let lon = s.lon_deg.to_radians();
    let lat = s.lat_deg.to_radians();
    let cos_lat = lat.cos();
    [
        s.distance_au * cos_lat * lon.cos(),
        s.distance_au * cos_lat * lon.sin(),
        s.distance_au * lat.sin(),
    ]
}

/// Spherical coordinates of a Cartesian vector.
///
/// The zero vector maps to all-zero coordinates.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();
    if r == 0.0 {
        return SphericalCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance_au: 0.0,
        };
    }
    SphericalCoords {
        lon_deg: crate::angle::normalize_360(y.atan2(x).to_degrees()),
        lat_deg: (z / r).asin().to_degrees(),
        distance_au: r,
    }
}

/// Component-wise `a − b`.
pub fn sub(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    #[test]
    fn plus_x_axis() {
        let s = cartesian_to_spherical(&[1.5, 0.0, 0.0]);
        assert!(s.lon_deg.abs() < EPS);
        assert!(s.lat_deg.abs() < EPS);
        assert!((s.distance_au - 1.5).abs() < EPS);
    }

    #[test]
    fn minus_y_axis_is_270() {
        let s = cartesian_to_spherical(&[0.0, -2.0, 0.0]);
        assert!((s.lon_deg - 270.0).abs() < EPS, "lon = {}", s.lon_deg);
    }

    #[test]
    fn north_pole() {
        let s = cartesian_to_spherical(&[0.0, 0.0, 3.0]);
        assert!((s.lat_deg - 90.0).abs() < EPS);
        assert!((s.distance_au - 3.0).abs() < EPS);
    }

    #[test]
    fn origin_is_zero() {
        let s = cartesian_to_spherical(&[0.0, 0.0, 0.0]);
        assert_eq!(s.distance_au, 0.0);
        assert_eq!(s.lon_deg, 0.0);
    }

    #[test]
    fn spherical_cartesian_inverse() {
        let s = SphericalCoords {
            lon_deg: 123.4,
            lat_deg: -5.6,
            distance_au: 2.7,
        };
        let back = cartesian_to_spherical(&spherical_to_cartesian(&s));
        assert!((back.lon_deg - s.lon_deg).abs() < EPS);
        assert!((back.lat_deg - s.lat_deg).abs() < EPS);
        assert!((back.distance_au - s.distance_au).abs() < EPS);
    }

    #[test]
    fn from_radians_normalizes_longitude() {
        let s = SphericalCoords::from_radians(-std::f64::consts::FRAC_PI_2, 0.1, 1.0);
        assert!((s.lon_deg - 270.0).abs() < EPS);
        assert!((s.lat_deg - 0.1f64.to_degrees()).abs() < EPS);
    }

    #[test]
    fn vector_difference() {
        assert_eq!(sub(&[3.0, 2.0, 1.0], &[1.0, 1.0, 1.0]), [2.0, 1.0, 0.0]);
    }
}
