//! Geographic position of the observer.

use crate::error::VedicError;

/// Latitude and east-positive longitude in degrees.
///
/// Values outside −90..90 / −180..180 are rejected, never clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl GeoPosition {
    /// Validated constructor.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, VedicError> {
        let pos = Self {
            latitude_deg,
            longitude_deg,
        };
        pos.validate()?;
        Ok(pos)
    }

    pub fn validate(&self) -> Result<(), VedicError> {
        if !self.latitude_deg.is_finite() || !self.longitude_deg.is_finite() {
            return Err(VedicError::InvalidLocation("coordinates must be finite"));
        }
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(VedicError::InvalidLocation(
                "latitude must be within [-90, 90]",
            ));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(VedicError::InvalidLocation(
                "longitude must be within [-180, 180]",
            ));
        }
        Ok(())
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert!(GeoPosition::new(90.0, 180.0).is_ok());
        assert!(GeoPosition::new(-90.0, -180.0).is_ok());
        assert!(GeoPosition::new(55.75, 37.6167).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            GeoPosition::new(90.5, 0.0),
            Err(VedicError::InvalidLocation(_))
        ));
        assert!(matches!(
            GeoPosition::new(0.0, -180.01),
            Err(VedicError::InvalidLocation(_))
        ));
    }

    #[test]
    fn rejects_nan() {
        assert!(GeoPosition::new(f64::NAN, 0.0).is_err());
        assert!(GeoPosition::new(0.0, f64::INFINITY).is_err());
    }
}
