//! Tropical → sidereal conversion.
//!
//! Longitudes carry their zodiac in the type. A [`SiderealLongitude`] can
//! only be produced by [`to_sidereal`], and `to_sidereal` only accepts a
//! [`TropicalLongitude`], so the ayanamsha is subtracted exactly once.

/// Ecliptic longitude measured from the equinox of date, degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TropicalLongitude(f64);

impl TropicalLongitude {
    pub const fn new(deg: f64) -> Self {
        Self(deg)
    }

    pub const fn degrees(self) -> f64 {
        self.0
    }
}

/// Ecliptic longitude measured from the sidereal zero point, degrees in
/// [0, 360) (NaN if the input was not finite).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SiderealLongitude(f64);

impl SiderealLongitude {
    pub const fn degrees(self) -> f64 {
        self.0
    }
}

/// `((tropical − ayanamsha) mod 360 + 360) mod 360`.
pub fn to_sidereal(tropical: TropicalLongitude, ayanamsha_deg: f64) -> SiderealLongitude {
    let deg = ((tropical.0 - ayanamsha_deg) % 360.0 + 360.0) % 360.0;
    // A tiny negative remainder rounds up to exactly 360 after the shift.
    SiderealLongitude(if deg >= 360.0 { 0.0 } else { deg })
}
