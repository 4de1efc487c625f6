//! Combined sign / nakshatra / pada placement of a sidereal longitude.

use crate::nakshatra::{NAKSHATRA_SPAN, Nakshatra, nakshatra_from_longitude};
use crate::rashi::{Dms, Rashi, deg_to_dms, rashi_from_longitude};
use crate::sidereal::SiderealLongitude;

/// Where a sidereal longitude falls in the zodiac.
///
/// `rashi.index() * 30 + degree_in_sign` reconstructs `longitude_deg`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiderealPlacement {
    /// Sidereal longitude in [0, 360).
    pub longitude_deg: f64,
    pub rashi: Rashi,
    /// Degrees within the sign, [0, 30).
    pub degree_in_sign: f64,
    pub nakshatra: Nakshatra,
    /// 1..=4
    pub pada: u8,
}

impl SiderealPlacement {
    pub fn sign_index(&self) -> u8 {
        self.rashi.index()
    }

    pub fn nakshatra_index(&self) -> u8 {
        self.nakshatra.index()
    }

    pub fn degree_in_sign_dms(&self) -> Dms {
        deg_to_dms(self.degree_in_sign)
    }

    /// Offset within the nakshatra, [0, 13.333...).
    pub fn degree_in_nakshatra(&self) -> f64 {
        self.longitude_deg - self.nakshatra.index() as f64 * NAKSHATRA_SPAN
    }
}

/// Place a sidereal longitude.
///
/// Returns `None`, an explicit undefined placement, unless the value is
/// finite and within [0, 360).
pub fn zodiac_placement(lon: SiderealLongitude) -> Option<SiderealPlacement> {
    placement_from_degrees(lon.degrees())
}

/// Same as [`zodiac_placement`] for a raw degree value that is already
/// sidereal.
pub fn placement_from_degrees(deg: f64) -> Option<SiderealPlacement> {
    if !deg.is_finite() || !(0.0..360.0).contains(&deg) {
        return None;
    }
    let rashi = rashi_from_longitude(deg)?;
    let nak = nakshatra_from_longitude(deg)?;
    Some(SiderealPlacement {
        longitude_deg: deg,
        rashi: rashi.rashi,
        degree_in_sign: rashi.degrees_in_rashi,
        nakshatra: nak.nakshatra,
        pada: nak.pada,
    })
}
