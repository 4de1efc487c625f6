//! Lagna (Ascendant) and MC (Midheaven) computation.
//!
//! Standard spherical astronomy (Meeus, *Astronomical Algorithms* 2nd ed.,
//! Ch. 13 and 14). The ascendant is the point of the ecliptic rising on
//! the eastern horizon:
//!
//! `Asc = atan2(cos LST, −(sin ε·tan φ + cos ε·sin LST))`
//!
//! The textbook form `atan2(−cos LST, sin ε·tan φ + cos ε·sin LST)` has the
//! right tangent but lands on the setting point; negating both arguments
//! selects the rising one.

use std::f64::consts::TAU;

use drik_frames::{mean_obliquity_rad, normalize_360, nutation};
use drik_time::{DAYS_PER_CENTURY, J2000_JD, gast_rad, gmst_rad, local_sidereal_time_rad};

use crate::error::VedicError;
use crate::location::GeoPosition;

/// Latitudes this close to ±90° have no ascendant.
const POLE_EPSILON_DEG: f64 = 1e-9;

/// Local sidereal time in radians [0, 2π) at Julian Day `jd`.
///
/// With `use_nutation` the Greenwich time is apparent (GMST plus the
/// equation of the equinoxes), otherwise mean.
pub fn local_sidereal_time(jd: f64, longitude_deg: f64, use_nutation: bool) -> f64 {
    let gst = if use_nutation {
        let t = (jd - J2000_JD) / DAYS_PER_CENTURY;
        let ee = nutation(t).equation_of_equinoxes_rad(mean_obliquity_rad(t));
        gast_rad(jd, ee)
    } else {
        gmst_rad(jd)
    };
    local_sidereal_time_rad(gst, longitude_deg.to_radians())
}

/// Ecliptic longitude of the ascendant in degrees [0, 360).
///
/// Fails with [`VedicError::UndefinedAscendant`] at the poles, where
/// `tan φ` is unbounded, or if the result is otherwise not finite.
pub fn ascendant_deg(
    lst_rad: f64,
    latitude_deg: f64,
    obliquity_rad: f64,
) -> Result<f64, VedicError> {
    if latitude_deg.abs() >= 90.0 - POLE_EPSILON_DEG || !latitude_deg.is_finite() {
        return Err(VedicError::UndefinedAscendant { latitude_deg });
    }
    let phi = latitude_deg.to_radians();
    let asc = f64::atan2(
        lst_rad.cos(),
        -(obliquity_rad.sin() * phi.tan() + obliquity_rad.cos() * lst_rad.sin()),
    );
    if !asc.is_finite() {
        return Err(VedicError::UndefinedAscendant { latitude_deg });
    }
    Ok(normalize_360(asc.rem_euclid(TAU).to_degrees()))
}

/// Ecliptic longitude of the MC in degrees [0, 360).
///
/// `MC = atan2(sin LST, cos LST·cos ε)`
pub fn mc_deg(lst_rad: f64, obliquity_rad: f64) -> f64 {
    let mc = f64::atan2(lst_rad.sin(), lst_rad.cos() * obliquity_rad.cos());
    normalize_360(mc.to_degrees())
}

/// Tropical ascendant for an instant and place, using the mean obliquity
/// of date.
pub fn lagna_longitude_deg(
    jd: f64,
    location: &GeoPosition,
    use_nutation: bool,
) -> Result<f64, VedicError> {
    location.validate()?;
    let t = (jd - J2000_JD) / DAYS_PER_CENTURY;
    let lst = local_sidereal_time(jd, location.longitude_deg, use_nutation);
    ascendant_deg(lst, location.latitude_deg, mean_obliquity_rad(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPS_J2000: f64 = 0.409_092_804_222_328_6; // 23.4392911°

    /// Altitude (sin) and hour-angle sign of an ecliptic point.
    fn horizon_check(asc_deg: f64, lst: f64, lat_deg: f64) -> (f64, f64) {
        let lam = asc_deg.to_radians();
        let ra = f64::atan2(lam.sin() * EPS_J2000.cos(), lam.cos());
        let dec = (EPS_J2000.sin() * lam.sin()).asin();
        let h = lst - ra;
        let phi = lat_deg.to_radians();
        let sin_alt = phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos();
        (sin_alt, h.sin())
    }

    #[test]
    fn equator_lst_zero_is_cancer() {
        let asc = ascendant_deg(0.0, 0.0, EPS_J2000).unwrap();
        assert!((asc - 90.0).abs() < 1e-9, "asc = {asc}");
    }

    #[test]
    fn equator_lst_90_is_libra() {
        let asc = ascendant_deg(FRAC_PI_2, 0.0, EPS_J2000).unwrap();
        assert!((asc - 180.0).abs() < 1e-9, "asc = {asc}");
    }

    #[test]
    fn ascendant_rises_in_the_east() {
        for lat in (-60..=60).step_by(10) {
            for k in 0..36 {
                let lst = (k as f64 * 10.0 + 3.0).to_radians();
                let asc = ascendant_deg(lst, lat as f64, EPS_J2000).unwrap();
                let (sin_alt, sin_h) = horizon_check(asc, lst, lat as f64);
                assert!(sin_alt.abs() < 1e-9, "lat {lat} lst {k}: alt {sin_alt}");
                assert!(sin_h < 0.0, "lat {lat} lst {k}: setting, not rising");
            }
        }
    }

    #[test]
    fn mc_at_lst_zero() {
        assert!(mc_deg(0.0, EPS_J2000).abs() < 1e-9);
        assert!((mc_deg(FRAC_PI_2, EPS_J2000) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn poles_are_undefined() {
        for lat in [90.0, -90.0, 89.999_999_999_9] {
            assert!(matches!(
                ascendant_deg(1.0, lat, EPS_J2000),
                Err(VedicError::UndefinedAscendant { .. })
            ));
        }
    }

    #[test]
    fn nan_latitude_is_undefined() {
        assert!(ascendant_deg(1.0, f64::NAN, EPS_J2000).is_err());
    }

    #[test]
    fn apparent_and_mean_lst_differ_by_equation_of_equinoxes() {
        let jd = 2_451_545.0;
        let mean = local_sidereal_time(jd, 0.0, false);
        let apparent = local_sidereal_time(jd, 0.0, true);
        // Δψ·cos ε at J2000 ≈ −12.8″
        let diff_arcsec = (apparent - mean).to_degrees() * 3600.0;
        assert!((diff_arcsec + 12.78).abs() < 0.1, "EE = {diff_arcsec}″");
    }

    #[test]
    fn lagna_rejects_invalid_location() {
        let loc = GeoPosition {
            latitude_deg: 0.0,
            longitude_deg: 200.0,
        };
        assert!(matches!(
            lagna_longitude_deg(2_451_545.0, &loc, true),
            Err(VedicError::InvalidLocation(_))
        ));
    }
}
