//! Earth Rotation Angle, Greenwich sidereal time, and local sidereal time.
//!
//! Civil UTC is used in place of UT1; the sub-second difference is far
//! below the resolution of an ascendant in whole-sign houses.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle, radians in [0, 2π).
///
/// θ = 2π × (0.7790572732640 + 1.00273781191135448 × (JD − 2451545.0))
pub fn earth_rotation_angle_rad(jd: f64) -> f64 {
    let du = jd - J2000_JD;
    let theta = TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du);
    theta.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time, radians in [0, 2π).
///
/// GMST = ERA + (0.014506 + 4612.156534·T + 1.3915817·T² − 0.00000044·T³
/// − 0.000029956·T⁴ − 0.0000000368·T⁵)″
pub fn gmst_rad(jd: f64) -> f64 {
    let era = earth_rotation_angle_rad(jd);
    let t = (jd - J2000_JD) / DAYS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t2
        - 0.00000044 * t3
        - 0.000029956 * t4
        - 0.0000000368 * t5;

    (era + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Greenwich Apparent Sidereal Time, radians in [0, 2π).
///
/// `equation_of_equinoxes_rad` is Δψ·cos ε; pass `0.0` for mean time.
pub fn gast_rad(jd: f64, equation_of_equinoxes_rad: f64) -> f64 {
    (gmst_rad(jd) + equation_of_equinoxes_rad).rem_euclid(TAU)
}

/// Local sidereal time from a Greenwich sidereal time and east longitude.
pub fn local_sidereal_time_rad(gst: f64, longitude_east_rad: f64) -> f64 {
    (gst + longitude_east_rad).rem_euclid(TAU)
}
