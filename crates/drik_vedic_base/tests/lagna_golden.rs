//! Golden tests for the ascendant at real instants and places.

use drik_frames::mean_obliquity_rad;
use drik_vedic_base::{
    GeoPosition, VedicError, ascendant_deg, lagna_longitude_deg, local_sidereal_time,
};

const J2000: f64 = 2_451_545.0;

#[test]
fn greenwich_at_j2000() {
    // LST 18h41m50.5s (280.4606°); ascendant ≈ 24.28° (Mesha)
    let loc = GeoPosition::new(51.4779, 0.0).unwrap();
    let lst = local_sidereal_time(J2000, 0.0, false).to_degrees();
    assert!((lst - 280.4606).abs() < 1e-3, "LST = {lst}");
    let asc = lagna_longitude_deg(J2000, &loc, false).unwrap();
    assert!((asc - 24.276).abs() < 0.01, "asc = {asc}");
}

#[test]
fn new_delhi_at_j2000() {
    let loc = GeoPosition::new(28.6139, 77.209).unwrap();
    let asc = lagna_longitude_deg(J2000, &loc, false).unwrap();
    assert!((asc - 100.195).abs() < 0.01, "asc = {asc}");
}

#[test]
fn nutation_moves_ascendant_only_slightly() {
    let loc = GeoPosition::new(40.0, -74.0).unwrap();
    for k in 0..24 {
        let jd = J2000 + k as f64 / 24.0;
        let mean = lagna_longitude_deg(jd, &loc, false).unwrap();
        let apparent = lagna_longitude_deg(jd, &loc, true).unwrap();
        let diff = ((apparent - mean + 540.0) % 360.0 - 180.0).abs();
        assert!(diff < 0.02, "hour {k}: {diff}");
    }
}

#[test]
fn ascendant_advances_through_all_signs_in_a_day() {
    let loc = GeoPosition::new(13.08, 80.27).unwrap();
    let mut seen = [false; 12];
    for k in 0..96 {
        let jd = J2000 + k as f64 / 96.0;
        let asc = lagna_longitude_deg(jd, &loc, true).unwrap();
        seen[(asc / 30.0) as usize % 12] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn pole_is_undefined() {
    let loc = GeoPosition::new(90.0, 0.0).unwrap();
    assert!(matches!(
        lagna_longitude_deg(J2000, &loc, true),
        Err(VedicError::UndefinedAscendant { .. })
    ));
    assert!(ascendant_deg(0.3, -90.0, mean_obliquity_rad(0.0)).is_err());
}
