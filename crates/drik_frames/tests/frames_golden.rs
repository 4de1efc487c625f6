//! Reference values for obliquity and nutation near J2000.0.

use drik_frames::{
    SphericalCoords, cartesian_to_spherical, mean_obliquity_deg, nutation, spherical_to_cartesian,
    sub, true_obliquity_rad,
};

#[test]
fn nutation_at_j2000() {
    // Δψ ≈ −13.93″, Δε ≈ −5.77″ at 2000-01-01 12:00 TT.
    let n = nutation(0.0);
    assert!((n.longitude_arcsec + 13.93).abs() < 0.1, "Δψ = {}", n.longitude_arcsec);
    assert!((n.obliquity_arcsec + 5.77).abs() < 0.1, "Δε = {}", n.obliquity_arcsec);
}

#[test]
fn true_obliquity_at_j2000() {
    let n = nutation(0.0);
    let eps = true_obliquity_rad(0.0, n.obliquity_arcsec).to_degrees();
    let expected = mean_obliquity_deg(0.0) - 5.77 / 3600.0;
    assert!((eps - expected).abs() < 0.1 / 3600.0, "ε = {eps}");
}

#[test]
fn geocentric_vector_of_body_at_origin_is_antipodal() {
    // A body at the origin seen from a point at (λ, β, r) appears at
    // (λ + 180°, −β, r).
    let observer = SphericalCoords {
        lon_deg: 100.0,
        lat_deg: 0.001,
        distance_au: 0.983,
    };
    let rel = sub(&[0.0; 3], &spherical_to_cartesian(&observer));
    let s = cartesian_to_spherical(&rel);
    assert!((s.lon_deg - 280.0).abs() < 1e-10, "lon = {}", s.lon_deg);
    assert!((s.lat_deg + 0.001).abs() < 1e-10, "lat = {}", s.lat_deg);
    assert!((s.distance_au - 0.983).abs() < 1e-12);
}
