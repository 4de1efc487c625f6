//! Degree-angle normalization.

/// Normalize an angle to [0, 360) degrees.
///
/// Non-finite input is returned unchanged so callers can detect it.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if r >= 360.0 { 0.0 } else { r }
}

/// Signed angle in (-180, 180] degrees.
pub fn wrap_180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r > 180.0 { r - 360.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_in_range_is_identity() {
        assert_eq!(normalize_360(0.0), 0.0);
        assert!((normalize_360(45.0) - 45.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_wraps() {
        assert_eq!(normalize_360(360.0), 0.0);
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_stays_below_360() {
        let r = normalize_360(-1e-18);
        assert!((0.0..360.0).contains(&r), "got {r}");
    }

    #[test]
    fn normalize_passes_nan_through() {
        assert!(normalize_360(f64::NAN).is_nan());
    }

    #[test]
    fn wrap_signed() {
        assert!((wrap_180(190.0) + 170.0).abs() < 1e-12);
        assert!((wrap_180(-190.0) - 170.0).abs() < 1e-12);
        assert!((wrap_180(180.0) - 180.0).abs() < 1e-12);
        assert!((wrap_180(359.5) + 0.5).abs() < 1e-12);
    }
}
