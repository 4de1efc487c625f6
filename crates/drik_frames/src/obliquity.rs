//! Obliquity of the ecliptic.
//!
//! Mean obliquity: IAU 2006 (Hilton et al. 2006), arcseconds:
//! ε₀ = 84381.406 − 46.836769·T − 0.0001831·T² + 0.00200340·T³
//!      − 0.000000576·T⁴ − 0.0000434·T⁵

/// Mean obliquity of the ecliptic in degrees, `t` in Julian centuries.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    const COEFFS: [f64; 6] = [
        84381.406,
        -46.836769,
        -0.0001831,
        0.00200340,
        -0.000000576,
        -0.0000434,
    ];
    let arcsec = COEFFS.iter().rev().fold(0.0, |acc, c| acc * t + c);
    arcsec / 3600.0
}

/// Mean obliquity of the ecliptic in radians.
pub fn mean_obliquity_rad(t: f64) -> f64 {
    mean_obliquity_deg(t).to_radians()
}

/// True obliquity: mean obliquity plus nutation in obliquity (arcsec).
pub fn true_obliquity_rad(t: f64, delta_epsilon_arcsec: f64) -> f64 {
    (mean_obliquity_deg(t) + delta_epsilon_arcsec / 3600.0).to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_value() {
        // 23°26′21.406″
        let eps = mean_obliquity_deg(0.0);
        assert!((eps - 23.439_279_444).abs() < 1e-8, "ε₀ = {eps}");
    }

    #[test]
    fn decreases_over_time() {
        // Roughly −47″ per century.
        let drift = (mean_obliquity_deg(1.0) - mean_obliquity_deg(0.0)) * 3600.0;
        assert!((drift + 46.84).abs() < 0.01, "drift = {drift}″");
    }

    #[test]
    fn meeus_example_22a() {
        // 1987 April 10, 0h TD: ε₀ = 23°26′27.407″ (Meeus 22.a uses the
        // IAU 1980 polynomial, which sits ~0.04″ above IAU 2006 here).
        let t = -0.127_296_372_348;
        let eps = mean_obliquity_deg(t);
        let expected = 23.0 + 26.0 / 60.0 + 27.407 / 3600.0;
        assert!((eps - expected).abs() < 0.1 / 3600.0, "ε₀ = {eps}");
    }

    #[test]
    fn true_adds_nutation() {
        let t = 0.1;
        let diff = (true_obliquity_rad(t, 9.0) - mean_obliquity_rad(t)).to_degrees() * 3600.0;
        assert!((diff - 9.0).abs() < 1e-6);
    }
}
