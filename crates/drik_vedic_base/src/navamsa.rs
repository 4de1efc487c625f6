//! Navamsa (D9) divisional chart.
//!
//! Each sign is cut into nine parts of 3°20′. The navamsa sign of a point
//! is `(sign·9 + part) mod 12`, which starts movable signs from themselves,
//! fixed signs from their ninth, and dual signs from their fifth.

use crate::rashi::{RASHI_SPAN, Rashi, rashi_from_longitude};

/// Span of one navamsa: 30/9 = 3.3333... degrees.
pub const NAVAMSA_SPAN: f64 = RASHI_SPAN / 9.0;

/// Navamsa of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavamsaInfo {
    /// Sign occupied in the D9 chart.
    pub rashi: Rashi,
    /// Which ninth of the natal sign, 1..=9.
    pub number: u8,
}

/// Navamsa sign index 0..=11 from a natal sign index and degree in sign.
pub fn navamsa_sign(sign_index: u8, degree_in_sign: f64) -> u8 {
    let part = ((degree_in_sign / NAVAMSA_SPAN).floor() as u8).min(8);
    ((sign_index % 12) * 9 + part) % 12
}

/// Navamsa of a sidereal longitude; `None` for non-finite input.
pub fn navamsa_from_longitude(sidereal_lon_deg: f64) -> Option<NavamsaInfo> {
    let info = rashi_from_longitude(sidereal_lon_deg)?;
    let number = ((info.degrees_in_rashi / NAVAMSA_SPAN).floor() as u8).min(8) + 1;
    Some(NavamsaInfo {
        rashi: Rashi::from_index(navamsa_sign(info.rashi_index, info.degrees_in_rashi)),
        number,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movable_sign_starts_from_itself() {
        // Mesha 0°..3°20′ → Mesha; Karka → Karka
        assert_eq!(navamsa_from_longitude(1.0).unwrap().rashi, Rashi::Mesha);
        assert_eq!(navamsa_from_longitude(91.0).unwrap().rashi, Rashi::Karka);
    }

    #[test]
    fn fixed_sign_starts_from_ninth() {
        // Vrishabha starts from Makara
        assert_eq!(navamsa_from_longitude(31.0).unwrap().rashi, Rashi::Makara);
    }

    #[test]
    fn dual_sign_starts_from_fifth() {
        // Mithuna starts from Tula
        assert_eq!(navamsa_from_longitude(61.0).unwrap().rashi, Rashi::Tula);
    }

    #[test]
    fn last_navamsa_of_meena() {
        let n = navamsa_from_longitude(359.9).unwrap();
        assert_eq!(n.number, 9);
        assert_eq!(n.rashi, Rashi::Meena);
    }

    #[test]
    fn opposite_points_are_six_signs_apart() {
        for k in 0..100 {
            let lon = k as f64 * 1.7 + 0.05;
            let a = navamsa_from_longitude(lon).unwrap().rashi.index();
            let b = navamsa_from_longitude(lon + 180.0).unwrap().rashi.index();
            assert_eq!((b + 12 - a) % 12, 6, "lon {lon}");
        }
    }

    #[test]
    fn non_finite_is_none() {
        assert!(navamsa_from_longitude(f64::NAN).is_none());
    }
}
