//! Ayanamsha: the tropical → sidereal offset.
//!
//! Each system is a J2000.0 reference value advanced at a constant rate of
//! general precession. The linear model drifts from a full precession
//! theory by well under an arcminute over a few centuries around J2000,
//! which is the accepted precision bound for natal charts.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use drik_frames::nutation;
use drik_time::{DAYS_PER_CENTURY, J2000_JD};

use crate::error::VedicError;

/// Lahiri (Chitrapaksha) ayanamsha at JD 2451545.0, degrees.
pub const LAHIRI_J2000_DEG: f64 = 23.857_298_6;

/// General precession in longitude, arcseconds per tropical year.
pub const PRECESSION_ARCSEC_PER_YEAR: f64 = 50.290_966;

/// Mean tropical year in days.
pub const TROPICAL_YEAR_DAYS: f64 = 365.242_198_781;

/// Sidereal reference systems.
///
/// The systems differ only in their J2000.0 reference value; all share
/// the same precession rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AyanamshaSystem {
    /// Lahiri (Chitrapaksha): Spica at 0° Libra.
    /// Indian government standard (Calendar Reform Committee, 1957).
    #[default]
    Lahiri,
    /// Same anchor as Lahiri, measured from the true (nutated) equinox.
    TrueChitra,
    /// Krishnamurti Paddhati.
    Krishnamurti,
    /// B.V. Raman, "Hindu Predictive Astrology".
    Raman,
    /// Fagan-Bradley, the Western sidereal standard.
    FaganBradley,
    /// Sri Yukteshwar, "The Holy Science" (1894).
    Yukteshwar,
}

const ALL_SYSTEMS: [AyanamshaSystem; 6] = [
    AyanamshaSystem::Lahiri,
    AyanamshaSystem::TrueChitra,
    AyanamshaSystem::Krishnamurti,
    AyanamshaSystem::Raman,
    AyanamshaSystem::FaganBradley,
    AyanamshaSystem::Yukteshwar,
];

impl AyanamshaSystem {
    /// Reference ayanamsha at J2000.0 in degrees.
    pub const fn reference_j2000_deg(self) -> f64 {
        match self {
            Self::Lahiri | Self::TrueChitra => LAHIRI_J2000_DEG,
            Self::Krishnamurti => 23.850,
            Self::Raman => 22.370,
            Self::FaganBradley => 24.736,
            Self::Yukteshwar => 22.376,
        }
    }

    /// Whether the system is measured from the true equinox.
    pub const fn uses_true_equinox(self) -> bool {
        matches!(self, Self::TrueChitra)
    }

    /// Stable lowercase key used in config files and on the command line.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Lahiri => "lahiri",
            Self::TrueChitra => "true-chitra",
            Self::Krishnamurti => "kp",
            Self::Raman => "raman",
            Self::FaganBradley => "fagan-bradley",
            Self::Yukteshwar => "yukteshwar",
        }
    }

    pub const fn all() -> &'static [AyanamshaSystem] {
        &ALL_SYSTEMS
    }
}

impl Display for AyanamshaSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AyanamshaSystem {
    type Err = VedicError;

    /// Case-insensitive; `_` and `-` are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        match key.as_str() {
            "lahiri" | "chitrapaksha" => Ok(Self::Lahiri),
            "true-chitra" | "true-lahiri" => Ok(Self::TrueChitra),
            "kp" | "krishnamurti" => Ok(Self::Krishnamurti),
            "raman" => Ok(Self::Raman),
            "fagan-bradley" | "fagan" => Ok(Self::FaganBradley),
            "yukteshwar" => Ok(Self::Yukteshwar),
            _ => Err(VedicError::UnknownAyanamsha(s.to_string())),
        }
    }
}

/// Mean ayanamsha in degrees at Julian Day `jd`.
///
/// `reference + (jd − 2451545.0) / 365.242198781 · 50.290966″`
pub fn ayanamsha_mean_deg(system: AyanamshaSystem, jd: f64) -> f64 {
    let years = (jd - J2000_JD) / TROPICAL_YEAR_DAYS;
    system.reference_j2000_deg() + years * PRECESSION_ARCSEC_PER_YEAR / 3600.0
}

/// Ayanamsha in degrees, with nutation in longitude added for systems on
/// the true equinox when `use_nutation` is set.
pub fn ayanamsha_deg(system: AyanamshaSystem, jd: f64, use_nutation: bool) -> f64 {
    let mean = ayanamsha_mean_deg(system, jd);
    if use_nutation && system.uses_true_equinox() {
        let t = (jd - J2000_JD) / DAYS_PER_CENTURY;
        mean + nutation(t).longitude_arcsec / 3600.0
    } else {
        mean
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lahiri_at_j2000() {
        let val = ayanamsha_mean_deg(AyanamshaSystem::Lahiri, J2000_JD);
        assert!((val - 23.857_298_6).abs() < 1e-12, "Lahiri at J2000 = {val}");
    }

    #[test]
    fn one_tropical_year_adds_rate() {
        let a0 = ayanamsha_mean_deg(AyanamshaSystem::Lahiri, J2000_JD);
        let a1 = ayanamsha_mean_deg(AyanamshaSystem::Lahiri, J2000_JD + TROPICAL_YEAR_DAYS);
        assert!(((a1 - a0) * 3600.0 - 50.290_966).abs() < 1e-6);
    }

    #[test]
    fn precession_backward() {
        let past = ayanamsha_mean_deg(AyanamshaSystem::Lahiri, J2000_JD - 36_525.0);
        assert!(past < LAHIRI_J2000_DEG);
        // ~1.397° per century
        assert!((LAHIRI_J2000_DEG - past - 1.397).abs() < 0.01);
    }

    #[test]
    fn true_chitra_adds_nutation() {
        // Δψ at J2000 ≈ −13.93″
        let mean = ayanamsha_deg(AyanamshaSystem::TrueChitra, J2000_JD, false);
        let apparent = ayanamsha_deg(AyanamshaSystem::TrueChitra, J2000_JD, true);
        assert!(((apparent - mean) * 3600.0 + 13.93).abs() < 0.05);
    }

    #[test]
    fn mean_systems_ignore_nutation() {
        for &sys in AyanamshaSystem::all() {
            if sys.uses_true_equinox() {
                continue;
            }
            assert_eq!(
                ayanamsha_deg(sys, 2_460_000.5, true),
                ayanamsha_deg(sys, 2_460_000.5, false),
                "{sys}"
            );
        }
    }

    #[test]
    fn all_references_in_range() {
        for &sys in AyanamshaSystem::all() {
            let val = sys.reference_j2000_deg();
            assert!((22.0..=25.0).contains(&val), "{sys:?} reference = {val}");
        }
    }

    #[test]
    fn keys_parse_back() {
        for &sys in AyanamshaSystem::all() {
            assert_eq!(sys.key().parse::<AyanamshaSystem>().unwrap(), sys);
        }
        assert_eq!(
            "Fagan_Bradley".parse::<AyanamshaSystem>().unwrap(),
            AyanamshaSystem::FaganBradley
        );
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(matches!(
            "galactic".parse::<AyanamshaSystem>(),
            Err(VedicError::UnknownAyanamsha(_))
        ));
    }
}
