//! Panchanga elements at an instant: tithi, karana, yoga, nakshatra, vara.
//!
//! All angular inputs are sidereal degrees. Tithi and karana depend only
//! on the Moon−Sun elongation, so the ayanamsha cancels; yoga uses the
//! sum and does not.

use std::fmt::{Display, Formatter};

use drik_frames::normalize_360;
use drik_time::{Weekday, weekday_from_jd};

use crate::nakshatra::{NAKSHATRA_SPAN, Nakshatra, nakshatra_from_longitude};

/// Elongation span of one tithi.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Elongation span of one karana (half a tithi).
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// Span of one yoga in the Sun+Moon sum.
pub const YOGA_SEGMENT_DEG: f64 = NAKSHATRA_SPAN;

/// Names of the fifteen tithis of a paksha; the last one differs by paksha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tithi {
    Pratipada,
    Dwitiya,
    Tritiya,
    Chaturthi,
    Panchami,
    Shashthi,
    Saptami,
    Ashtami,
    Navami,
    Dashami,
    Ekadashi,
    Dwadashi,
    Trayodashi,
    Chaturdashi,
    Purnima,
    Amavasya,
}

const TITHIS_IN_PAKSHA: [Tithi; 14] = [
    Tithi::Pratipada,
    Tithi::Dwitiya,
    Tithi::Tritiya,
    Tithi::Chaturthi,
    Tithi::Panchami,
    Tithi::Shashthi,
    Tithi::Saptami,
    Tithi::Ashtami,
    Tithi::Navami,
    Tithi::Dashami,
    Tithi::Ekadashi,
    Tithi::Dwadashi,
    Tithi::Trayodashi,
    Tithi::Chaturdashi,
];

impl Tithi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pratipada => "Pratipada",
            Self::Dwitiya => "Dwitiya",
            Self::Tritiya => "Tritiya",
            Self::Chaturthi => "Chaturthi",
            Self::Panchami => "Panchami",
            Self::Shashthi => "Shashthi",
            Self::Saptami => "Saptami",
            Self::Ashtami => "Ashtami",
            Self::Navami => "Navami",
            Self::Dashami => "Dashami",
            Self::Ekadashi => "Ekadashi",
            Self::Dwadashi => "Dwadashi",
            Self::Trayodashi => "Trayodashi",
            Self::Chaturdashi => "Chaturdashi",
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
        }
    }
}

/// Waxing (Shukla) or waning (Krishna) fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    Shukla,
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// Tithi classification from an elongation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TithiPosition {
    pub tithi: Tithi,
    /// 0-based tithi index (0..29).
    pub tithi_index: u8,
    pub paksha: Paksha,
    /// 1-based tithi number within the paksha (1-15).
    pub tithi_in_paksha: u8,
}

impl Display for TithiPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.paksha.name(), self.tithi.name())
    }
}

/// Tithi from the Moon−Sun elongation in degrees (any finite value).
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let elong = normalize_360(elongation_deg);
    let tithi_index = ((elong / TITHI_SEGMENT_DEG).floor() as u8).min(29);
    let (paksha, in_paksha) = if tithi_index < 15 {
        (Paksha::Shukla, tithi_index)
    } else {
        (Paksha::Krishna, tithi_index - 15)
    };
    let tithi = match (paksha, in_paksha) {
        (Paksha::Shukla, 14) => Tithi::Purnima,
        (Paksha::Krishna, 14) => Tithi::Amavasya,
        (_, i) => TITHIS_IN_PAKSHA[i as usize],
    };
    TithiPosition {
        tithi,
        tithi_index,
        paksha,
        tithi_in_paksha: in_paksha + 1,
    }
}

/// The eleven karanas: seven movable, four fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna
        )
    }
}

/// Karana classification from an elongation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KaranaPosition {
    pub karana: Karana,
    /// 0-based karana sequence index within the synodic month (0..59).
    pub karana_index: u8,
}

/// Karana from the Moon−Sun elongation in degrees.
///
/// Index 0 is Kimstughna, 1..=56 cycle the seven movable karanas, and
/// 57..=59 are Shakuni, Chatushpada, Naga.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaPosition {
    let elong = normalize_360(elongation_deg);
    let karana_index = ((elong / KARANA_SEGMENT_DEG).floor() as u8).min(59);
    let karana = match karana_index {
        0 => Karana::Kimstughna,
        57 => Karana::Shakuni,
        58 => Karana::Chatushpada,
        59 => Karana::Naga,
        i => MOVABLE_KARANAS[((i - 1) % 7) as usize],
    };
    KaranaPosition {
        karana,
        karana_index,
    }
}

/// The 27 nitya yogas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Yoga {
    Vishkumbha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyana,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkumbha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyana,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkumbha => "Vishkumbha",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarma => "Sukarma",
            Self::Dhriti => "Dhriti",
            Self::Shula => "Shula",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyana => "Variyana",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }
}

/// Yoga classification from the sidereal Sun+Moon sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YogaPosition {
    pub yoga: Yoga,
    /// 0-based yoga index (0..26).
    pub yoga_index: u8,
}

/// Yoga from `sun + moon` in sidereal degrees (any finite value).
pub fn yoga_from_sum(sum_deg: f64) -> YogaPosition {
    let sum = normalize_360(sum_deg);
    let yoga_index = ((sum / YOGA_SEGMENT_DEG).floor() as u8).min(26);
    YogaPosition {
        yoga: ALL_YOGAS[yoga_index as usize],
        yoga_index,
    }
}

/// Vedic weekday, named for its planetary lord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

impl Vaar {
    pub const fn from_weekday(day: Weekday) -> Self {
        match day {
            Weekday::Sunday => Self::Ravivaar,
            Weekday::Monday => Self::Somvaar,
            Weekday::Tuesday => Self::Mangalvaar,
            Weekday::Wednesday => Self::Budhvaar,
            Weekday::Thursday => Self::Guruvaar,
            Weekday::Friday => Self::Shukravaar,
            Weekday::Saturday => Self::Shanivaar,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Ravivaar",
            Self::Somvaar => "Somvaar",
            Self::Mangalvaar => "Mangalvaar",
            Self::Budhvaar => "Budhvaar",
            Self::Guruvaar => "Guruvaar",
            Self::Shukravaar => "Shukravaar",
            Self::Shanivaar => "Shanivaar",
        }
    }

    /// Sunday = 0.
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Vaar of the civil day containing Julian Day `jd` (at Greenwich).
pub fn vaar_from_jd(jd: f64) -> Vaar {
    Vaar::from_weekday(weekday_from_jd(jd))
}

/// The five limbs at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panchanga {
    pub tithi: TithiPosition,
    pub karana: KaranaPosition,
    pub yoga: YogaPosition,
    /// Nakshatra occupied by the Moon.
    pub nakshatra: Nakshatra,
    pub vaar: Vaar,
}

/// Panchanga from sidereal Sun and Moon longitudes and the local weekday.
///
/// Returns `None` if either longitude is not finite.
pub fn panchanga(sun_sidereal_deg: f64, moon_sidereal_deg: f64, weekday: Weekday) -> Option<Panchanga> {
    if !sun_sidereal_deg.is_finite() || !moon_sidereal_deg.is_finite() {
        return None;
    }
    let elongation = moon_sidereal_deg - sun_sidereal_deg;
    Some(Panchanga {
        tithi: tithi_from_elongation(elongation),
        karana: karana_from_elongation(elongation),
        yoga: yoga_from_sum(sun_sidereal_deg + moon_sidereal_deg),
        nakshatra: nakshatra_from_longitude(moon_sidereal_deg)?.nakshatra,
        vaar: Vaar::from_weekday(weekday),
    })
}
