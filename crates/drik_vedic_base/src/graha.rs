//! The nine grahas of a Vedic chart.
//!
//! Seven are physical bodies placed by the ephemeris engine; Rahu and Ketu
//! are the lunar nodes.

use std::fmt::{Display, Formatter};

use drik_core::Body;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas (sapta grahas), excluding Rahu and Ketu.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Lowercase English key, as used in chart responses.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Surya => "sun",
            Self::Chandra => "moon",
            Self::Mangal => "mars",
            Self::Buddh => "mercury",
            Self::Guru => "jupiter",
            Self::Shukra => "venus",
            Self::Shani => "saturn",
            Self::Rahu => "rahu",
            Self::Ketu => "ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Ephemeris body, or `None` for the nodes.
    pub const fn body(self) -> Option<Body> {
        match self {
            Self::Surya => Some(Body::Sun),
            Self::Chandra => Some(Body::Moon),
            Self::Mangal => Some(Body::Mars),
            Self::Buddh => Some(Body::Mercury),
            Self::Guru => Some(Body::Jupiter),
            Self::Shukra => Some(Body::Venus),
            Self::Shani => Some(Body::Saturn),
            Self::Rahu | Self::Ketu => None,
        }
    }

    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }
}

impl Display for Graha {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn sapta_grahas_have_bodies() {
        for g in SAPTA_GRAHAS {
            assert!(g.body().is_some(), "{g}");
            assert!(!g.is_node());
        }
        assert!(Graha::Rahu.body().is_none());
        assert!(Graha::Ketu.body().is_none());
    }

    #[test]
    fn keys_unique_and_lowercase() {
        let mut keys: Vec<_> = ALL_GRAHAS.iter().map(|g| g.key()).collect();
        assert!(keys.iter().all(|k| k.chars().all(|c| c.is_ascii_lowercase())));
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 9);
    }
}
