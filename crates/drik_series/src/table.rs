//! The process-wide periodic-term table and its integrity check.

use std::fmt::{Display, Formatter};

use drik_frames::SphericalCoords;

use crate::error::SeriesError;
use crate::tables;
use crate::term::{BodySeries, CoordinateSeries, MAX_POWER};

/// Bodies with heliocentric series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesBody {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
}

pub const ALL_SERIES_BODIES: [SeriesBody; 6] = [
    SeriesBody::Mercury,
    SeriesBody::Venus,
    SeriesBody::Earth,
    SeriesBody::Mars,
    SeriesBody::Jupiter,
    SeriesBody::Saturn,
];

impl SeriesBody {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Earth => "Earth",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
        }
    }
}

impl Display for SeriesBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Read-only collection of body series.
#[derive(Debug, Clone, Copy)]
pub struct PeriodicTermTable {
    entries: &'static [&'static BodySeries],
}

/// The built-in truncated VSOP87D table.
pub static VSOP87D: PeriodicTermTable = PeriodicTermTable {
    entries: &[
        &tables::MERCURY,
        &tables::VENUS,
        &tables::EARTH,
        &tables::MARS,
        &tables::JUPITER,
        &tables::SATURN,
    ],
};

impl PeriodicTermTable {
    pub const fn from_entries(entries: &'static [&'static BodySeries]) -> Self {
        Self { entries }
    }

    /// Series for `body`, if the table carries it.
    pub fn series(&self, body: SeriesBody) -> Option<&'static BodySeries> {
        self.entries.iter().copied().find(|e| e.body == body)
    }

    /// Heliocentric position of `body` at `tau` Julian millennia, or `None`
    /// when the table has no entry for it.
    pub fn heliocentric(&self, body: SeriesBody, tau: f64) -> Option<SphericalCoords> {
        self.series(body).map(|s| s.heliocentric(tau))
    }

    pub fn term_count(&self) -> usize {
        self.entries
            .iter()
            .flat_map(|e| e.coordinates())
            .map(|(_, s)| s.term_count())
            .sum()
    }

    /// Check every body is present exactly once and every series is
    /// well-formed: 1..=6 non-empty power groups, finite coefficients,
    /// positive amplitudes, non-negative frequencies.
    pub fn validate(&self) -> Result<(), SeriesError> {
        for body in ALL_SERIES_BODIES {
            let count = self.entries.iter().filter(|e| e.body == body).count();
            if count != 1 {
                return Err(SeriesError::malformed(
                    body.name(),
                    format!("expected exactly one series, found {count}"),
                ));
            }
        }
        for entry in self.entries {
            for (coord, series) in entry.coordinates() {
                let label = format!("{} {}", entry.body, coord.symbol());
                validate_series(&label, series)?;
            }
        }
        Ok(())
    }
}

fn validate_series(label: &str, series: &CoordinateSeries) -> Result<(), SeriesError> {
    if series.groups.is_empty() || series.groups.len() > MAX_POWER + 1 {
        return Err(SeriesError::malformed(
            label,
            format!("{} power groups, expected 1..={}", series.groups.len(), MAX_POWER + 1),
        ));
    }
    for (k, group) in series.groups.iter().enumerate() {
        if group.is_empty() {
            return Err(SeriesError::malformed(label, format!("power group {k} is empty")));
        }
        for (i, &[a, b, c]) in group.iter().enumerate() {
            if !(a.is_finite() && b.is_finite() && c.is_finite()) {
                return Err(SeriesError::malformed(
                    label,
                    format!("group {k} term {i} has a non-finite coefficient"),
                ));
            }
            if a <= 0.0 || c < 0.0 {
                return Err(SeriesError::malformed(
                    label,
                    format!("group {k} term {i}: amplitude {a}, frequency {c}"),
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Term;

    const OK_GROUP: &[Term] = &[[100.0, 0.0, 0.0]];
    const NAN_GROUP: &[Term] = &[[f64::NAN, 0.0, 1.0]];
    const NEGATIVE_AMPLITUDE: &[Term] = &[[-5.0, 0.0, 1.0]];

    fn series(groups: &'static [&'static [Term]]) -> CoordinateSeries {
        CoordinateSeries { groups }
    }

    static BROKEN_EARTH: BodySeries = BodySeries {
        body: SeriesBody::Earth,
        longitude: CoordinateSeries { groups: &[NAN_GROUP] },
        latitude: CoordinateSeries { groups: &[OK_GROUP] },
        radius: CoordinateSeries { groups: &[OK_GROUP] },
    };

    static EARTH_ONLY: [&BodySeries; 1] = [&tables::EARTH];

    static WITH_BROKEN_EARTH: [&BodySeries; 6] = [
        &tables::MERCURY,
        &tables::VENUS,
        &BROKEN_EARTH,
        &tables::MARS,
        &tables::JUPITER,
        &tables::SATURN,
    ];

    #[test]
    fn builtin_table_is_valid() {
        VSOP87D.validate().unwrap();
    }

    #[test]
    fn builtin_table_has_every_body() {
        for body in ALL_SERIES_BODIES {
            let s = VSOP87D.series(body).unwrap();
            assert_eq!(s.body, body);
        }
    }

    #[test]
    fn builtin_table_size() {
        // Between one and two thousand terms across six bodies.
        let n = VSOP87D.term_count();
        assert!((900..2000).contains(&n), "term count = {n}");
    }

    #[test]
    fn missing_body_is_malformed() {
        let table = PeriodicTermTable::from_entries(&EARTH_ONLY);
        let err = table.validate().unwrap_err();
        assert!(matches!(err, SeriesError::MalformedReferenceData { .. }));
        assert!(err.to_string().contains("Mercury"), "{err}");
        assert!(table.heliocentric(SeriesBody::Mars, 0.0).is_none());
    }

    #[test]
    fn non_finite_coefficient_is_malformed() {
        let table = PeriodicTermTable::from_entries(&WITH_BROKEN_EARTH);
        let err = table.validate().unwrap_err();
        assert!(err.to_string().contains("Earth L"), "{err}");
    }

    #[test]
    fn negative_amplitude_is_malformed() {
        assert!(validate_series("x", &series(&[NEGATIVE_AMPLITUDE])).is_err());
    }

    #[test]
    fn group_count_bounds() {
        assert!(validate_series("x", &series(&[])).is_err());
        let seven: &'static [&'static [Term]] =
            &[OK_GROUP, OK_GROUP, OK_GROUP, OK_GROUP, OK_GROUP, OK_GROUP, OK_GROUP];
        assert!(validate_series("x", &series(seven)).is_err());
        assert!(validate_series("x", &series(&[OK_GROUP, OK_GROUP])).is_ok());
    }

    #[test]
    fn empty_group_is_malformed() {
        assert!(validate_series("x", &series(&[OK_GROUP, &[]])).is_err());
    }
}
