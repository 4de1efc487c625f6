//! Periodic-term series and their evaluation.
//!
//! A coordinate (L, B, or R) is a list of power groups; group `k` holds
//! terms `A·cos(B + C·τ)` whose sum is multiplied by `τᵏ`.

use drik_frames::SphericalCoords;

use crate::table::SeriesBody;

/// One term `[A, B, C]`: amplitude, phase (rad), frequency (rad per τ).
pub type Term = [f64; 3];

/// Amplitudes are tabulated in units of 1e-8 rad or 1e-8 AU.
pub const AMPLITUDE_SCALE: f64 = 1e-8;

/// Highest power of τ a series may carry.
pub const MAX_POWER: usize = 5;

/// Spherical coordinate a series produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coordinate {
    Longitude,
    Latitude,
    Radius,
}

impl Coordinate {
    pub const fn symbol(self) -> char {
        match self {
            Self::Longitude => 'L',
            Self::Latitude => 'B',
            Self::Radius => 'R',
        }
    }
}

/// Power groups for one coordinate of one body, index 0 upward.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateSeries {
    pub groups: &'static [&'static [Term]],
}

impl CoordinateSeries {
    /// Σₖ τᵏ Σᵢ Aᵢ·cos(Bᵢ + Cᵢ·τ), in radians (L, B) or AU (R).
    pub fn evaluate(&self, tau: f64) -> f64 {
        let mut power = 1.0;
        let mut total = 0.0;
        for group in self.groups {
            total += power * group_sum(group, tau);
            power *= tau;
        }
        total * AMPLITUDE_SCALE
    }

    /// Total number of terms across all power groups.
    pub fn term_count(&self) -> usize {
        self.groups.iter().map(|g| g.len()).sum()
    }
}

fn group_sum(group: &[Term], tau: f64) -> f64 {
    group
        .iter()
        .map(|&[a, b, c]| a * (b + c * tau).cos())
        .sum()
}

/// The three coordinate series of one body.
#[derive(Debug, Clone, Copy)]
pub struct BodySeries {
    pub body: SeriesBody,
    pub longitude: CoordinateSeries,
    pub latitude: CoordinateSeries,
    pub radius: CoordinateSeries,
}

impl BodySeries {
    /// Heliocentric ecliptic position at `tau` Julian millennia from J2000.0.
    pub fn heliocentric(&self, tau: f64) -> SphericalCoords {
        SphericalCoords::from_radians(
            self.longitude.evaluate(tau),
            self.latitude.evaluate(tau),
            self.radius.evaluate(tau),
        )
    }

    pub fn coordinates(&self) -> [(Coordinate, &CoordinateSeries); 3] {
        [
            (Coordinate::Longitude, &self.longitude),
            (Coordinate::Latitude, &self.latitude),
            (Coordinate::Radius, &self.radius),
        ]
    }
}
