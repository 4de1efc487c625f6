//! Periodic-term series for the Sun, Moon, and classical planets.
//!
//! Planets come from truncated VSOP87D tables (heliocentric ecliptic
//! coordinates referred to the mean equinox of date). The Moon comes from
//! the principal terms of the ELP-2000/82 lunar theory as tabulated by
//! Meeus, *Astronomical Algorithms*, Ch. 47.
//!
//! All tables are process-wide `static` data. [`PeriodicTermTable::validate`]
//! checks their integrity once, at engine construction.

pub mod error;
pub mod lunar;
pub mod table;
pub mod tables;
pub mod term;

pub use error::SeriesError;
pub use lunar::{LunarArguments, LunarPosition, lunar_arguments, moon_position, validate_lunar_terms};
pub use table::{ALL_SERIES_BODIES, PeriodicTermTable, SeriesBody, VSOP87D};
pub use term::{AMPLITUDE_SCALE, BodySeries, Coordinate, CoordinateSeries, MAX_POWER, Term};
