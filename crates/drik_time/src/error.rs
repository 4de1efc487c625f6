//! Error types for civil time validation.

use thiserror::Error;

/// A birth moment whose calendar or offset fields cannot be represented.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Month outside 1..=12.
    #[error("month {0} is outside 1..=12")]
    InvalidMonth(u32),
    /// Day outside the month's range (e.g. 31 April, 29 February 2023).
    #[error("day {day} does not exist in {year:04}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },
    /// Hour outside 0..=23.
    #[error("hour {0} is outside 0..=23")]
    InvalidHour(u32),
    /// Minute outside 0..=59.
    #[error("minute {0} is outside 0..=59")]
    InvalidMinute(u32),
    /// A calendar field given as a number that is not a whole value of
    /// the field's type (negative month, fractional hour, overflow).
    #[error("{field} {value} is not a whole number in range")]
    InvalidField { field: &'static str, value: f64 },
    /// UTC offset that is non-finite or beyond ±14 hours.
    #[error("UTC offset {0} h is not a finite value within ±14 h")]
    InvalidUtcOffset(f64),
}
