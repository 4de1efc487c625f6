//! Gregorian calendar ↔ Julian Day conversion.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Ch. 7.

use std::fmt::{Display, Formatter};

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Days per Julian millennium (VSOP87 time argument).
pub const DAYS_PER_MILLENNIUM: f64 = 365_250.0;

/// Julian Day of a Gregorian calendar date with fractional day.
///
/// `day` may carry a fraction: `calendar_to_jd(2000, 1, 1.5)` is J2000.0.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Gregorian calendar date `(year, month, fractional day)` of a Julian Day.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let f = shifted - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month, or `None` for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// Day of the week, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

impl Weekday {
    /// 0-based index with Sunday = 0.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }
}

/// Weekday of the calendar day containing `jd`.
pub fn weekday_from_jd(jd: f64) -> Weekday {
    let idx = (jd + 1.5).floor().rem_euclid(7.0) as usize;
    ALL_WEEKDAYS[idx.min(6)]
}

/// A point on the continuous Julian Day axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JulianInstant {
    pub jd: f64,
}

impl JulianInstant {
    pub const fn new(jd: f64) -> Self {
        Self { jd }
    }

    /// Julian centuries since J2000.0: `(JD − 2451545) / 36525`.
    pub fn centuries(self) -> f64 {
        (self.jd - J2000_JD) / DAYS_PER_CENTURY
    }

    /// Julian millennia since J2000.0, the VSOP87 time argument.
    pub fn millennia(self) -> f64 {
        (self.jd - J2000_JD) / DAYS_PER_MILLENNIUM
    }

    /// Days since J2000.0.
    pub fn days_since_j2000(self) -> f64 {
        self.jd - J2000_JD
    }

    /// Shift by a (possibly fractional) number of days.
    pub fn offset_days(self, days: f64) -> Self {
        Self::new(self.jd + days)
    }
}

impl Display for JulianInstant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD {:.6}", self.jd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch() {
        assert!((calendar_to_jd(2000, 1, 1.5) - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn meeus_example_7a() {
        // Sputnik launch: 1957 October 4.81 → JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "jd = {jd}");
    }

    #[test]
    fn january_and_february_roll_to_previous_year() {
        // 1987 January 27.0 → 2446822.5 (Meeus Table 7.a)
        assert!((calendar_to_jd(1987, 1, 27.0) - 2_446_822.5).abs() < 1e-9);
        // 1988 June 19.5 → 2447332.0
        assert!((calendar_to_jd(1988, 6, 19.5) - 2_447_332.0).abs() < 1e-9);
    }

    #[test]
    fn inverse_conversion() {
        let (y, m, d) = jd_to_calendar(2_436_116.31);
        assert_eq!((y, m), (1957, 10));
        assert!((d - 4.81).abs() < 1e-6, "day = {d}");
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(2023, 4), Some(30));
        assert_eq!(days_in_month(2023, 12), Some(31));
        assert_eq!(days_in_month(2023, 13), None);
        assert_eq!(days_in_month(2023, 0), None);
    }

    #[test]
    fn weekday_of_j2000() {
        // 2000-01-01 was a Saturday.
        assert_eq!(weekday_from_jd(J2000_JD), Weekday::Saturday);
        assert_eq!(weekday_from_jd(2_451_544.5), Weekday::Saturday);
        // 1957-10-04 was a Friday.
        assert_eq!(weekday_from_jd(2_436_116.31), Weekday::Friday);
    }

    #[test]
    fn time_arguments() {
        let inst = JulianInstant::new(J2000_JD + DAYS_PER_CENTURY);
        assert!((inst.centuries() - 1.0).abs() < 1e-15);
        assert!((inst.millennia() - 0.1).abs() < 1e-15);
        assert!((inst.offset_days(-DAYS_PER_CENTURY).centuries()).abs() < 1e-15);
    }
}
