//! Civil birth moment: local calendar fields plus a UTC offset.

use std::fmt::{Display, Formatter};

use crate::error::TimeError;
use crate::julian::{JulianInstant, Weekday, calendar_to_jd, days_in_month, weekday_from_jd};

/// Largest accepted magnitude of a UTC offset, in hours.
pub const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

/// Local wall-clock date/time at the place of birth.
///
/// `utc_offset_hours` is the zone offset in effect at that moment
/// (east-positive, e.g. `5.5` for IST). Seconds are not tracked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthMoment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub utc_offset_hours: f64,
}

impl BirthMoment {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        utc_offset_hours: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            utc_offset_hours,
        }
    }

    /// Build a moment from loosely typed numeric fields, as they arrive in
    /// JSON, and validate it.
    pub fn from_numeric_fields(
        year: f64,
        month: f64,
        day: f64,
        hour: f64,
        minute: f64,
        utc_offset_hours: f64,
    ) -> Result<Self, TimeError> {
        let year = whole_field("year", year, i32::MIN as f64, i32::MAX as f64)? as i32;
        let month = whole_field("month", month, 0.0, u32::MAX as f64)? as u32;
        let day = whole_field("day", day, 0.0, u32::MAX as f64)? as u32;
        let hour = whole_field("hour", hour, 0.0, u32::MAX as f64)? as u32;
        let minute = whole_field("minute", minute, 0.0, u32::MAX as f64)? as u32;
        let moment = Self::new(year, month, day, hour, minute, utc_offset_hours);
        moment.validate()?;
        Ok(moment)
    }

    /// Reject calendar fields that do not name a real local moment.
    pub fn validate(&self) -> Result<(), TimeError> {
        let max_day = days_in_month(self.year, self.month).ok_or(TimeError::InvalidMonth(self.month))?;
        if self.day == 0 || self.day > max_day {
            return Err(TimeError::InvalidDay {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidHour(self.hour));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidMinute(self.minute));
        }
        if !self.utc_offset_hours.is_finite() || self.utc_offset_hours.abs() > MAX_UTC_OFFSET_HOURS
        {
            return Err(TimeError::InvalidUtcOffset(self.utc_offset_hours));
        }
        Ok(())
    }

    /// Julian Day of the local calendar date at 00:00 (no offset applied).
    pub fn local_midnight_jd(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64)
    }

    /// Convert to the UTC Julian Day of this moment.
    ///
    /// JD(date at 0h) + ((hour − offset) + minute/60) / 24.
    pub fn to_julian_instant(&self) -> Result<JulianInstant, TimeError> {
        self.validate()?;
        let hours_utc = (self.hour as f64 - self.utc_offset_hours) + self.minute as f64 / 60.0;
        Ok(JulianInstant::new(self.local_midnight_jd() + hours_utc / 24.0))
    }

    /// Civil weekday of the local calendar date.
    pub fn local_weekday(&self) -> Weekday {
        weekday_from_jd(self.local_midnight_jd())
    }
}

fn whole_field(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64, TimeError> {
    if value.is_finite() && value.fract() == 0.0 && (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(TimeError::InvalidField { field, value })
    }
}

impl Display for BirthMoment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.utc_offset_hours < 0.0 { '-' } else { '+' };
        let total_min = (self.utc_offset_hours.abs() * 60.0).round() as u32;
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}{}{:02}:{:02}",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            sign,
            total_min / 60,
            total_min % 60
        )
    }
}
