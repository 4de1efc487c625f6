//! Time conversion for natal chart computation.
//!
//! A [`BirthMoment`] holds the civil calendar fields a caller supplies
//! (local wall-clock time plus its UTC offset). It converts into a
//! [`JulianInstant`], the continuous day count every downstream model
//! is a function of.
//!
//! The series models are evaluated directly on the UTC Julian Day; the
//! difference to a dynamical time scale is below the precision of the
//! truncated tables used downstream.

pub mod birth;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use birth::BirthMoment;
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, DAYS_PER_MILLENNIUM, J2000_JD, JulianInstant, Weekday, calendar_to_jd,
    days_in_month, is_leap_year, jd_to_calendar, weekday_from_jd,
};
pub use sidereal::{
    earth_rotation_angle_rad, gast_rad, gmst_rad, local_sidereal_time_rad,
};
