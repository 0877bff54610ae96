//! Calendar and time helpers for the astro ephemeris.
//!
//! This crate provides:
//! - Julian Day ↔ calendar conversions with the 1582 Gregorian switch
//! - A whole-day Julian index used by the house engine
//! - A coarse Delta-T (TT − UT) model
//! - The classical Greenwich sidereal-time polynomial

pub mod delta_t;
pub mod julian;
pub mod sidereal;

pub use delta_t::{delta_t_days, delta_t_seconds};
pub use julian::{
    CalendarDate, DAYS_PER_CENTURY, J1900_JD, J2000_JD, calendar_from_jd, calendar_to_jd,
    centuries_since_j2000, integer_julian_day, is_gregorian, julian_day,
};
pub use sidereal::{centuries_since_1900, greenwich_sidereal_hours, local_sidereal_degrees};
