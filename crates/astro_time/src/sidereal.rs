//! Classical Greenwich sidereal time.
//!
//! Uses the Newcomb-era polynomial in centuries since 1900 Jan 0.5 that the
//! house engine is built around:
//!
//! GST = 6ʰ.6460656 + 2400ʰ.0513·T + 0ʰ.0000258·T² + UT
//!
//! Source: Explanatory Supplement to the Astronomical Ephemeris (1961).

use crate::julian::{DAYS_PER_CENTURY, J1900_JD};

/// Julian centuries since 1900 Jan 0.5 for a day index and UT hour.
///
/// `jd_day` is the whole-day index from [`crate::integer_julian_day`]; the
/// extra half day moves it to the preceding midnight.
pub fn centuries_since_1900(jd_day: f64, hour: f64) -> f64 {
    (jd_day + hour / 24.0 - J1900_JD - 0.5) / DAYS_PER_CENTURY
}

/// Greenwich sidereal time in hours, [0, 24).
pub fn greenwich_sidereal_hours(t_1900: f64, hour: f64) -> f64 {
    let gst = 6.646_065_6 + 2400.051_3 * t_1900 + 2.58e-5 * t_1900 * t_1900 + hour;
    gst.rem_euclid(24.0)
}

/// Local sidereal time in degrees, [0, 360), for an east-positive longitude.
pub fn local_sidereal_degrees(t_1900: f64, hour: f64, longitude_east_deg: f64) -> f64 {
    (greenwich_sidereal_hours(t_1900, hour) * 15.0 + longitude_east_deg).rem_euclid(360.0)
}
