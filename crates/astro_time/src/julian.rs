//! Julian Day conversions for the proleptic Julian/Gregorian civil calendar.
//!
//! The forward formula counts whole 365.25-day years from −4712 and
//! 30.6-day months starting in March, then applies the Gregorian
//! century correction when requested. The inverse follows Meeus,
//! "Astronomical Algorithms" (2nd ed), Chapter 7.

/// Julian Day of the J2000.0 epoch (2000-Jan-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Day of 1900-Jan-00.5, the epoch of the classical sidereal-time
/// and obliquity polynomials.
pub const J1900_JD: f64 = 2_415_020.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// First Julian Day of the Gregorian calendar (1582-Oct-15 00:00).
const GREGORIAN_START_JD: f64 = 2_299_161.0;

/// A civil calendar date with a fractional hour of day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    /// Decimal hour in [0, 24).
    pub hour: f64,
}

/// Julian Day for a calendar date and decimal hour.
///
/// `use_gregorian` selects the Gregorian correction term. Callers decide it
/// with [`is_gregorian`]; nothing here validates the date, so month or day
/// zero produce finite but meaningless values.
pub fn julian_day(day: i32, month: i32, year: i32, decimal_hour: f64, use_gregorian: bool) -> f64 {
    let mut y = year as f64;
    if month < 3 {
        y -= 1.0;
    }
    let years = y + 4712.0;
    let mut months = month as f64 + 1.0;
    if months < 4.0 {
        months += 12.0;
    }

    let mut jd = (years * 365.25).floor() + (30.6 * months + 0.000_001).floor() + day as f64
        + decimal_hour / 24.0
        - 63.5;

    if use_gregorian {
        let mut correction = (y.abs() / 100.0).floor() - (y.abs() / 400.0).floor();
        if y < 0.0 {
            correction = -correction;
        }
        jd = jd - correction + 2.0;
        // Negative century years that are not multiples of 400 are common years.
        if y < 0.0 && (y / 100.0).fract() == 0.0 && (y / 400.0).fract() != 0.0 {
            jd -= 1.0;
        }
    }
    jd
}

/// Whether a date falls on or after the Gregorian reform (1582-Oct-15).
pub const fn is_gregorian(day: i32, month: i32, year: i32) -> bool {
    if year != 1582 {
        return year > 1582;
    }
    month > 10 || (month == 10 && day >= 15)
}

/// Whole-day index of a date: the Julian Day at noon, rounded.
pub fn integer_julian_day(day: i32, month: i32, year: i32) -> i64 {
    let jd = julian_day(day, month, year, 12.0, is_gregorian(day, month, year));
    (jd + 0.5).floor() as i64
}

/// Julian Day of a calendar date, picking the calendar from the date itself.
pub fn calendar_to_jd(date: &CalendarDate) -> f64 {
    julian_day(
        date.day,
        date.month,
        date.year,
        date.hour,
        is_gregorian(date.day, date.month, date.year),
    )
}

/// Calendar date for a Julian Day (Julian calendar before 1582-Oct-15).
pub fn calendar_from_jd(jd: f64) -> CalendarDate {
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let f = shifted - z;

    let a = if z < GREGORIAN_START_JD {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    let day = day_frac.floor();
    CalendarDate {
        year: year as i32,
        month: month as i32,
        day: day as i32,
        hour: (day_frac - day) * 24.0,
    }
}

/// Julian centuries elapsed since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
