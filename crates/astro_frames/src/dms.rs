//! Degree–minute–second conversions.
//!
//! Two encodings are in use: a [`Dms`] triple for display, and the packed
//! "degrees.minutes" decimal used by coordinate input fields, where
//! 10.30 means 10°30′.

use crate::angle::signum0;

/// Unsigned degrees, minutes, seconds with a separate sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub negative: bool,
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: f64,
}

pub fn deg_to_dms(deg: f64) -> Dms {
    let arcsec = deg.abs() * 3600.0;
    let whole_minutes = (arcsec / 60.0).floor();
    Dms {
        negative: deg < 0.0,
        degrees: (whole_minutes / 60.0).floor() as u16,
        minutes: (whole_minutes % 60.0) as u8,
        seconds: arcsec - whole_minutes * 60.0,
    }
}

/// Signed decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    let mag = f64::from(dms.degrees) + f64::from(dms.minutes) / 60.0 + dms.seconds / 3600.0;
    if dms.negative { -mag } else { mag }
}

/// Zodiac sign index (0 = Aries) and the position within the sign,
/// rounded to whole arc-seconds with carries.
pub fn sign_dms(longitude_deg: f64) -> (u8, u16, u8, u8) {
    let total_seconds = (longitude_deg.rem_euclid(360.0) * 3600.0 + 0.5).floor() as u32 % 1_296_000;
    let sign = (total_seconds / 108_000) as u8;
    let within = total_seconds % 108_000;
    let degrees = (within / 3600) as u16;
    let minutes = ((within % 3600) / 60) as u8;
    let seconds = (within % 60) as u8;
    (sign, degrees, minutes, seconds)
}

/// Packed "degrees.minutes" to decimal degrees: 10.30 → 10.5.
pub fn packed_to_deg(packed: f64) -> f64 {
    let a = packed.abs();
    signum0(packed) * (a.floor() + (a - a.floor()) * 100.0 / 60.0)
}

/// Decimal degrees to packed "degrees.minutes": 10.5 → 10.30.
pub fn deg_to_packed(deg: f64) -> f64 {
    let a = deg.abs();
    signum0(deg) * (a.floor() + (a - a.floor()) * 60.0 / 100.0)
}
