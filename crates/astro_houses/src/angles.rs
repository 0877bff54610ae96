//! Time variables and the chart angles: MC, Ascendant, Vertex, East Point.
//!
//! The house engine carries its own low-precision sidereal time and
//! obliquity (Newcomb, centuries since 1900) so that cusps do not depend
//! on the ephemeris session.

use std::f64::consts::{FRAC_PI_2, PI};

use astro_frames::{mod360, rec_to_sph, winkel};
use astro_time::{centuries_since_1900, greenwich_sidereal_hours, integer_julian_day};
use tracing::debug;

use crate::types::{HouseInput, TimeVariables};

/// Axial tilt bounding the polar circles, degrees.
pub const AXIAL_TILT_DEG: f64 = 23.445_788_89;

/// Latitudes beyond this many degrees are inside a polar circle.
pub const POLAR_LIMIT_DEG: f64 = 90.0 - AXIAL_TILT_DEG;

/// Whether a latitude lies inside a polar circle.
pub fn is_polar(latitude_deg: f64) -> bool {
    latitude_deg.abs() > POLAR_LIMIT_DEG
}

/// Obliquity of the ecliptic for the house engine, degrees.
pub fn house_obliquity_deg(t_1900: f64) -> f64 {
    23.452_294 - 0.013_012_5 * t_1900
}

/// Offset from tropical to sidereal longitudes, degrees (negative).
///
/// Precession from the 1900 reference with the principal nutation terms
/// of the node and the mean Sun.
pub fn sidereal_offset_deg(t_1900: f64) -> f64 {
    let node = mod360((933_060.0 - 6_962_911.0 * t_1900 + 7.5 * t_1900 * t_1900) / 3600.0);
    let mean_sun = (259_205_536.0 * t_1900 + 2_013_816.0) / 3600.0;
    let arcsec = 17.23 * node.to_radians().sin() + 1.27 * mean_sun.to_radians().sin()
        - (5025.64 + 1.11 * t_1900) * t_1900;
    (arcsec - 84_038.27) / 3600.0
}

/// Ecliptic longitude of the upper meridian, degrees.
pub fn midheaven(ramc: f64, obliquity: f64) -> f64 {
    let mut mc = (ramc.tan() / obliquity.cos()).atan();
    if mc < 0.0 {
        mc += PI;
    }
    if ramc > PI {
        mc += PI;
    }
    mod360(mc.to_degrees())
}

/// Ecliptic longitude of the eastern horizon, degrees.
pub fn ascendant(ramc: f64, obliquity: f64, latitude: f64) -> f64 {
    let x = -ramc.sin() * obliquity.cos() - latitude.tan() * obliquity.sin();
    mod360(winkel(x, ramc.cos()).to_degrees())
}

/// Ascendant for an observer on the equator, degrees.
pub fn east_point(ramc: f64, obliquity: f64) -> f64 {
    mod360(winkel(-ramc.sin() * obliquity.cos(), ramc.cos()).to_degrees())
}

/// Western intersection of the prime vertical with the ecliptic, degrees.
pub fn vertex(ramc: f64, obliquity: f64, latitude: f64) -> f64 {
    let mut colatitude = FRAC_PI_2 - latitude.abs();
    if latitude < 0.0 {
        colatitude = -colatitude;
    }
    let g = rec_to_sph(colatitude, ramc + PI, -obliquity);
    mod360((g + FRAC_PI_2).to_degrees())
}

/// Evaluate sidereal time, obliquity and the four angles for a chart.
///
/// This must run before any cusp algorithm; the cusp functions only
/// accept the [`TimeVariables`] it returns.
pub fn compute_time_variables(input: &HouseInput) -> TimeVariables {
    let jd = integer_julian_day(input.day, input.month, input.year) as f64;
    let t = centuries_since_1900(jd, input.hour);
    let obliquity = house_obliquity_deg(t).to_radians();
    let sidereal_time = greenwich_sidereal_hours(t, input.hour);
    let ramc = mod360(sidereal_time * 15.0 + input.longitude).to_radians();
    let latitude = input.latitude.to_radians();

    let vars = TimeVariables {
        jd,
        t,
        sidereal_time,
        ramc,
        obliquity,
        latitude,
        mc: midheaven(ramc, obliquity),
        asc: ascendant(ramc, obliquity, latitude),
        vertex: vertex(ramc, obliquity, latitude),
        east_point: east_point(ramc, obliquity),
        zodiac_offset: if input.sidereal {
            sidereal_offset_deg(t)
        } else {
            0.0
        },
    };
    debug!(
        jd,
        ramc_deg = ramc.to_degrees(),
        mc = vars.mc,
        asc = vars.asc,
        "time variables"
    );
    vars
}
