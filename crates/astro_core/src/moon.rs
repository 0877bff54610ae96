//! Geocentric Moon from a trigonometric lunar theory.
//!
//! The fundamental arguments come from the element engine (mean
//! longitude, anomaly and node of the Moon, and the Earth's elements);
//! the periodic terms in [`crate::moon_data`] are summed on top of them
//! together with the Venus, Jupiter and flattening terms. Distance comes
//! from the sine parallax.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), chapter 47.

use astro_frames::smod360;

use crate::elements::ElementSet;
use crate::moon_data::LUNAR_TERMS;

/// Constant term of the sine parallax, arcseconds.
pub const MEAN_SINE_PARALLAX: f64 = 3422.451;

/// Solar parallax, arcseconds; the Earth radius in AU seen as an angle.
pub const SOLAR_PARALLAX: f64 = 8.794;

/// Geocentric lunar position, mean equinox of date, no nutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonState {
    /// Ecliptic longitude, degrees in [0, 360).
    pub longitude: f64,
    /// Ecliptic latitude, degrees.
    pub latitude: f64,
    /// Distance, AU.
    pub distance_au: f64,
    /// Height above the ecliptic, AU.
    pub height: f64,
}

/// Lunar position for the day the element set was last updated to.
pub fn lunar_position(elements: &ElementSet) -> MoonState {
    let moon = elements.moon();
    let earth = elements.earth();
    let t = moon.tj;

    let l_mean = moon.lg;
    let m_moon = moon.ma;
    let m_sun = earth.ma;
    let f = moon.lg - moon.kn;
    let d = moon.lg - earth.lg - 180.0;

    let a1 = 119.75 + 131.849 * t;
    let a2 = 53.09 + 479_264.290 * t;
    let a3 = 313.45 + 481_266.484 * t;
    // Earth orbit eccentricity factor, applied once per unit of |m|.
    let ecc = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let mut sum_l = 0.0;
    let mut sum_b = 0.0;
    let mut sum_p = 0.0;
    for term in &LUNAR_TERMS {
        let arg = (f64::from(term.d) * d
            + f64::from(term.m) * m_sun
            + f64::from(term.mp) * m_moon
            + f64::from(term.f) * f)
            .to_radians();
        let scale = ecc.powi(i32::from(term.m.unsigned_abs()));
        let (s, c) = arg.sin_cos();
        sum_l += f64::from(term.lng) * scale * s;
        sum_b += f64::from(term.lat) * scale * s;
        sum_p += term.par * scale * c;
    }

    let sin_deg = |x: f64| x.to_radians().sin();
    sum_l += 3958.0 * sin_deg(a1) + 1962.0 * sin_deg(l_mean - f) + 318.0 * sin_deg(a2);
    sum_b += -2235.0 * sin_deg(l_mean)
        + 382.0 * sin_deg(a3)
        + 175.0 * sin_deg(a1 - f)
        + 175.0 * sin_deg(a1 + f)
        + 127.0 * sin_deg(l_mean - m_moon)
        - 115.0 * sin_deg(l_mean + m_moon);

    let longitude = smod360(l_mean + sum_l * 1e-6);
    let latitude = sum_b * 1e-6;
    let distance_au = SOLAR_PARALLAX / (MEAN_SINE_PARALLAX + sum_p);
    MoonState {
        longitude,
        latitude,
        distance_au,
        height: distance_au * latitude.to_radians().sin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AU_KM: f64 = 149_597_870.7;

    #[test]
    fn meeus_example_47a() {
        // 1992-Apr-12 0h TD
        let mut set = ElementSet::new();
        set.update(2_448_724.5);
        let m = lunar_position(&set);
        assert!((m.longitude - 133.162_655).abs() < 1e-4, "λ = {}", m.longitude);
        assert!((m.latitude + 3.229_126).abs() < 1e-4, "β = {}", m.latitude);
        let km = m.distance_au * AU_KM;
        assert!((km - 368_409.7).abs() < 500.0, "Δ = {km} km");
    }

    #[test]
    fn distance_and_latitude_bounds() {
        let mut set = ElementSet::new();
        for k in 0..200 {
            set.update(2_451_545.0 + k as f64 * 1.37);
            let m = lunar_position(&set);
            let km = m.distance_au * AU_KM;
            assert!((355_000.0..407_500.0).contains(&km), "Δ = {km}");
            assert!(m.latitude.abs() < 5.35, "β = {}", m.latitude);
            assert!((m.height - m.distance_au * m.latitude.to_radians().sin()).abs() < 1e-15);
        }
    }
}
