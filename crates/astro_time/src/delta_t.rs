//! Delta-T (TT − UT) approximation.
//!
//! Between 1900 and 2150 the Espenak–Meeus piecewise polynomials are
//! used; elsewhere the Morrison–Stephenson long-term parabola. This is
//! good to a few seconds in the modern era and to centuries-scale
//! accuracy otherwise, and carries no leap-second information.

use crate::julian::J1900_JD;

const DAYS_PER_YEAR: f64 = 365.25;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// One polynomial span: valid for `start <= year < end`, evaluated in
/// `year - origin`.
struct Segment {
    start: f64,
    end: f64,
    origin: f64,
    coeffs: &'static [f64],
}

#[rustfmt::skip]
static SEGMENTS: [Segment; 6] = [
    Segment { start: 1900.0, end: 1920.0, origin: 1900.0,
              coeffs: &[-2.79, 1.494_119, -0.059_893_9, 0.006_196_6, -0.000_197] },
    Segment { start: 1920.0, end: 1941.0, origin: 1920.0,
              coeffs: &[21.20, 0.844_93, -0.076_100, 0.002_093_6] },
    Segment { start: 1941.0, end: 1961.0, origin: 1950.0,
              coeffs: &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0] },
    Segment { start: 1961.0, end: 1986.0, origin: 1975.0,
              coeffs: &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0] },
    Segment { start: 1986.0, end: 2005.0, origin: 2000.0,
              coeffs: &[63.86, 0.3345, -0.060_374, 0.001_727_5, 0.000_651_814, 0.000_023_735_99] },
    Segment { start: 2005.0, end: 2050.0, origin: 2000.0,
              coeffs: &[62.92, 0.322_17, 0.005_589] },
];

/// Decimal year of a Julian Day.
fn decimal_year(jd: f64) -> f64 {
    1900.0 + (jd - J1900_JD) / DAYS_PER_YEAR
}

fn long_term_parabola(year: f64) -> f64 {
    let u = (year - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// Delta-T in seconds for a Julian Day (UT).
pub fn delta_t_seconds(jd: f64) -> f64 {
    let year = decimal_year(jd);
    if let Some(seg) = SEGMENTS.iter().find(|s| year >= s.start && year < s.end) {
        let t = year - seg.origin;
        return seg.coeffs.iter().rev().fold(0.0, |acc, c| acc * t + c);
    }
    if (2050.0..2150.0).contains(&year) {
        // Blends the parabola into the 2005–2050 fit.
        return long_term_parabola(year) - 0.5628 * (2150.0 - year);
    }
    long_term_parabola(year)
}

/// Delta-T in days, ready to add to a UT Julian Day.
pub fn delta_t_days(jd: f64) -> f64 {
    delta_t_seconds(jd) / SECONDS_PER_DAY
}
