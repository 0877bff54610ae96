//! Periodic disturbance series for the inner planets.
//!
//! Every term contributes `amp·cos(phase + i·M_aux + j·M_own)` to the
//! longitude (arcseconds) and to log₁₀ of the radius vector (units of
//! 1e-9). Tables end with a sentinel row whose `j` is [`ENDMARK`].
//!
//! Source: Meeus, "Astronomical Formulae for Calculators" (1979),
//! chapter 23; amplitudes re-expressed in arcseconds and log-radius.

use crate::elements::{AUX_COUNT, AUX_EARTH, AUX_JUPITER, AUX_VENUS};

/// `j` value marking the end of a term table.
pub const ENDMARK: i32 = 99;

/// One disturbance-series row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerturbationTerm {
    /// Index into the auxiliary anomaly table.
    pub aux: usize,
    /// Multiplier of the auxiliary anomaly.
    pub i: i32,
    /// Multiplier of the body's own mean anomaly.
    pub j: i32,
    /// Longitude amplitude, arcseconds.
    pub lamp: f64,
    /// Longitude phase, degrees.
    pub lphase: f64,
    /// log₁₀ r amplitude, units of 1e-9.
    pub ramp: f64,
    /// Radius phase, degrees.
    pub rphase: f64,
}

const fn term(
    aux: usize,
    i: i32,
    j: i32,
    lamp: f64,
    lphase: f64,
    ramp: f64,
    rphase: f64,
) -> PerturbationTerm {
    PerturbationTerm {
        aux,
        i,
        j,
        lamp,
        lphase,
        ramp,
        rphase,
    }
}

const END: PerturbationTerm = term(0, 0, ENDMARK, 0.0, 0.0, 0.0, 0.0);

#[rustfmt::skip]
pub static EARTH_TERMS: [PerturbationTerm; 5] = [
    //    aux        i   j    lamp    lphase    ramp    rphase
    term(AUX_VENUS,   1, -1,  4.824, 299.103, 2358.2, 209.103),
    term(AUX_VENUS,   2, -2,  5.544, 148.315, 6840.1,  58.315),
    term(AUX_JUPITER,-1,  1,  7.200, 179.542, 7066.0,  89.542),
    term(AUX_JUPITER,-2,  2,  0.000,   0.000, 4025.9, 357.105),
    END,
];

#[rustfmt::skip]
pub static MERCURY_TERMS: [PerturbationTerm; 7] = [
    term(AUX_VENUS,   5, -2,  7.344,  12.220,    0.0,   0.000),
    term(AUX_VENUS,   2, -1,  3.708, 199.308,    0.0,   0.000),
    term(AUX_JUPITER, 2, -1,  3.276, 322.997, 8442.5,  53.013),
    term(AUX_VENUS,   5, -3,  2.808,  10.137, 7631.3, 100.082),
    term(AUX_VENUS,   2, -2,  0.000,   0.000, 6122.3, 288.812),
    term(AUX_VENUS,   5, -1,  0.000,   0.000, 4004.1, 282.250),
    END,
];

#[rustfmt::skip]
pub static VENUS_TERMS: [PerturbationTerm; 9] = [
    term(AUX_EARTH,   2, -2, 11.268, 211.775, 13509.8, 301.792),
    term(AUX_EARTH,   3, -3,  7.128,   2.565, 11434.8,  92.577),
    term(AUX_EARTH,   1, -1,  4.896, 240.893,  3105.3, 330.890),
    term(AUX_EARTH,   3, -2,  3.456, 224.088,     0.0,   0.000),
    term(AUX_JUPITER, 1, -1,  2.952, 151.913,  4135.0, 241.910),
    term(AUX_EARTH,   5, -4,  0.000,   0.000,  2173.5, 255.792),
    term(AUX_EARTH,   4, -4,  0.000,   0.000,  1971.1,  63.513),
    term(AUX_JUPITER, 2, -2,  0.000,   0.000,  1845.7, 304.833),
    END,
];

#[rustfmt::skip]
pub static MARS_TERMS: [PerturbationTerm; 15] = [
    term(AUX_JUPITER, 1, -1, 25.380, 311.042, 15171.3,  41.131),
    term(AUX_JUPITER, 2, -1, 21.852, 171.650, 10910.4, 261.671),
    term(AUX_JUPITER, 2, -2, 16.020, 168.103, 14533.4, 258.015),
    term(AUX_EARTH,   1, -2, 13.968,  20.495,  1886.9, 113.202),
    term(AUX_EARTH,   1, -1,  8.568,  35.097,  4559.3, 304.445),
    term(AUX_EARTH,   2, -3,  7.344, 158.638,  4208.2,  68.622),
    term(AUX_VENUS,  -1,  3,  6.372, 302.398,     0.0,   0.000),
    term(AUX_EARTH,   2, -4,  4.896, 154.093,  1302.9, 137.551),
    term(AUX_JUPITER, 1,  0,  3.744,  17.618,     0.0,   0.000),
    term(AUX_JUPITER, 1, -2,  0.000,   0.000,  2555.6,  43.615),
    term(AUX_JUPITER, 3, -2,  0.000,   0.000,  2255.7, 220.263),
    term(AUX_JUPITER, 2, -3,  0.000,   0.000,  1996.4, 257.112),
    term(AUX_JUPITER, 3, -3,  0.000,   0.000,  1405.2, 283.757),
    term(AUX_EARTH,   3, -5,  0.000,   0.000,  1337.6, 190.603),
    END,
];

/// Apply a disturbance table to a heliocentric longitude and radius.
///
/// `lk` (arcseconds) and `rk` (log-radius, 1e-9) carry corrections the
/// caller has already accumulated; the table terms are added to them
/// before the result is folded into `longitude` and `radius`.
pub fn disturb(
    terms: &[PerturbationTerm],
    aux: &[f64; AUX_COUNT],
    own_anomaly_deg: f64,
    mut lk: f64,
    mut rk: f64,
    longitude: &mut f64,
    radius: &mut f64,
) {
    for t in terms.iter().take_while(|t| t.j != ENDMARK) {
        let arg = f64::from(t.i) * aux[t.aux] + f64::from(t.j) * own_anomaly_deg;
        lk += t.lamp * (t.lphase + arg).to_radians().cos();
        rk += t.ramp * (t.rphase + arg).to_radians().cos();
    }
    *radius *= 10f64.powf(rk * 1.0e-9);
    *longitude += lk / 3600.0;
}
