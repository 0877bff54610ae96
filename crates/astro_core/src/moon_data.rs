//! Periodic terms of the lunar series.
//!
//! Longitude and latitude amplitudes are in 1e-6 degree and multiply
//! `sin(arg)`; sine-parallax amplitudes are in arcseconds and multiply
//! `cos(arg)`, where `arg = d·D + m·M + mp·M′ + f·F`.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Tables 47.A and
//! 47.B (ELP-2000/82 truncation). Parallax amplitudes are derived from the
//! distance column to first order about the mean distance.

/// One periodic term of the lunar series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarCorrectionTerm {
    /// Multiplier of the mean elongation D.
    pub d: i8,
    /// Multiplier of the solar mean anomaly M.
    pub m: i8,
    /// Multiplier of the lunar mean anomaly M′.
    pub mp: i8,
    /// Multiplier of the argument of latitude F.
    pub f: i8,
    /// Longitude amplitude, 1e-6 degree.
    pub lng: i32,
    /// Latitude amplitude, 1e-6 degree.
    pub lat: i32,
    /// Sine-parallax amplitude, arcseconds.
    pub par: f64,
}

const fn t(d: i8, m: i8, mp: i8, f: i8, lng: i32, lat: i32, par: f64) -> LunarCorrectionTerm {
    LunarCorrectionTerm {
        d,
        m,
        mp,
        f,
        lng,
        lat,
        par,
    }
}

pub const LUNAR_TERM_COUNT: usize = 120;

#[rustfmt::skip]
pub static LUNAR_TERMS: [LunarCorrectionTerm; LUNAR_TERM_COUNT] = [
    // D   M  M'   F       lng       lat        par
    t( 0,  0,  1,  0,  6288774,        0,  185.5448),
    t( 2,  0, -1,  0,  1274027,        0,   32.8313),
    t( 2,  0,  0,  0,   658314,        0,   26.2356),
    t( 0,  0,  2,  0,   213618,        0,    5.0584),
    t( 0,  1,  0,  0,  -185116,        0,   -0.4339),
    t( 0,  0,  0,  2,  -114332,        0,    0.0279),
    t( 2,  0, -2,  0,    58793,        0,   -2.1848),
    t( 2, -1, -1,  0,    57066,        0,    1.3503),
    t( 2,  0,  1,  0,    53322,        0,    1.5153),
    t( 2, -1,  0,  0,    45758,        0,    1.8158),
    t( 0,  1, -1,  0,   -40923,        0,    1.1504),
    t( 1,  0,  0,  0,   -34720,        0,   -0.9651),
    t( 0,  1,  1,  0,   -30383,        0,   -0.9297),
    t( 2,  0,  0, -2,    15327,        0,   -0.0916),
    t( 0,  0,  1,  2,   -12528,        0,    0.0000),
    t( 0,  0,  1, -2,    10980,        0,   -0.7070),
    t( 4,  0, -1,  0,    10675,        0,    0.3087),
    t( 0,  0,  3,  0,    10034,        0,    0.2060),
    t( 4,  0, -2,  0,     8548,        0,    0.1920),
    t( 2,  1, -1,  0,    -7888,        0,   -0.2149),
    t( 2,  1,  0,  0,    -6766,        0,   -0.2736),
    t( 1,  0, -1,  0,    -5163,        0,    0.0744),
    t( 1,  1,  0,  0,     4987,        0,    0.1480),
    t( 2, -1,  1,  0,     4036,        0,    0.1139),
    t( 2,  0,  2,  0,     3994,        0,    0.0927),
    t( 4,  0,  0,  0,     3861,        0,    0.1034),
    t( 2,  0, -3,  0,     3665,        0,   -0.1278),
    t( 0,  1, -2,  0,    -2689,        0,    0.0622),
    t( 2,  0, -1,  2,    -2602,        0,    0.0000),
    t( 2, -1, -2,  0,     2390,        0,   -0.0893),
    t( 1,  0,  1,  0,    -2348,        0,   -0.0561),
    t( 2, -2,  0,  0,     2236,        0,    0.0877),
    t( 0,  1,  2,  0,    -2120,        0,   -0.0510),
    t( 0,  2,  0,  0,    -2069,        0,    0.0000),
    t( 2, -2, -1,  0,     2048,        0,    0.0439),
    t( 2,  0,  1, -2,    -1773,        0,   -0.0367),
    t( 2,  0,  0,  2,    -1595,        0,    0.0000),
    t( 4, -1, -1,  0,     1215,        0,    0.0351),
    t( 0,  0,  2,  2,    -1110,        0,    0.0000),
    t( 3,  0, -1,  0,     -892,        0,   -0.0289),
    t( 2,  1,  1,  0,     -810,        0,   -0.0232),
    t( 4, -1, -2,  0,      759,        0,    0.0168),
    t( 0,  2, -1,  0,     -713,        0,    0.0188),
    t( 2,  2, -1,  0,     -700,        0,   -0.0209),
    t( 2,  1, -2,  0,      691,        0,    0.0000),
    t( 2, -1,  0, -2,      596,        0,    0.0000),
    t( 4,  0,  1,  0,      549,        0,    0.0126),
    t( 0,  0,  4,  0,      537,        0,    0.0099),
    t( 4, -1,  0,  0,      520,        0,    0.0139),
    t( 1,  0, -2,  0,     -487,        0,    0.0154),
    t( 2,  1,  0, -2,     -399,        0,    0.0000),
    t( 0,  0,  2, -2,     -381,        0,    0.0392),
    t( 1,  1,  1,  0,      351,        0,    0.0000),
    t( 3,  0, -2,  0,     -340,        0,    0.0000),
    t( 4,  0, -3,  0,      330,        0,    0.0000),
    t( 2, -1,  2,  0,      327,        0,    0.0000),
    t( 0,  2,  1,  0,     -323,        0,   -0.0103),
    t( 1,  1, -1,  0,      299,        0,    0.0000),
    t( 2,  0,  3,  0,      294,        0,    0.0000),
    t( 2,  0, -1, -2,        0,        0,   -0.0777),
    t( 0,  0,  0,  1,        0,  5128122,    0.0000),
    t( 0,  0,  1,  1,        0,   280602,    0.0000),
    t( 0,  0,  1, -1,        0,   277693,    0.0000),
    t( 2,  0,  0, -1,        0,   173237,    0.0000),
    t( 2,  0, -1,  1,        0,    55413,    0.0000),
    t( 2,  0, -1, -1,        0,    46271,    0.0000),
    t( 2,  0,  0,  1,        0,    32573,    0.0000),
    t( 0,  0,  2,  1,        0,    17198,    0.0000),
    t( 2,  0,  1, -1,        0,     9266,    0.0000),
    t( 0,  0,  2, -1,        0,     8822,    0.0000),
    t( 2, -1,  0, -1,        0,     8216,    0.0000),
    t( 2,  0, -2, -1,        0,     4324,    0.0000),
    t( 2,  0,  1,  1,        0,     4200,    0.0000),
    t( 2,  1,  0, -1,        0,    -3359,    0.0000),
    t( 2, -1, -1,  1,        0,     2463,    0.0000),
    t( 2, -1,  0,  1,        0,     2211,    0.0000),
    t( 2, -1, -1, -1,        0,     2065,    0.0000),
    t( 0,  1, -1, -1,        0,    -1870,    0.0000),
    t( 4,  0, -1, -1,        0,     1828,    0.0000),
    t( 0,  1,  0,  1,        0,    -1794,    0.0000),
    t( 0,  0,  0,  3,        0,    -1749,    0.0000),
    t( 0,  1, -1,  1,        0,    -1565,    0.0000),
    t( 1,  0,  0,  1,        0,    -1491,    0.0000),
    t( 0,  1,  1,  1,        0,    -1475,    0.0000),
    t( 0,  1,  1, -1,        0,    -1410,    0.0000),
    t( 0,  1,  0, -1,        0,    -1344,    0.0000),
    t( 1,  0,  0, -1,        0,    -1335,    0.0000),
    t( 0,  0,  3,  1,        0,     1107,    0.0000),
    t( 4,  0,  0, -1,        0,     1021,    0.0000),
    t( 4,  0, -1,  1,        0,      833,    0.0000),
    t( 0,  0,  1, -3,        0,      777,    0.0000),
    t( 4,  0, -2,  1,        0,      671,    0.0000),
    t( 2,  0,  0, -3,        0,      607,    0.0000),
    t( 2,  0,  2, -1,        0,      596,    0.0000),
    t( 2, -1,  1, -1,        0,      491,    0.0000),
    t( 2,  0, -2,  1,        0,     -451,    0.0000),
    t( 0,  0,  3, -1,        0,      439,    0.0000),
    t( 2,  0,  2,  1,        0,      422,    0.0000),
    t( 2,  0, -3, -1,        0,      421,    0.0000),
    t( 2,  1, -1,  1,        0,     -366,    0.0000),
    t( 2,  1,  0,  1,        0,     -351,    0.0000),
    t( 4,  0,  0,  1,        0,      331,    0.0000),
    t( 2, -1,  1,  1,        0,      315,    0.0000),
    t( 2, -2,  0, -1,        0,      302,    0.0000),
    t( 0,  0,  1,  3,        0,     -283,    0.0000),
    t( 2,  1,  1, -1,        0,     -229,    0.0000),
    t( 1,  1,  0, -1,        0,      223,    0.0000),
    t( 1,  1,  0,  1,        0,      223,    0.0000),
    t( 0,  1, -2, -1,        0,     -220,    0.0000),
    t( 2,  1, -1, -1,        0,     -220,    0.0000),
    t( 1,  0,  1,  1,        0,     -185,    0.0000),
    t( 2, -1, -2, -1,        0,      181,    0.0000),
    t( 0,  1,  2,  1,        0,     -177,    0.0000),
    t( 4,  0, -2, -1,        0,      176,    0.0000),
    t( 4, -1, -1, -1,        0,      166,    0.0000),
    t( 1,  0,  1, -1,        0,     -164,    0.0000),
    t( 4,  0,  1, -1,        0,      132,    0.0000),
    t( 1,  0, -1, -1,        0,     -119,    0.0000),
    t( 4, -1,  0, -1,        0,      115,    0.0000),
    t( 2, -2,  0,  1,        0,      107,    0.0000),
];
