//! Short-period nutation from the principal IAU 1980 terms.
//!
//! Only the 13 largest terms are kept (|amplitude| ≥ 0.012″), which holds
//! Δψ to about 0.5″, more than enough for chart work. The arguments are
//! not computed here: the orbital-element engine already carries the
//! lunar node, elongation and anomalies, and passes them in.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Table 22.A.

/// Delaunay-style arguments in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutationArguments {
    /// Mean elongation of the Moon from the Sun (D).
    pub elongation: f64,
    /// Mean anomaly of the Sun (M).
    pub sun_anomaly: f64,
    /// Mean anomaly of the Moon (M′).
    pub moon_anomaly: f64,
    /// Moon's argument of latitude (F).
    pub latitude_arg: f64,
    /// Longitude of the Moon's mean ascending node (Ω).
    pub node: f64,
}

/// Each row: `[nD, nM, nM', nF, nΩ, S, S', C, C']`.
///
/// Δψ += (S + S'·T)·sin(arg), Δε += (C + C'·T)·cos(arg), in units of
/// 0.00001″ (T in Julian centuries from J2000).
#[rustfmt::skip]
static NUTATION_TERMS: [[i64; 9]; 13] = [
    //  D   M   M'  F   Ω         S      S'        C     C'
    [   0,  0,  0,  0,  1, -1719960, -1742,  920250,   89],
    [  -2,  0,  0,  2,  2,  -131870,   -16,   57360,  -31],
    [   0,  0,  0,  2,  2,   -22740,    -2,    9770,   -5],
    [   0,  0,  0,  0,  2,    20620,     2,   -8950,    5],
    [   0,  1,  0,  0,  0,    14260,   -34,     540,   -1],
    [   0,  0,  1,  0,  0,     7120,     1,     -70,    0],
    [  -2,  1,  0,  2,  2,    -5170,    12,    2240,   -6],
    [   0,  0,  0,  2,  1,    -3860,    -4,    2000,    0],
    [   0,  0,  1,  2,  2,    -3010,     0,    1290,   -1],
    [  -2, -1,  0,  2,  2,     2170,    -5,    -950,    3],
    [  -2,  0,  1,  0,  0,    -1580,     0,       0,    0],
    [  -2,  0,  0,  2,  1,     1290,     1,    -700,    0],
    [   0,  0, -1,  2,  2,     1230,     0,    -530,    0],
];

/// Nutation in longitude and obliquity, `(Δψ, Δε)` in arcseconds.
pub fn nutation(args: &NutationArguments, t: f64) -> (f64, f64) {
    let base = [
        args.elongation.to_radians(),
        args.sun_anomaly.to_radians(),
        args.moon_anomaly.to_radians(),
        args.latitude_arg.to_radians(),
        args.node.to_radians(),
    ];

    let mut dpsi = 0.0;
    let mut deps = 0.0;
    for row in &NUTATION_TERMS {
        let arg: f64 = (0..5).map(|k| row[k] as f64 * base[k]).sum();
        dpsi += (row[5] as f64 + row[6] as f64 * t) * arg.sin();
        deps += (row[7] as f64 + row[8] as f64 * t) * arg.cos();
    }
    (dpsi * 1e-5, deps * 1e-5)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meeus_22a() -> (NutationArguments, f64) {
        // 1987-Apr-10 0h TD
        (
            NutationArguments {
                elongation: 136.9623,
                sun_anomaly: 94.9792,
                moon_anomaly: 229.2784,
                latitude_arg: 143.4079,
                node: 11.2531,
            },
            -0.127_296_372_348,
        )
    }

    #[test]
    fn meeus_example_22a() {
        let (args, t) = meeus_22a();
        let (dpsi, deps) = nutation(&args, t);
        assert!((dpsi + 3.788).abs() < 0.5, "Δψ = {dpsi}″");
        assert!((deps - 9.443).abs() < 0.5, "Δε = {deps}″");
    }

    #[test]
    fn amplitude_bounds() {
        for i in 0..36 {
            let node = i as f64 * 10.0;
            let args = NutationArguments {
                elongation: node * 3.1,
                sun_anomaly: node * 1.7,
                moon_anomaly: node * 2.3,
                latitude_arg: node * 0.7,
                node,
            };
            let (dpsi, deps) = nutation(&args, 0.2);
            assert!(dpsi.abs() < 20.0, "|Δψ| = {dpsi}");
            assert!(deps.abs() < 11.0, "|Δε| = {deps}");
        }
    }
}
