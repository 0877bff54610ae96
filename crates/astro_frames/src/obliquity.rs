//! Obliquity of the ecliptic.
//!
//! Source: IAU 1976 (Lieske), Meeus eq. 22.2.

/// Mean obliquity in arcseconds, `t` in Julian centuries from J2000.
pub fn mean_obliquity_arcsec(t: f64) -> f64 {
    84_381.448 - 46.8150 * t - 0.00059 * t * t + 0.001_813 * t * t * t
}

/// Mean obliquity in degrees.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    mean_obliquity_arcsec(t) / 3600.0
}

/// True obliquity in degrees from the mean value and Δε in arcseconds.
pub fn true_obliquity_deg(t: f64, delta_epsilon_arcsec: f64) -> f64 {
    (mean_obliquity_arcsec(t) + delta_epsilon_arcsec) / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_value() {
        assert!((mean_obliquity_deg(0.0) - 23.439_291).abs() < 1e-6);
    }

    #[test]
    fn meeus_example_22a() {
        // 1987-Apr-10: ε0 = 23°26′27.407″
        let eps0 = mean_obliquity_arcsec(-0.127_296_372_348);
        assert!((eps0 - (23.0 * 3600.0 + 26.0 * 60.0 + 27.407)).abs() < 0.01, "ε0 = {eps0}″");
    }

    #[test]
    fn true_adds_nutation() {
        let t = 0.1;
        assert!((true_obliquity_deg(t, 9.0) - mean_obliquity_deg(t) - 9.0 / 3600.0).abs() < 1e-12);
    }
}
