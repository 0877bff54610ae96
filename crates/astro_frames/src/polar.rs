//! Polar ↔ rectangular transforms with zero-angle guards.
//!
//! Exact zeros are replaced by tiny constants before they reach a
//! trigonometric division, so the house engine never sees an undefined
//! angle at the equator or at the equinox points.

use crate::angle::winkel;

/// Substitute for an exactly-zero angle or ordinate, radians.
pub const KLEIN: f64 = 1.7453e-9;

/// Magnitude below which a denominator is treated as zero.
pub const NEAR_ZERO: f64 = 1e-10;

/// Replace a near-zero value by ±[`NEAR_ZERO`], keeping its sign.
pub fn test_near_zero(x: f64) -> f64 {
    if x.abs() >= NEAR_ZERO {
        x
    } else if x < 0.0 {
        -NEAR_ZERO
    } else {
        NEAR_ZERO
    }
}

/// Polar (angle in radians, radius) to rectangular `(x, y)`.
pub fn pol_to_rec(angle: f64, radius: f64) -> (f64, f64) {
    let a = if angle == 0.0 { KLEIN } else { angle };
    (radius * a.cos(), radius * a.sin())
}

/// Rectangular to polar `(angle, radius)`, angle in [0, 2π).
pub fn rec_to_pol(x: f64, y: f64) -> (f64, f64) {
    let y = if y == 0.0 { KLEIN } else { y };
    (winkel(x, y), (x * x + y * y).sqrt())
}

/// Rotate a point given by latitude `b` and longitude `l` about the x axis
/// by `o` and return its new longitude, radians in [0, 2π).
///
/// The vertex computation uses this with the co-latitude, the RAMC + 180°
/// and the negated obliquity.
pub fn rec_to_sph(b: f64, l: f64, o: f64) -> f64 {
    let (x, q) = pol_to_rec(b, 1.0);
    let (g, y) = pol_to_rec(l, x);
    let (a, r) = rec_to_pol(y, q);
    let (x, _) = pol_to_rec(a + o, r);
    let (a, _) = rec_to_pol(g, x);
    if a < 0.0 { a + std::f64::consts::TAU } else { a }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn near_zero_keeps_sign() {
        assert_eq!(test_near_zero(0.0), NEAR_ZERO);
        assert_eq!(test_near_zero(-1e-12), -NEAR_ZERO);
        assert_eq!(test_near_zero(0.5), 0.5);
    }

    #[test]
    fn polar_round_trip() {
        for i in 1..36 {
            let a = i as f64 * 10.0_f64.to_radians();
            let (x, y) = pol_to_rec(a, 2.5);
            let (a2, r2) = rec_to_pol(x, y);
            assert!((a2 - a).abs() < 1e-9, "a = {a}, a2 = {a2}");
            assert!((r2 - 2.5).abs() < 1e-12);
        }
    }

    #[test]
    fn zero_angle_is_guarded() {
        let (x, y) = pol_to_rec(0.0, 1.0);
        assert!((x - 1.0).abs() < 1e-12);
        assert!(y > 0.0 && y < 1e-8);
        let (a, r) = rec_to_pol(-1.0, 0.0);
        assert!((a - PI).abs() < 1e-8);
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rotation_by_zero_keeps_longitude() {
        let l = 1.0;
        let out = rec_to_sph(0.3, l, 0.0);
        assert!((out - l).abs() < 1e-9, "out = {out}");
    }

    #[test]
    fn equator_point_at_quarter_turn_is_fixed() {
        // A point on the rotation axis' orthogonal great circle at 90°
        // moves in latitude only, so its longitude stays 90°.
        let out = rec_to_sph(0.0, FRAC_PI_2, -0.4);
        assert!((out - FRAC_PI_2).abs() < 1e-6, "out = {out}");
    }
}
