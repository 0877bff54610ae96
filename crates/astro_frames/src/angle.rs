//! Degree arithmetic on the circle.
//!
//! All ephemeris angles are carried in degrees in [0, 360). Two wrap
//! routines exist because they sit on different hot paths: [`mod360`]
//! handles inputs that are usually already in range, [`smod360`] steps by
//! whole turns for values a few revolutions out.

use std::f64::consts::{FRAC_PI_2, PI};

/// Excursions beyond this many degrees skip the stepping loop.
const LOOP_LIMIT_DEG: f64 = 3600.0;

/// Exact Euclidean remainder, with a rounded-up 360.0 folded back to 0.
fn wrap_turn(x: f64) -> f64 {
    let r = x.rem_euclid(360.0);
    // 360 - ε can round to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Wrap to [0, 360): single add/subtract for slight excursions, exact
/// remainder otherwise.
pub fn mod360(x: f64) -> f64 {
    let mut d = x;
    if d >= 360.0 {
        d -= 360.0;
    } else if d < 0.0 {
        d += 360.0;
    }
    if (0.0..360.0).contains(&d) {
        return d;
    }
    wrap_turn(x)
}

/// Wrap to [0, 360) by stepping whole turns.
pub fn smod360(x: f64) -> f64 {
    if x.abs() > LOOP_LIMIT_DEG {
        return mod360(x);
    }
    let mut d = x;
    while d >= 360.0 {
        d -= 360.0;
    }
    while d < 0.0 {
        d += 360.0;
    }
    if d >= 360.0 { 0.0 } else { d }
}

/// Wrap radians to [0, 2π).
pub fn mod_tau(x: f64) -> f64 {
    let r = x.rem_euclid(2.0 * PI);
    if r >= 2.0 * PI { 0.0 } else { r }
}

/// Signed difference `a - b` wrapped into [-180, 180).
///
/// Antisymmetric except at exactly 180° apart, where both argument orders
/// give -180: the half-open range has no +180.
pub fn diff360(a: f64, b: f64) -> f64 {
    let d = mod360(a - b);
    if d >= 180.0 { d - 360.0 } else { d }
}

/// Unsigned angular distance between two longitudes, [0, 180].
pub fn min_dist(a: f64, b: f64) -> f64 {
    diff360(a, b).abs()
}

/// Sign of `x` as -1, 0 or 1.
pub fn signum0(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Direction angle of the vector (x, y) in radians, [0, 2π).
///
/// Built on `atan(y/x)` with explicit axis cases so that neither a zero
/// `x` nor a zero `y` reaches the division.
pub fn winkel(x: f64, y: f64) -> f64 {
    let mut a = if x != 0.0 {
        if y != 0.0 {
            (y / x).atan()
        } else if x < 0.0 {
            PI
        } else {
            0.0
        }
    } else if y < 0.0 {
        -FRAC_PI_2
    } else {
        FRAC_PI_2
    };
    if a < 0.0 {
        a += PI;
    }
    if y < 0.0 {
        a += PI;
    }
    a
}
