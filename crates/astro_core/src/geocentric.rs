//! Heliocentric to geocentric reduction.

use astro_frames::{smod360, test_near_zero};

/// Geocentric `(longitude, radius)` of a body from its heliocentric
/// longitude, radius and height and the Earth's heliocentric longitude
/// and radius.
///
/// The body is projected onto the ecliptic, the Earth's vector is
/// subtracted in rectangular form and the result converted back. A zero
/// `x` component is nudged to ±1e-10 before `atan2`, so a body exactly
/// in quadrature on the y axis still gets a defined longitude.
pub fn to_geocentric(
    earth_longitude: f64,
    earth_radius: f64,
    longitude: f64,
    radius: f64,
    height: f64,
) -> (f64, f64) {
    let r1 = (radius * radius - height * height).sqrt();
    let (sl, cl) = longitude.to_radians().sin_cos();
    let (se, ce) = earth_longitude.to_radians().sin_cos();
    let x = r1 * cl - earth_radius * ce;
    let y = r1 * sl - earth_radius * se;
    let geo_radius = (x * x + y * y + height * height).sqrt();
    let x = test_near_zero(x);
    (smod360(y.atan2(x).to_degrees()), geo_radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposition_and_conjunction() {
        // Body at 3 AU opposite the Sun: same longitude as the Earth.
        let (l, r) = to_geocentric(100.0, 1.0, 100.0, 3.0, 0.0);
        assert!((l - 100.0).abs() < 1e-9);
        assert!((r - 2.0).abs() < 1e-12);
        // Superior conjunction: body behind the Sun.
        let (l, r) = to_geocentric(100.0, 1.0, 280.0, 3.0, 0.0);
        assert!((l - 280.0).abs() < 1e-9);
        assert!((r - 4.0).abs() < 1e-12);
    }

    #[test]
    fn height_enters_distance() {
        let (_, r) = to_geocentric(0.0, 1.0, 0.0, 5.0_f64.sqrt(), 1.0);
        // projected radius 2, geocentric planar 1, height 1
        assert!((r - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn zero_x_is_guarded() {
        // Body straight "above" the Earth along y: x = 0 exactly.
        let (l, r) = to_geocentric(0.0, 1.0, 45.0, 2.0_f64.sqrt(), 0.0);
        assert!(l.is_finite());
        assert!((l - 90.0).abs() < 1e-6, "l = {l}");
        assert!((r - 1.0).abs() < 1e-9);
    }

    #[test]
    fn result_in_range() {
        for k in 0..72 {
            let (l, _) = to_geocentric(k as f64 * 5.0, 1.0, k as f64 * 13.0, 1.5, 0.1);
            assert!((0.0..360.0).contains(&l));
        }
    }
}
