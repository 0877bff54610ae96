//! Golden-value tests for the analytic ephemeris at J2000.0.
//!
//! Reference longitudes are apparent geocentric of date. The inner
//! bodies follow the perturbed element theory closely; the outer planets
//! use mean elements and are only good to a few tenths of a degree.

use astro_core::{Body, CalcFlags, MAX_BODIES, Session};
use astro_frames::diff360;

const J2000: f64 = 2_451_545.0;

fn apparent(session: &mut Session, body: Body, jd: f64) -> astro_core::Position {
    session
        .calc(body, jd, CalcFlags::default())
        .unwrap_or_else(|e| panic!("{body:?}: {e}"))
}

fn assert_longitude(body: Body, got: f64, expected: f64, tol: f64) {
    let err = diff360(got, expected).abs();
    assert!(err < tol, "{body:?}: got {got:.4}°, expected {expected:.4}° (|Δ| = {err:.4})");
}

#[test]
fn inner_bodies_at_j2000() {
    let mut s = Session::new();
    for (body, lon, lat, dist) in [
        (Body::Sun, 280.3681, 0.0, 0.983_323),
        (Body::Mercury, 271.8877, -0.9957, 1.415_521),
        (Body::Venus, 241.5650, 2.0660, 1.137_686),
        (Body::Mars, 327.9641, -1.0676, 1.849_536),
    ] {
        let p = apparent(&mut s, body, J2000);
        assert_longitude(body, p.longitude, lon, 0.01);
        assert!((p.latitude - lat).abs() < 0.01, "{body:?} latitude {}", p.latitude);
        assert!((p.distance - dist).abs() < 1e-3, "{body:?} distance {}", p.distance);
    }
}

#[test]
fn outer_bodies_at_j2000() {
    let mut s = Session::new();
    for (body, lon, dist) in [
        (Body::Jupiter, 25.399, 4.620),
        (Body::Saturn, 40.048, 8.642),
        (Body::Uranus, 314.855, 20.703),
        (Body::Neptune, 303.173, 31.030),
        (Body::Pluto, 251.486, 31.075),
        (Body::Chiron, 251.549, 10.659),
    ] {
        let p = apparent(&mut s, body, J2000);
        assert_longitude(body, p.longitude, lon, 0.5);
        assert!((p.distance - dist).abs() < 0.1, "{body:?} distance {}", p.distance);
    }
}

#[test]
fn moon_at_j2000() {
    let mut s = Session::new();
    let flags = CalcFlags {
        speed: true,
        ..CalcFlags::default()
    };
    let moon = s.calc(Body::Moon, J2000, flags).unwrap();
    assert_longitude(Body::Moon, moon.longitude, 223.3149, 0.01);
    assert!((moon.latitude - 5.1713).abs() < 0.01, "latitude {}", moon.latitude);
    assert!((moon.distance - 0.002_691).abs() < 2e-5, "distance {}", moon.distance);
    assert!((moon.speed_longitude - 12.018).abs() < 0.1, "speed {}", moon.speed_longitude);
}

#[test]
fn lunar_points_at_j2000() {
    let mut s = Session::new();
    let mean = apparent(&mut s, Body::MeanNode, J2000);
    assert_longitude(Body::MeanNode, mean.longitude, 125.0407, 1e-3);
    assert!(mean.is_retrograde());

    let true_node = apparent(&mut s, Body::TrueNode, J2000);
    assert_longitude(Body::TrueNode, true_node.longitude, 123.9495, 0.01);

    let lilith = apparent(&mut s, Body::Lilith, J2000);
    assert_longitude(Body::Lilith, lilith.longitude, 263.4641, 0.01);
    assert!((lilith.latitude - 3.4197).abs() < 0.01);
}

#[test]
fn saturn_retrograde_at_j2000() {
    let mut s = Session::new();
    let saturn = apparent(&mut s, Body::Saturn, J2000);
    assert!(saturn.is_retrograde(), "speed {}", saturn.speed_longitude);
    let jupiter = apparent(&mut s, Body::Jupiter, J2000);
    assert!(!jupiter.is_retrograde(), "speed {}", jupiter.speed_longitude);
}

#[test]
fn every_body_is_well_formed_over_a_century() {
    let mut s = Session::new();
    for year in 0..100 {
        let jd = J2000 - 36_525.0 / 2.0 + year as f64 * 365.25 + 17.3;
        for index in 0..MAX_BODIES {
            let body = Body::from_index(index).unwrap();
            let p = apparent(&mut s, body, jd);
            assert!((0.0..360.0).contains(&p.longitude), "{body:?} lon {}", p.longitude);
            assert!((-90.0..=90.0).contains(&p.latitude), "{body:?} lat {}", p.latitude);
            assert!(p.distance > 0.0, "{body:?} distance {}", p.distance);
            assert_eq!(p.is_retrograde(), p.speed_longitude < 0.0);
        }
    }
}

#[test]
fn sun_and_inner_planets_never_far_from_sun() {
    let mut s = Session::new();
    for k in 0..200 {
        let jd = J2000 + k as f64 * 11.0;
        let sun = apparent(&mut s, Body::Sun, jd);
        assert!(!sun.is_retrograde());
        let mercury = apparent(&mut s, Body::Mercury, jd);
        let venus = apparent(&mut s, Body::Venus, jd);
        assert!(diff360(mercury.longitude, sun.longitude).abs() < 28.5);
        assert!(diff360(venus.longitude, sun.longitude).abs() < 47.5);
    }
}

#[test]
fn heliocentric_earth_and_flags() {
    let mut s = Session::new();
    let helio = CalcFlags {
        heliocentric: true,
        true_position: true,
        no_nutation: true,
        ..CalcFlags::default()
    };
    let earth = s.calc(Body::Sun, J2000, helio).unwrap();
    assert_longitude(Body::Sun, earth.longitude, 100.3777, 0.01);

    let jupiter = s.calc(Body::Jupiter, J2000, helio).unwrap();
    assert_longitude(Body::Jupiter, jupiter.longitude, 36.43, 0.5);
    assert!((jupiter.distance - 4.9669).abs() < 0.05);

    // Nutation alone shifts the Sun by Δψ.
    let mut geo = CalcFlags::default();
    let with = s.calc(Body::Sun, J2000, geo).unwrap();
    geo.no_nutation = true;
    let without = s.calc(Body::Sun, J2000, geo).unwrap();
    let dpsi = diff360(with.longitude, without.longitude) * 3600.0;
    assert!((dpsi + 13.9).abs() < 0.5, "Δψ = {dpsi}″");
}

#[test]
fn heliocentric_moon_is_near_earth() {
    let mut s = Session::new();
    let helio = CalcFlags {
        heliocentric: true,
        ..CalcFlags::default()
    };
    let moon = s.calc(Body::Moon, J2000, helio).unwrap();
    let earth = s.calc(Body::Sun, J2000, helio).unwrap();
    assert!((moon.distance - earth.distance).abs() < 0.003);
    assert!(diff360(moon.longitude, earth.longitude).abs() < 0.2);
    assert!((0.8..1.2).contains(&moon.speed_longitude), "{}", moon.speed_longitude);
}
