//! Outer planets and Chiron.
//!
//! Jupiter through Pluto use the JPL "approximate positions of the
//! planets" Keplerian elements for 3000 BC – 3000 AD, with the extra
//! mean-anomaly terms `b·T² + c·cos(fT) + s·sin(fT)`. Elements are
//! referred to the J2000 ecliptic and equinox; longitudes are moved to
//! the mean equinox of date with the general precession in longitude.
//! Chiron uses fixed osculating elements at J2000 and is only good for
//! a few decades either side of it.
//!
//! Source: E. M. Standish, "Keplerian Elements for Approximate Positions
//! of the Major Planets", JPL/SSD, Tables 2a and 2b.

use astro_frames::smod360;
use astro_time::{DAYS_PER_CENTURY, J2000_JD};

use crate::Body;
use crate::elements::ElementSet;
use crate::error::CoreError;
use crate::heliocentric::{HelioState, OrbitGeometry, orbit_state};

/// Keplerian elements at J2000 with linear rates per Julian century.
#[derive(Debug, Clone, Copy, PartialEq)]
struct OuterElements {
    a: [f64; 2],
    e: [f64; 2],
    inc: [f64; 2],
    /// Mean longitude.
    l: [f64; 2],
    /// Longitude of perihelion.
    peri: [f64; 2],
    node: [f64; 2],
    /// Extra mean-anomaly terms `[b, c, s, f]`.
    bcsf: [f64; 4],
}

#[rustfmt::skip]
static OUTER_ELEMENTS: [OuterElements; 5] = [
    // Jupiter
    OuterElements {
        a: [5.202_480_19, -0.000_028_64], e: [0.048_535_90, 0.000_180_26],
        inc: [1.298_614_16, -0.003_226_99], l: [34.334_791_52, 3_034.903_717_57],
        peri: [14.274_952_44, 0.181_991_96], node: [100.292_826_54, 0.130_246_19],
        bcsf: [-0.000_124_52, 0.060_640_60, -0.356_354_38, 38.351_25],
    },
    // Saturn
    OuterElements {
        a: [9.541_498_83, -0.000_030_65], e: [0.055_508_25, -0.000_320_44],
        inc: [2.494_241_02, 0.004_519_69], l: [50.075_713_29, 1_222.114_947_24],
        peri: [92.861_360_63, 0.541_794_78], node: [113.639_987_02, -0.250_150_02],
        bcsf: [0.000_258_99, -0.134_344_69, 0.873_201_47, 38.351_25],
    },
    // Uranus
    OuterElements {
        a: [19.187_979_48, -0.000_204_55], e: [0.046_857_40, -0.000_015_50],
        inc: [0.772_981_27, -0.001_801_55], l: [314.202_766_25, 428.495_125_95],
        peri: [172.434_044_41, 0.092_669_85], node: [73.962_502_15, 0.057_396_99],
        bcsf: [0.000_583_31, -0.977_318_48, 0.176_892_45, 7.670_25],
    },
    // Neptune
    OuterElements {
        a: [30.069_527_52, 0.000_064_47], e: [0.008_954_39, 0.000_008_18],
        inc: [1.770_055_20, 0.000_224_00], l: [304.222_892_87, 218.465_153_14],
        peri: [46.681_587_24, 0.010_099_38], node: [131.786_358_53, -0.006_063_02],
        bcsf: [-0.000_413_48, 0.683_463_18, -0.101_625_47, 7.670_25],
    },
    // Pluto
    OuterElements {
        a: [39.486_860_35, 0.004_497_51], e: [0.248_852_38, 0.000_060_16],
        inc: [17.141_042_60, 0.000_005_01], l: [238.965_350_11, 145.180_429_03],
        peri: [224.097_025_98, -0.009_688_27], node: [110.301_679_86, -0.008_099_81],
        bcsf: [-0.012_627_24, 0.0, 0.0, 0.0],
    },
];

/// Chiron osculating elements, J2000 ecliptic and equinox.
mod chiron {
    pub const AXIS: f64 = 13.648;
    pub const ECCENTRICITY: f64 = 0.3806;
    pub const INCLINATION: f64 = 6.93;
    pub const NODE: f64 = 209.35;
    pub const PERIHELION: f64 = 188.85;
    /// Mean anomaly at J2000, degrees.
    pub const MEAN_ANOMALY: f64 = 27.69;
    /// Mean motion, degrees/day.
    pub const MEAN_MOTION: f64 = 0.019_548;
}

/// General precession in longitude since J2000, degrees.
fn precession_deg(t: f64) -> f64 {
    1.396_971 * t + 0.000_308_6 * t * t
}

const fn outer_slot(body: Body) -> Option<usize> {
    match body {
        Body::Jupiter => Some(0),
        Body::Saturn => Some(1),
        Body::Uranus => Some(2),
        Body::Neptune => Some(3),
        Body::Pluto => Some(4),
        _ => None,
    }
}

/// Heliocentric position of an outer body at `jd` (TT).
pub(crate) fn outer_position(
    _elements: &ElementSet,
    body: Body,
    jd: f64,
) -> Result<HelioState, CoreError> {
    let t = (jd - J2000_JD) / DAYS_PER_CENTURY;
    let p = precession_deg(t);

    if body == Body::Chiron {
        let orbit = OrbitGeometry {
            axis: chiron::AXIS,
            period_days: 360.0 / chiron::MEAN_MOTION,
            eccentricity: chiron::ECCENTRICITY,
            inclination_deg: chiron::INCLINATION,
            perihelion_deg: smod360(chiron::PERIHELION + p),
            node_deg: smod360(chiron::NODE + p),
        };
        let m = chiron::MEAN_ANOMALY + chiron::MEAN_MOTION * (jd - J2000_JD);
        return orbit_state(&orbit, smod360(m));
    }

    let slot = outer_slot(body).ok_or(CoreError::UnsupportedBody(body))?;
    let el = &OUTER_ELEMENTS[slot];
    let at = |c: [f64; 2]| c[0] + c[1] * t;
    let [b, c, s, f] = el.bcsf;
    let l = at(el.l);
    let peri = at(el.peri);
    let ft = (f * t).to_radians();
    let m = l - peri + b * t * t + c * ft.cos() + s * ft.sin();

    let orbit = OrbitGeometry {
        axis: at(el.a),
        period_days: DAYS_PER_CENTURY * 360.0 / el.l[1],
        eccentricity: at(el.e),
        inclination_deg: at(el.inc),
        perihelion_deg: smod360(peri + p),
        node_deg: smod360(at(el.node) + p),
    };
    orbit_state(&orbit, smod360(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helio(body: Body, jd: f64) -> HelioState {
        outer_position(&ElementSet::new(), body, jd).unwrap()
    }

    #[test]
    fn radii_at_j2000() {
        // Heliocentric distances, 2000-01-01.
        let cases = [
            (Body::Jupiter, 4.965),
            (Body::Saturn, 9.184),
            (Body::Uranus, 19.924),
            (Body::Neptune, 30.121),
            (Body::Pluto, 30.226),
        ];
        for (body, r) in cases {
            let s = helio(body, J2000_JD);
            assert!((s.radius - r).abs() < 0.05, "{body:?} r = {}", s.radius);
        }
    }

    #[test]
    fn periods_follow_mean_motion() {
        for body in [Body::Jupiter, Body::Saturn, Body::Uranus] {
            let a = helio(body, J2000_JD);
            let b = helio(body, J2000_JD + 1.0);
            let fd = astro_frames::diff360(b.longitude, a.longitude);
            assert!((fd - a.dlongitude).abs() < 0.05 * a.dlongitude, "{body:?}");
        }
    }

    #[test]
    fn chiron_is_between_saturn_and_uranus() {
        let s = helio(Body::Chiron, J2000_JD);
        assert!(s.radius > 8.4 && s.radius < 18.9, "r = {}", s.radius);
    }

    #[test]
    fn inner_bodies_are_rejected() {
        let err = outer_position(&ElementSet::new(), Body::Mars, J2000_JD).unwrap_err();
        assert_eq!(err, CoreError::UnsupportedBody(Body::Mars));
    }
}
