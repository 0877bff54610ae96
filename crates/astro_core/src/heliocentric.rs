//! Heliocentric ecliptic positions.
//!
//! Bodies are routed through a per-body solver table: the Earth and the
//! inner planets use perturbed mean elements, Jupiter through Pluto and
//! Chiron use [`crate::outer`]. Positions are true positions referred to
//! the mean ecliptic and equinox of date; nutation is left to the caller.

use astro_frames::smod360;

use crate::Body;
use crate::elements::{ElementSet, element_table};
use crate::error::CoreError;
use crate::kepler::{KEPLER_TOLERANCE_DEG, solve_kepler};
use crate::outer::outer_position;
use crate::perturbation::{
    EARTH_TERMS, MARS_TERMS, MERCURY_TERMS, PerturbationTerm, VENUS_TERMS, disturb,
};

/// Half-width of the guard band around singular tangent arguments.
///
/// Applied both in radians (eccentric anomaly near π) and in degrees
/// (argument of latitude near 90° or 270°).
pub const TANERRLIMIT: f64 = 0.0001;

/// Heliocentric position and its rates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HelioState {
    /// Ecliptic longitude, degrees in [0, 360).
    pub longitude: f64,
    /// Radius vector, AU.
    pub radius: f64,
    /// Height above the ecliptic, AU.
    pub height: f64,
    /// Longitude rate, degrees/day.
    pub dlongitude: f64,
    /// Radius rate, AU/day.
    pub dradius: f64,
    /// Height rate, AU/day.
    pub dheight: f64,
}

/// Shape and orientation of an elliptic orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitGeometry {
    pub axis: f64,
    pub period_days: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub perihelion_deg: f64,
    pub node_deg: f64,
}

type HelioSolver = fn(&ElementSet, Body, f64) -> Result<HelioState, CoreError>;

fn solver_for(body: Body) -> Option<HelioSolver> {
    match body {
        Body::Sun | Body::Mercury | Body::Venus | Body::Mars => Some(inner_position),
        Body::Jupiter
        | Body::Saturn
        | Body::Uranus
        | Body::Neptune
        | Body::Pluto
        | Body::Chiron => Some(outer_position),
        Body::Moon | Body::MeanNode | Body::TrueNode | Body::Lilith => None,
    }
}

/// Heliocentric position of `body` at `jd` (TT).
///
/// `Body::Sun` yields the Earth. The element cache is brought up to `jd`
/// first.
pub fn heliocentric_position(
    elements: &mut ElementSet,
    body: Body,
    jd: f64,
) -> Result<HelioState, CoreError> {
    let solver = solver_for(body).ok_or(CoreError::UnsupportedBody(body))?;
    elements.update(jd);
    solver(elements, body, jd)
}

/// Unperturbed position on an ellipse with analytic rates.
pub fn orbit_state(orbit: &OrbitGeometry, mean_anomaly_deg: f64) -> Result<HelioState, CoreError> {
    let e = orbit.eccentricity;
    let (sini, cosi) = orbit.inclination_deg.to_radians().sin_cos();
    let esquare = ((1.0 + e) / (1.0 - e)).sqrt();

    let u = solve_kepler(mean_anomaly_deg, e, KEPLER_TOLERANCE_DEG)?;
    let cosu = u.cos();
    let h1 = 1.0 - e * cosu;
    let radius = orbit.axis * h1;
    let near_aphelion = (std::f64::consts::PI - u).abs() < TANERRLIMIT;
    let true_anomaly = if near_aphelion {
        u
    } else {
        2.0 * (esquare * (u * 0.5).tan()).atan()
    };

    // argument of latitude
    let v = smod360(true_anomaly.to_degrees() + orbit.perihelion_deg - orbit.node_deg);
    let mut longitude = if sini == 0.0
        || (v - 90.0).abs() < TANERRLIMIT
        || (v - 270.0).abs() < TANERRLIMIT
    {
        v
    } else {
        let l = (v.to_radians().tan() * cosi).atan().to_degrees();
        if v > 90.0 && v < 270.0 { l + 180.0 } else { l }
    };
    longitude = smod360(longitude + orbit.node_deg);

    let (sinv, cosv) = v.to_radians().sin_cos();
    let height = radius * sinv * sini;
    let b = (sinv * sini).asin();
    let k8 = cosv / b.cos() * sini;

    let up = 360.0 / orbit.period_days / h1;
    let vp = if near_aphelion {
        up / esquare
    } else {
        up * esquare * (1.0 + true_anomaly.cos()) / (1.0 + cosu)
    };
    let dradius = orbit.axis * up.to_radians() * u.sin() * e;
    let dheight = dradius * sinv * sini + radius * vp.to_radians() * cosv * sini;
    let dlongitude = vp / cosi * (1.0 - k8 * k8);

    Ok(HelioState {
        longitude,
        radius,
        height,
        dlongitude,
        dradius,
        dheight,
    })
}

fn sin_deg(x: f64) -> f64 {
    x.to_radians().sin()
}

/// Long-period additions to the mean anomaly, arcseconds.
fn long_period_anomaly(body: Body, t: f64) -> f64 {
    match body {
        Body::Sun => {
            0.266 * sin_deg(150.8 + 119.0 * t)
                + 6.40 * sin_deg(251.39 + 20.2 * t)
                + (1.866 - 0.016 * t) * sin_deg(207.51 + 150.27 * t)
        }
        Body::Mars => {
            0.606 * sin_deg(331.921 + 119.051 * t)
                + 52.490 * sin_deg(67.251 + 19.771 * t)
                + 0.319 * sin_deg(170.324 + 773.444 * t)
                + 0.130 * sin_deg(237.0 + 163.0 * t)
                + 0.280 * sin_deg(340.8 + 40.8 * t)
        }
        _ => 0.0,
    }
}

/// Reduction from the Earth–Moon barycentre to the Earth's centre:
/// `(Δλ″, Δlog r·1e9)`.
fn earth_moon_terms(set: &ElementSet) -> (f64, f64) {
    let earth = set.earth();
    let moon = set.moon();
    let am = smod360(moon.lg - earth.lg + 180.0).to_radians();
    let mma = moon.ma.to_radians();
    let ema = earth.ma.to_radians();
    let u2 = 2.0 * (earth.lg - 180.0 - moon.kn).to_radians();

    let lk = 6.454 * am.sin() + 0.013 * (3.0 * am).sin() + 0.177 * (am + mma).sin()
        - 0.424 * (am - mma).sin()
        + 0.039 * (3.0 * am - mma).sin()
        - 0.064 * (am + ema).sin()
        + 0.172 * (am - ema).sin()
        - 0.013 * (am - mma - ema).sin()
        - 0.013 * u2.sin();
    let rk = 13360.0 * am.cos() + 30.0 * (3.0 * am).cos() + 370.0 * (am + mma).cos()
        - 1330.0 * (am - mma).cos()
        + 80.0 * (3.0 * am - mma).cos()
        - 140.0 * (am + ema).cos()
        + 360.0 * (am - ema).cos()
        - 30.0 * (am - mma - ema).cos()
        + 30.0 * u2.cos();
    (lk, rk)
}

fn inner_position(set: &ElementSet, body: Body, _jd: f64) -> Result<HelioState, CoreError> {
    let (Some(el), Some(table)) = (set.get(body), element_table(body)) else {
        return Err(CoreError::UnsupportedBody(body));
    };
    let t = el.tj;
    let man = el.ma + long_period_anomaly(body, t) / 3600.0;
    let orbit = OrbitGeometry {
        axis: table.axis,
        period_days: table.period,
        eccentricity: el.ex,
        inclination_deg: el.inc,
        perihelion_deg: el.pe,
        node_deg: el.kn,
    };
    let mut state = orbit_state(&orbit, man)?;

    let (terms, lk, rk): (&[PerturbationTerm], f64, f64) = match body {
        Body::Sun => {
            let (lk, rk) = earth_moon_terms(set);
            // Mars long-period term 15g‴ − 8g″
            (&EARTH_TERMS, lk + 0.202 * sin_deg(128.9 + 893.3 * t), rk)
        }
        Body::Mercury => (&MERCURY_TERMS, 0.0, 0.0),
        Body::Venus => {
            let lk = (2.541 - 0.22 * t) * sin_deg(27.51 + 150.27 * t)
                + 0.269 * sin_deg(331.25 + 119.05 * t)
                - 0.208 * sin_deg(319.3 + 1223.5 * t);
            (&VENUS_TERMS, lk, 0.0)
        }
        Body::Mars => (&MARS_TERMS, 0.0, 0.0),
        _ => return Err(CoreError::UnsupportedBody(body)),
    };
    disturb(terms, set.aux(), man, lk, rk, &mut state.longitude, &mut state.radius);
    state.longitude = smod360(state.longitude);
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use astro_time::J2000_JD;

    #[test]
    fn earth_at_j2000() {
        let mut set = ElementSet::new();
        let earth = heliocentric_position(&mut set, Body::Sun, J2000_JD).unwrap();
        // Sun geometric 280.377° (mean equinox of date) ⇒ Earth 100.377°
        assert!((earth.longitude - 100.377).abs() < 0.01, "L = {}", earth.longitude);
        assert!((earth.radius - 0.983_327).abs() < 1e-4, "R = {}", earth.radius);
        assert!((earth.dlongitude - 1.019).abs() < 0.005);
    }

    #[test]
    fn derived_points_have_no_solver() {
        let mut set = ElementSet::new();
        for body in [Body::Moon, Body::MeanNode, Body::TrueNode, Body::Lilith] {
            let err = heliocentric_position(&mut set, body, J2000_JD).unwrap_err();
            assert_eq!(err, CoreError::UnsupportedBody(body));
        }
    }

    #[test]
    fn circular_flat_orbit_moves_uniformly() {
        let orbit = OrbitGeometry {
            axis: 2.0,
            period_days: 360.0,
            eccentricity: 0.0,
            inclination_deg: 0.0,
            perihelion_deg: 30.0,
            node_deg: 0.0,
        };
        let s = orbit_state(&orbit, 45.0).unwrap();
        assert!((s.longitude - 75.0).abs() < 1e-9);
        assert!((s.radius - 2.0).abs() < 1e-12);
        assert!((s.dlongitude - 1.0).abs() < 1e-12);
        assert_eq!(s.height, 0.0);
    }

    #[test]
    fn aphelion_guard_keeps_finite() {
        let orbit = OrbitGeometry {
            axis: 1.0,
            period_days: 365.0,
            eccentricity: 0.2,
            inclination_deg: 5.0,
            perihelion_deg: 0.0,
            node_deg: 0.0,
        };
        let s = orbit_state(&orbit, 180.0).unwrap();
        assert!(s.longitude.is_finite() && s.dlongitude.is_finite());
        assert!((s.radius - 1.2).abs() < 1e-9);
    }

    #[test]
    fn speeds_match_finite_difference() {
        let mut set = ElementSet::new();
        for body in [Body::Mercury, Body::Venus, Body::Mars] {
            let a = heliocentric_position(&mut set, body, J2000_JD).unwrap();
            let b = heliocentric_position(&mut set, body, J2000_JD + 0.01).unwrap();
            let fd = astro_frames::diff360(b.longitude, a.longitude) / 0.01;
            assert!((fd - a.dlongitude).abs() < 0.02 * a.dlongitude.abs(), "{body:?}");
        }
    }
}
