//! Calculation session: one element cache, one Earth cache, any number of
//! body queries.
//!
//! A [`Session`] is the unit of memoization. It is `Send` but holds no
//! shared state, so parallel charts simply use one session each.

use astro_frames::{diff360, smod360, test_near_zero};
use tracing::debug;

use crate::elements::{ElementSet, element_table};
use crate::error::CoreError;
use crate::geocentric::to_geocentric;
use crate::heliocentric::{HelioState, TANERRLIMIT, heliocentric_position};
use crate::moon::{MoonState, lunar_position};
use crate::position::Position;
use crate::{Body, CalcFlags};

/// Step used to difference lunar positions for the Moon's speed, days.
pub const MOON_SPEED_INTERVAL: f64 = 1.0 / 24.0;

/// Half-span of the three lunar positions that define the true node, days.
pub const NODE_INTERVAL: f64 = 0.1;

/// Mean daily motion of the Moon, reported when speed is not requested.
pub const MOON_MEAN_MOTION: f64 = 13.176_358;

/// Mean daily motion of the lunar node.
pub const MEAN_NODE_SPEED: f64 = -0.053;

/// Mean daily motion of the lunar apogee (6′41.05″).
pub const LILITH_SPEED: f64 = 0.111_404;

/// Annual aberration coefficient: `Δλ = −k·r·dλ/dt` in degrees.
pub const ABERRATION_FACTOR: f64 = 0.005_768_3;

#[derive(Debug, Clone, Copy)]
struct EarthCache {
    jd: f64,
    state: HelioState,
}

/// Per-chart calculation context.
#[derive(Debug, Clone, Default)]
pub struct Session {
    elements: ElementSet,
    /// Scratch cache for offset instants (Moon speed, true node), so the
    /// main cache stays on the chart's day.
    offset_elements: ElementSet,
    earth: Option<EarthCache>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Element set evaluated at `jd`.
    pub fn elements(&mut self, jd: f64) -> &ElementSet {
        self.elements.update(jd);
        &self.elements
    }

    /// Nutation in longitude at `jd`, degrees.
    pub fn nutation_deg(&mut self, jd: f64) -> f64 {
        self.elements(jd).nutation_deg()
    }

    /// True obliquity at `jd`, degrees.
    pub fn obliquity_deg(&mut self, jd: f64) -> f64 {
        self.elements(jd).obliquity_deg()
    }

    fn earth(&mut self, jd: f64) -> Result<HelioState, CoreError> {
        if let Some(cache) = self.earth.filter(|c| c.jd == jd) {
            return Ok(cache.state);
        }
        let state = heliocentric_position(&mut self.elements, Body::Sun, jd)?;
        self.earth = Some(EarthCache { jd, state });
        Ok(state)
    }

    fn moon_at_offset(&mut self, jd: f64, offset: f64) -> MoonState {
        self.offset_elements.update(jd + offset);
        lunar_position(&self.offset_elements)
    }

    /// Position of `body` at `jd` (TT).
    ///
    /// Geocentric apparent ecliptic coordinates of date by default; see
    /// [`CalcFlags`] for the alternatives. `Body::Sun` with
    /// `heliocentric` set gives the Earth.
    pub fn calc(&mut self, body: Body, jd: f64, flags: CalcFlags) -> Result<Position, CoreError> {
        self.elements.update(jd);
        debug!(?body, jd, ?flags, "computing position");

        let mut pos = match body {
            Body::Sun => self.sun(jd, flags)?,
            Body::Moon => self.moon(jd, flags)?,
            Body::Mercury
            | Body::Venus
            | Body::Mars
            | Body::Jupiter
            | Body::Saturn
            | Body::Uranus
            | Body::Neptune
            | Body::Pluto
            | Body::Chiron => self.planet(body, jd, flags)?,
            Body::MeanNode => self.mean_node(),
            Body::TrueNode => self.true_node(jd),
            Body::Lilith => self.lilith(),
        };

        if !flags.no_nutation {
            pos.longitude += self.elements.nutation_deg();
        }
        pos.longitude = smod360(pos.longitude);
        Ok(pos)
    }

    fn sun(&mut self, jd: f64, flags: CalcFlags) -> Result<Position, CoreError> {
        let earth = self.earth(jd)?;
        let (mut longitude, mut height) = (earth.longitude, earth.height);
        if !flags.heliocentric {
            longitude = smod360(longitude + 180.0);
            height = -height;
        }
        if flags.applies_aberration() {
            longitude -= ABERRATION_FACTOR * earth.radius * earth.dlongitude;
        }
        Ok(Position {
            longitude,
            latitude: latitude_deg(height, earth.radius),
            distance: earth.radius,
            speed_longitude: earth.dlongitude,
            speed_latitude: 0.0,
            speed_distance: earth.dradius,
        })
    }

    fn moon(&mut self, jd: f64, flags: CalcFlags) -> Result<Position, CoreError> {
        let m = lunar_position(&self.elements);
        let (mut longitude, mut distance) = (m.longitude, m.distance_au);
        let mut speed_longitude = MOON_MEAN_MOTION;
        let mut speed_latitude = 0.0;
        let mut speed_distance = 0.0;

        if flags.heliocentric || flags.speed {
            let m2 = self.moon_at_offset(jd, MOON_SPEED_INTERVAL);
            let (mut longitude2, mut distance2) = (m2.longitude, m2.distance_au);
            if flags.heliocentric {
                // Adding the Earth's vector: pass it with negated radius.
                let earth = self.earth(jd)?;
                (longitude, distance) = to_geocentric(
                    earth.longitude,
                    -earth.radius,
                    m.longitude,
                    m.distance_au,
                    m.height,
                );
                (longitude2, distance2) = to_geocentric(
                    earth.longitude + MOON_SPEED_INTERVAL * earth.dlongitude,
                    -(earth.radius + MOON_SPEED_INTERVAL * earth.dradius),
                    m2.longitude,
                    m2.distance_au,
                    m2.height,
                );
            }
            speed_longitude = diff360(longitude2, longitude) / MOON_SPEED_INTERVAL;
            speed_distance = (distance2 - distance) / MOON_SPEED_INTERVAL;
            speed_latitude = (latitude_deg(m2.height, distance2) - latitude_deg(m.height, distance))
                / MOON_SPEED_INTERVAL;
        }

        Ok(Position {
            longitude,
            latitude: latitude_deg(m.height, distance),
            distance,
            speed_longitude,
            speed_latitude,
            speed_distance,
        })
    }

    fn planet(&mut self, body: Body, jd: f64, flags: CalcFlags) -> Result<Position, CoreError> {
        let helio = heliocentric_position(&mut self.elements, body, jd)?;
        let (longitude, distance, speed_longitude, distance_next) = if flags.heliocentric {
            (
                helio.longitude,
                helio.radius,
                helio.dlongitude,
                helio.radius + helio.dradius,
            )
        } else {
            let earth = self.earth(jd)?;
            let (l1, r1) = to_geocentric(
                earth.longitude,
                earth.radius,
                helio.longitude,
                helio.radius,
                helio.height,
            );
            // Both bodies advanced by one day of motion.
            let (l2, r2) = to_geocentric(
                earth.longitude + earth.dlongitude,
                earth.radius + earth.dradius,
                helio.longitude + helio.dlongitude,
                helio.radius + helio.dradius,
                helio.height + helio.dheight,
            );
            (l1, r1, diff360(l2, l1), r2)
        };

        let latitude = latitude_deg(helio.height, distance);
        let latitude_next = latitude_deg(helio.height + helio.dheight, distance_next);
        let mut longitude = longitude;
        if flags.applies_aberration() {
            longitude -= ABERRATION_FACTOR * distance * speed_longitude;
        }
        Ok(Position {
            longitude,
            latitude,
            distance,
            speed_longitude,
            speed_latitude: latitude_next - latitude,
            speed_distance: distance_next - distance,
        })
    }

    fn mean_node(&self) -> Position {
        Position {
            longitude: self.elements.moon().kn,
            latitude: 0.0,
            distance: moon_axis(),
            speed_longitude: MEAN_NODE_SPEED,
            speed_latitude: 0.0,
            speed_distance: 0.0,
        }
    }

    /// Osculating node from the orbit plane through three lunar positions.
    fn true_node(&mut self, jd: f64) -> Position {
        let now = rectangular(&lunar_position(&self.elements));
        let next = rectangular(&self.moon_at_offset(jd, NODE_INTERVAL));
        let prev = rectangular(&self.moon_at_offset(jd, -NODE_INTERVAL));

        let node_next = node_longitude(now, next);
        let node_prev = node_longitude(prev, now);
        let step = diff360(node_next, node_prev);
        Position {
            longitude: smod360(node_prev + step / 2.0),
            latitude: 0.0,
            distance: moon_axis(),
            speed_longitude: step / NODE_INTERVAL,
            speed_latitude: 0.0,
            speed_distance: 0.0,
        }
    }

    /// Black Moon Lilith: the mean lunar apogee projected onto the ecliptic.
    fn lilith(&self) -> Position {
        let moon = self.elements.moon();
        let arg_lat = smod360(moon.pe - moon.kn + 180.0);
        let (sini, cosi) = moon.inc.to_radians().sin_cos();
        let projected = if moon.inc == 0.0
            || (arg_lat - 90.0).abs() < TANERRLIMIT
            || (arg_lat - 270.0).abs() < TANERRLIMIT
        {
            arg_lat
        } else {
            let l = (arg_lat.to_radians().tan() * cosi).atan().to_degrees();
            if arg_lat > 90.0 && arg_lat < 270.0 { l + 180.0 } else { l }
        };
        Position {
            longitude: smod360(projected + moon.kn),
            latitude: (arg_lat.to_radians().sin() * sini).asin().to_degrees(),
            distance: 2.0 * moon_axis() * moon.ex,
            speed_longitude: LILITH_SPEED,
            speed_latitude: 0.0,
            speed_distance: 0.0,
        }
    }
}

fn latitude_deg(height: f64, distance: f64) -> f64 {
    (height / distance).clamp(-1.0, 1.0).asin().to_degrees()
}

fn moon_axis() -> f64 {
    element_table(Body::Moon).map_or(0.0, |t| t.axis)
}

/// Ecliptic rectangular coordinates of a lunar position.
fn rectangular(m: &MoonState) -> [f64; 3] {
    let r = (m.distance_au * m.distance_au - m.height * m.height).sqrt();
    let (s, c) = m.longitude.to_radians().sin_cos();
    [r * c, r * s, m.height]
}

/// Ascending node of the plane through the origin, `p` and then `q`.
fn node_longitude(p: [f64; 3], q: [f64; 3]) -> f64 {
    let x = test_near_zero(p[0] * q[1] - q[0] * p[1]);
    let s = (p[1] * q[2] - p[2] * q[1]) / x;
    let c = test_near_zero((p[0] * q[2] - p[2] * q[0]) / x);
    smod360(s.atan2(c).to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;
    use astro_time::J2000_JD;

    fn geo() -> CalcFlags {
        CalcFlags::default()
    }

    #[test]
    fn earth_is_cached_per_day() {
        let mut s = Session::new();
        s.calc(Body::Mars, J2000_JD, geo()).unwrap();
        let cached = s.earth.map(|c| c.jd);
        assert_eq!(cached, Some(J2000_JD));
        s.calc(Body::Venus, J2000_JD + 1.0, geo()).unwrap();
        assert_eq!(s.earth.map(|c| c.jd), Some(J2000_JD + 1.0));
    }

    #[test]
    fn sun_is_opposite_earth() {
        let mut s = Session::new();
        let flags = CalcFlags {
            true_position: true,
            no_nutation: true,
            ..CalcFlags::default()
        };
        let sun = s.calc(Body::Sun, J2000_JD, flags).unwrap();
        let earth = s
            .calc(Body::Sun, J2000_JD, CalcFlags { heliocentric: true, ..flags })
            .unwrap();
        assert!((diff360(sun.longitude, earth.longitude).abs() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn heliocentric_ignores_aberration() {
        let helio = CalcFlags {
            heliocentric: true,
            ..CalcFlags::default()
        };
        let geometric = CalcFlags {
            true_position: true,
            ..helio
        };
        let mut s = Session::new();
        for body in [Body::Sun, Body::Mars, Body::Jupiter] {
            let apparent = s.calc(body, J2000_JD, helio).unwrap();
            let plain = s.calc(body, J2000_JD, geometric).unwrap();
            assert_eq!(apparent.longitude, plain.longitude, "{body:?}");
        }

        // Geocentric apparent still differs by about 20″.
        let apparent = s.calc(Body::Sun, J2000_JD, geo()).unwrap();
        let plain = s
            .calc(Body::Sun, J2000_JD, CalcFlags { true_position: true, ..geo() })
            .unwrap();
        let d = diff360(plain.longitude, apparent.longitude) * 3600.0;
        assert!((d - 20.5).abs() < 1.0, "aberration = {d}″");
    }

    #[test]
    fn node_plane_recovers_inclined_orbit() {
        // Circle inclined 5° with node at 40°.
        let (node, inc) = (40.0_f64.to_radians(), 5.0_f64.to_radians());
        let point = |u: f64| {
            let (su, cu) = u.to_radians().sin_cos();
            [
                cu * node.cos() - su * inc.cos() * node.sin(),
                cu * node.sin() + su * inc.cos() * node.cos(),
                su * inc.sin(),
            ]
        };
        let l = node_longitude(point(60.0), point(61.0));
        assert!((l - 40.0).abs() < 1e-9, "node = {l}");
    }

    #[test]
    fn true_node_near_mean_node() {
        let mut s = Session::new();
        let flags = CalcFlags {
            no_nutation: true,
            ..CalcFlags::default()
        };
        for k in 0..30 {
            let jd = J2000_JD + k as f64 * 3.3;
            let mean = s.calc(Body::MeanNode, jd, flags).unwrap();
            let true_node = s.calc(Body::TrueNode, jd, flags).unwrap();
            let gap = diff360(true_node.longitude, mean.longitude).abs();
            assert!(gap < 2.5, "jd {jd}: gap {gap}");
        }
    }

    #[test]
    fn lilith_is_opposite_perigee_side() {
        let mut s = Session::new();
        let flags = CalcFlags {
            no_nutation: true,
            ..CalcFlags::default()
        };
        let lilith = s.calc(Body::Lilith, J2000_JD, flags).unwrap();
        let perigee = s.elements(J2000_JD).moon().pe;
        let gap = diff360(lilith.longitude, perigee + 180.0).abs();
        assert!(gap < 0.5, "gap {gap}");
        assert!(lilith.latitude.abs() <= 5.2);
    }

    #[test]
    fn moon_speed_when_requested() {
        let mut s = Session::new();
        let flags = CalcFlags {
            speed: true,
            ..CalcFlags::default()
        };
        let moon = s.calc(Body::Moon, J2000_JD, flags).unwrap();
        assert!((11.5..15.5).contains(&moon.speed_longitude), "{}", moon.speed_longitude);
        let plain = s.calc(Body::Moon, J2000_JD, geo()).unwrap();
        assert_eq!(plain.speed_longitude, MOON_MEAN_MOTION);
        assert_eq!(plain.longitude, moon.longitude);
    }
}
