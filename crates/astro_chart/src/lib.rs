//! Chart orchestration for the astro ephemeris.
//!
//! This crate provides:
//! - [`compute_chart`]: time variables, houses, body positions and house
//!   placements for one date and place, in that order
//! - [`ChartRequest`], built directly or from an
//!   [`astro_config::ChartConfig`]
//! - Zodiac signs with element and modality counts
//! - Aspects between bodies with configurable orbs
//!
//! A body that cannot be computed is reported as a
//! [`Diagnostic::BodySkipped`] and left as `None`; the rest of the chart
//! is still produced.

pub mod aspects;
pub mod error;
pub mod placement;
pub mod zodiac;

use astro_config::{ChartConfig, OrbsConfig, validate_location};
use astro_core::{Body, CalcFlags, CoreError, MAX_BODIES, Position, Session};
use astro_frames::mod360;
use astro_houses::{
    ChartGeometry, HouseInput, HouseSystem, compute_houses, compute_time_variables,
};
use astro_time::{delta_t_days, is_gregorian, julian_day};
use tracing::{debug, warn};

pub use aspects::{ALL_ASPECTS, Aspect, AspectKind, aspect_between, find_aspects};
pub use error::ChartError;
pub use placement::{Placement, house_of, place};
pub use zodiac::{ALL_SIGNS, Element, Modality, Sign, SignCounts, format_longitude};

/// Date, place and settings of one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRequest {
    pub day: i32,
    pub month: i32,
    pub year: i32,
    /// Decimal hour, UT.
    pub hour: f64,
    /// Degrees, north positive.
    pub latitude: f64,
    /// Degrees, east positive.
    pub longitude: f64,
    pub house_system: HouseSystem,
    pub bodies: Vec<Body>,
    pub flags: CalcFlags,
    pub sidereal: bool,
    pub orbs: OrbsConfig,
}

impl ChartRequest {
    /// Geocentric apparent chart with every body and Placidus houses.
    pub fn new(day: i32, month: i32, year: i32, hour: f64, latitude: f64, longitude: f64) -> Self {
        Self {
            day,
            month,
            year,
            hour,
            latitude,
            longitude,
            house_system: HouseSystem::Placidus,
            bodies: Body::ALL.to_vec(),
            flags: CalcFlags::default(),
            sidereal: false,
            orbs: OrbsConfig::default(),
        }
    }

    /// Settings from a config; `location` overrides the configured one.
    pub fn from_config(
        config: &ChartConfig,
        (day, month, year): (i32, i32, i32),
        hour: f64,
        location: Option<(f64, f64)>,
    ) -> Result<Self, ChartError> {
        let (latitude, longitude) = location
            .or_else(|| config.location.as_ref().map(|l| (l.latitude, l.longitude)))
            .ok_or(ChartError::MissingLocation)?;
        Ok(Self {
            day,
            month,
            year,
            hour,
            latitude,
            longitude,
            house_system: config.house_system()?,
            bodies: config.bodies()?,
            flags: config.calc_flags(),
            sidereal: config.sidereal,
            orbs: config.orbs,
        })
    }

    fn house_input(&self) -> HouseInput {
        HouseInput {
            day: self.day,
            month: self.month,
            year: self.year,
            hour: self.hour,
            latitude: self.latitude,
            longitude: self.longitude,
            sidereal: self.sidereal,
        }
    }
}

/// Something worth telling the caller about a computed chart.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The requested house system has no algorithm; Placidus was used.
    HouseFallback { requested: HouseSystem },
    /// Latitude inside a polar circle for a semi-arc house system.
    PolarLatitude { latitude: f64 },
    /// The body could not be computed and is missing from the chart.
    BodySkipped { body: Body, error: CoreError },
}

/// A computed chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    /// Julian Day of the instant, UT.
    pub jd_ut: f64,
    /// Julian Day in terrestrial time, used for positions.
    pub jd_et: f64,
    /// TT − UT, seconds.
    pub delta_t: f64,
    /// True obliquity of date used for body positions, degrees. The house
    /// engine's value is `geometry.house_obliquity`.
    pub true_obliquity: f64,
    /// Nutation in longitude, degrees.
    pub nutation: f64,
    pub geometry: ChartGeometry,
    /// House system actually used.
    pub house_system: HouseSystem,
    /// Indexed by [`Body::index`]; `None` when not requested or skipped.
    pub positions: [Option<Position>; MAX_BODIES],
    pub placements: [Option<Placement>; MAX_BODIES],
    /// Sign on each cusp.
    pub cusp_signs: [Sign; 12],
    /// Element, modality and polarity counts over the computed bodies.
    pub sign_counts: SignCounts,
    /// Aspects among the computed bodies, tightest first.
    pub aspects: Vec<Aspect>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Chart {
    pub fn position(&self, body: Body) -> Option<&Position> {
        self.positions[body.index()].as_ref()
    }

    pub fn placement(&self, body: Body) -> Option<&Placement> {
        self.placements[body.index()].as_ref()
    }

    /// Computed bodies with their positions, in index order.
    pub fn bodies(&self) -> impl Iterator<Item = (Body, &Position)> {
        Body::ALL
            .into_iter()
            .filter_map(|b| self.positions[b.index()].as_ref().map(|p| (b, p)))
    }
}

/// Compute a full chart: angles and cusps first, then every requested
/// body, then house placements, counts and aspects.
pub fn compute_chart(request: &ChartRequest) -> Result<Chart, ChartError> {
    validate_location(request.latitude, request.longitude)?;
    request.orbs.validate()?;

    let vars = compute_time_variables(&request.house_input());
    let houses = compute_houses(request.house_system, &vars);
    let mut diagnostics = Vec::new();
    if let Some(requested) = houses.fallback {
        diagnostics.push(Diagnostic::HouseFallback { requested });
    }
    if houses.polar {
        diagnostics.push(Diagnostic::PolarLatitude {
            latitude: request.latitude,
        });
    }

    let gregorian = is_gregorian(request.day, request.month, request.year);
    let jd_ut = julian_day(request.day, request.month, request.year, request.hour, gregorian);
    let dt = delta_t_days(jd_ut);
    let jd_et = jd_ut + dt;
    debug!(jd_ut, jd_et, system = houses.system.name(), "computing chart");

    let mut session = Session::new();
    let mut positions = [None; MAX_BODIES];
    for &body in &request.bodies {
        match session.calc(body, jd_et, request.flags) {
            Ok(mut pos) => {
                pos.longitude = mod360(pos.longitude + vars.zodiac_offset);
                positions[body.index()] = Some(pos);
            }
            Err(error) => {
                warn!(?body, %error, "skipping body");
                diagnostics.push(Diagnostic::BodySkipped { body, error });
            }
        }
    }

    let cusps = houses.geometry.cusps;
    let placements = positions.map(|p| p.map(|p| place(p.longitude, &cusps)));
    let sign_counts = placements.iter().flatten().map(|p| p.sign).collect();
    let aspects = find_aspects(&positions, &request.orbs);

    Ok(Chart {
        jd_ut,
        jd_et,
        delta_t: dt * 86_400.0,
        true_obliquity: session.obliquity_deg(jd_et),
        nutation: session.nutation_deg(jd_et),
        geometry: houses.geometry,
        house_system: houses.system,
        positions,
        placements,
        cusp_signs: cusps.map(Sign::from_longitude),
        sign_counts,
        aspects,
        diagnostics,
    })
}

/// Position of one body at a UT instant, with the same time handling as
/// [`compute_chart`].
pub fn body_position(
    body: Body,
    (day, month, year): (i32, i32, i32),
    hour: f64,
    flags: CalcFlags,
) -> Result<Position, ChartError> {
    let jd_ut = julian_day(day, month, year, hour, is_gregorian(day, month, year));
    let mut session = Session::new();
    Ok(session.calc(body, jd_ut + delta_t_days(jd_ut), flags)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_from_config_uses_configured_location() {
        let config = ChartConfig::from_toml_str(
            r#"
house_system = "koch"
bodies = ["sun", "moon"]
[location]
latitude = 48.2
longitude = 16.37
"#,
        )
        .unwrap();
        let req = ChartRequest::from_config(&config, (1, 1, 2000), 12.0, None).unwrap();
        assert_eq!(req.house_system, HouseSystem::Koch);
        assert_eq!(req.bodies, vec![Body::Sun, Body::Moon]);
        assert_eq!((req.latitude, req.longitude), (48.2, 16.37));

        let req = ChartRequest::from_config(&config, (1, 1, 2000), 12.0, Some((0.0, 0.0))).unwrap();
        assert_eq!(req.latitude, 0.0);
        assert_eq!(req.orbs, OrbsConfig::default());
    }

    #[test]
    fn missing_location() {
        let err = ChartRequest::from_config(&ChartConfig::default(), (1, 1, 2000), 0.0, None)
            .unwrap_err();
        assert!(matches!(err, ChartError::MissingLocation));
    }

    #[test]
    fn invalid_location_is_an_error() {
        let req = ChartRequest::new(1, 1, 2000, 12.0, 123.0, 0.0);
        assert!(matches!(compute_chart(&req), Err(ChartError::Config(_))));
    }

    #[test]
    fn invalid_orbs_are_an_error() {
        let mut req = ChartRequest::new(1, 1, 2000, 12.0, 52.52, 13.40);
        req.orbs.trine = -2.0;
        assert!(matches!(compute_chart(&req), Err(ChartError::Config(_))));
    }

    #[test]
    fn unrequested_bodies_are_absent() {
        let mut req = ChartRequest::new(1, 1, 2000, 12.0, 52.52, 13.40);
        req.bodies = vec![Body::Mars];
        let chart = compute_chart(&req).unwrap();
        assert!(chart.position(Body::Mars).is_some());
        assert!(chart.position(Body::Sun).is_none());
        assert_eq!(chart.bodies().count(), 1);
        assert_eq!(chart.sign_counts.total(), 1);
    }
}
