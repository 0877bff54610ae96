//! House-cusp algorithms and the system dispatch.
//!
//! Every algorithm is a pure `fn(&TimeVariables) -> [f64; 12]` returning
//! tropical cusps 1 to 12 in degrees. Quadrant systems fill houses 1 to 6
//! and mirror the rest.

use std::f64::consts::PI;

use astro_frames::{min_dist, mod_tau, mod360, winkel};
use tracing::{debug, warn};

use crate::angles::is_polar;
use crate::types::{ChartGeometry, HouseOutcome, HouseSystem, TimeVariables};

/// Cusp algorithm signature.
pub type CuspFn = fn(&TimeVariables) -> [f64; 12];

/// Semi-arc passes for Placidus.
pub const PLACIDUS_ITERATIONS: usize = 10;

/// Stand-in latitude for Placidus on the equator, radians.
pub const PLACIDUS_EQUATOR_LATITUDE: f64 = 0.0001;

/// Strategy table: the algorithm for a selector, `None` if unimplemented.
pub fn cusp_fn(system: HouseSystem) -> Option<CuspFn> {
    match system {
        HouseSystem::Placidus => Some(placidus),
        HouseSystem::Koch => Some(koch),
        HouseSystem::Equal => Some(equal),
        HouseSystem::Campanus => Some(campanus),
        HouseSystem::Meridian => Some(meridian),
        HouseSystem::Regiomontanus => Some(regiomontanus),
        HouseSystem::Porphyry => Some(porphyry),
        HouseSystem::Morinus => Some(morinus),
        HouseSystem::Topocentric => Some(topocentric),
        HouseSystem::Alcabitius => Some(alcabitius),
        HouseSystem::EqualMidheaven => Some(equal_midheaven),
        HouseSystem::PorphyryNeo => Some(porphyry_neo),
        HouseSystem::WholeSign => Some(whole_sign),
        HouseSystem::Null => Some(null),
        HouseSystem::Gauquelin | HouseSystem::Horizontal | HouseSystem::Krusinski => None,
    }
}

/// Compute the cusps of `system` and assemble the chart geometry.
///
/// Unimplemented selectors fall back to Placidus and are reported in
/// [`HouseOutcome::fallback`]. The zodiac offset is applied to every
/// returned longitude.
pub fn compute_houses(system: HouseSystem, vars: &TimeVariables) -> HouseOutcome {
    let (used, algorithm, fallback) = match cusp_fn(system) {
        Some(f) => (system, f, None),
        None => {
            warn!(requested = system.name(), "house system not implemented, using placidus");
            (HouseSystem::Placidus, placidus as CuspFn, Some(system))
        }
    };

    let latitude_deg = vars.latitude.to_degrees();
    let polar = used.latitude_dependent() && is_polar(latitude_deg);
    if polar {
        warn!(
            system = used.name(),
            latitude = latitude_deg,
            "latitude inside polar circle, cusps are unreliable"
        );
    }
    debug!(system = used.name(), "computing house cusps");

    let offset = vars.zodiac_offset;
    let shift = |x: f64| mod360(x + offset);
    let cusps = algorithm(vars).map(shift);

    HouseOutcome {
        geometry: ChartGeometry {
            jd: vars.jd,
            sidereal_time: vars.sidereal_time,
            ramc: vars.ramc.to_degrees(),
            house_obliquity: vars.obliquity.to_degrees(),
            mc: shift(vars.mc),
            asc: shift(vars.asc),
            vertex: shift(vars.vertex),
            east_point: shift(vars.east_point),
            cusps,
        },
        system: used,
        fallback,
        polar,
    }
}

/// Fill houses 7 to 12 from 1 to 6.
fn mirror(mut cusps: [f64; 12]) -> [f64; 12] {
    for i in 0..6 {
        cusps[i] = mod360(cusps[i]);
        cusps[i + 6] = mod360(cusps[i] + 180.0);
    }
    cusps
}

/// Ecliptic longitude from a direction on the equator, radians.
fn equator_to_ecliptic(ra: f64, obliquity: f64) -> f64 {
    let mut lon = (ra.tan() / obliquity.cos()).atan();
    if lon < 0.0 {
        lon += PI;
    }
    if ra.sin() < 0.0 {
        lon += PI;
    }
    lon
}

fn placidus_cusp(vars: &TimeVariables, offset_deg: f64, divisor: f64, below: bool) -> f64 {
    let latitude = if vars.latitude == 0.0 {
        PLACIDUS_EQUATOR_LATITUDE
    } else {
        vars.latitude
    };
    let sign = if below { 1.0 } else { -1.0 };
    let mut ra = vars.ramc + offset_deg.to_radians();
    for _ in 0..PLACIDUS_ITERATIONS {
        let x = sign * ra.sin() * vars.obliquity.tan() * latitude.tan();
        let arc = x.clamp(-1.0, 1.0).acos();
        ra = vars.ramc + if below { PI - arc / divisor } else { arc / divisor };
    }
    equator_to_ecliptic(ra, vars.obliquity).to_degrees()
}

/// Placidus: trisection of the semi-arcs in time.
pub fn placidus(vars: &TimeVariables) -> [f64; 12] {
    let mut c = [0.0; 12];
    c[0] = vars.asc;
    c[1] = placidus_cusp(vars, 120.0, 1.5, true);
    c[2] = placidus_cusp(vars, 150.0, 3.0, true);
    c[3] = vars.mc + 180.0;
    c[4] = placidus_cusp(vars, 30.0, 3.0, false) + 180.0;
    c[5] = placidus_cusp(vars, 60.0, 1.5, false) + 180.0;
    mirror(c)
}

/// Koch: birthplace system, from the MC's ascensional difference.
pub fn koch(vars: &TimeVariables) -> [f64; 12] {
    let (ramc, eps, lat) = (vars.ramc, vars.obliquity, vars.latitude);
    let a1 = (ramc.sin() * lat.tan() * eps.tan()).clamp(-1.0, 1.0).asin();
    std::array::from_fn(|i| {
        let d = mod360(60.0 + 30.0 * (i + 1) as f64);
        let (kn, a2) = if d >= 180.0 {
            (-1.0, d / 90.0 - 3.0)
        } else {
            (1.0, d / 90.0 - 1.0)
        };
        let a3 = mod360(ramc.to_degrees() + d + a2 * a1.to_degrees()).to_radians();
        let x = a3.cos() * eps.cos() - kn * lat.tan() * eps.sin();
        mod360(winkel(x, a3.sin()).to_degrees())
    })
}

/// Campanus: equal division of the prime vertical.
pub fn campanus(vars: &TimeVariables) -> [f64; 12] {
    let (ramc, eps, lat) = (vars.ramc, vars.obliquity, vars.latitude);
    std::array::from_fn(|i| {
        // Offset keeps tan() away from its poles.
        let ko = (60.000_001 + 30.0 * (i + 1) as f64).to_radians();
        let mut dn = (ko.tan() * lat.cos()).atan();
        if dn < 0.0 {
            dn += PI;
        }
        if ko.sin() < 0.0 {
            dn += PI;
        }
        let x = (ramc + dn).cos() * eps.cos() - dn.sin() * lat.tan() * eps.sin();
        mod360(winkel(x, (ramc + dn).sin()).to_degrees())
    })
}

/// Meridian: 30° steps of right ascension from the RAMC.
pub fn meridian(vars: &TimeVariables) -> [f64; 12] {
    let (ramc, eps) = (vars.ramc, vars.obliquity);
    std::array::from_fn(|i| {
        let d = (60.0 + 30.0 * (i + 1) as f64).to_radians();
        mod360(winkel((ramc + d).cos() * eps.cos(), (ramc + d).sin()).to_degrees())
    })
}

/// Regiomontanus: equator division through the north and south points.
pub fn regiomontanus(vars: &TimeVariables) -> [f64; 12] {
    let (ramc, eps, lat) = (vars.ramc, vars.obliquity, vars.latitude);
    std::array::from_fn(|i| {
        let d = (60.0 + 30.0 * (i + 1) as f64).to_radians();
        let x = (ramc + d).cos() * eps.cos() - d.sin() * lat.tan() * eps.sin();
        mod360(winkel(x, (ramc + d).sin()).to_degrees())
    })
}

/// Porphyry: trisect each quadrant in longitude.
pub fn porphyry(vars: &TimeVariables) -> [f64; 12] {
    let (asc, mc) = (vars.asc, vars.mc);
    let upper = mod360(asc - mc) / 3.0;
    let lower = mod360(mc + 180.0 - asc) / 3.0;
    let mut c = [0.0; 12];
    c[0] = asc;
    c[1] = asc + lower;
    c[2] = asc + 2.0 * lower;
    c[3] = mc + 180.0;
    c[4] = mc + 180.0 + upper;
    c[5] = mc + 180.0 + 2.0 * upper;
    mirror(c)
}

/// Morinus: equator division projected along ecliptic meridians.
pub fn morinus(vars: &TimeVariables) -> [f64; 12] {
    let (ramc, eps) = (vars.ramc, vars.obliquity);
    std::array::from_fn(|i| {
        let d = (60.0 + 30.0 * (i + 1) as f64).to_radians();
        mod360(winkel((ramc + d).cos(), (ramc + d).sin() * eps.cos()).to_degrees())
    })
}

fn topocentric_cusp(vars: &TimeVariables, offset_deg: f64, latitude: f64) -> f64 {
    let oa = mod_tau(vars.ramc + offset_deg.to_radians());
    let x = (latitude.tan() / oa.cos()).atan();
    let mut lon = (x.cos() * oa.tan() / (x + vars.obliquity).cos()).atan();
    if lon < 0.0 {
        lon += PI;
    }
    if oa.sin() < 0.0 {
        lon += PI;
    }
    lon.to_degrees()
}

/// Topocentric: Placidus approximated with proportional pole heights.
pub fn topocentric(vars: &TimeVariables) -> [f64; 12] {
    let lat = vars.latitude;
    let pole1 = (lat.tan() / 3.0).atan();
    let pole2 = (lat.tan() / 1.5).atan();
    let mut c = [0.0; 12];
    c[0] = topocentric_cusp(vars, 90.0, lat);
    c[1] = topocentric_cusp(vars, 120.0, pole2);
    c[2] = topocentric_cusp(vars, 150.0, pole1);
    c[3] = vars.mc + 180.0;
    c[4] = topocentric_cusp(vars, 30.0, pole1) + 180.0;
    c[5] = topocentric_cusp(vars, 60.0, pole2) + 180.0;
    mirror(c)
}

/// Alcabitius: trisect the Ascendant's diurnal and nocturnal semi-arcs in
/// right ascension, then project onto the ecliptic.
pub fn alcabitius(vars: &TimeVariables) -> [f64; 12] {
    let (eps, lat) = (vars.obliquity, vars.latitude);
    let decl = (eps.sin() * vars.asc.to_radians().sin()).asin();
    let sda = (-lat.tan() * decl.tan()).clamp(-1.0, 1.0).acos();
    let sna = PI - sda;
    let ramc = vars.ramc;
    let ras = [
        ramc - sna,
        ramc - sna * 2.0 / 3.0,
        ramc - sna / 3.0,
        ramc,
        ramc + sda / 3.0,
        ramc + sda * 2.0 / 3.0,
    ];
    let mut c = [0.0; 12];
    for (k, ra) in ras.into_iter().enumerate() {
        let lon = equator_to_ecliptic(mod_tau(ra), eps).to_degrees();
        c[k + 6] = mod360(lon);
        c[k] = mod360(lon + 180.0);
    }
    c
}

/// Equal houses of 30° from the Ascendant.
pub fn equal(vars: &TimeVariables) -> [f64; 12] {
    std::array::from_fn(|i| mod360(vars.asc + 30.0 * i as f64))
}

/// Equal houses of 30° with the MC on cusp 10.
pub fn equal_midheaven(vars: &TimeVariables) -> [f64; 12] {
    std::array::from_fn(|i| mod360(vars.mc - 270.0 + 30.0 * i as f64))
}

/// Porphyry variant: the excess of the MC-ASC quadrant over 90° is spread
/// 1:2:1 over its three houses.
pub fn porphyry_neo(vars: &TimeVariables) -> [f64; 12] {
    let excess = (min_dist(vars.mc, vars.asc) - 90.0) / 4.0;
    let mut c = [0.0; 12];
    c[6] = mod360(vars.asc + 180.0);
    c[9] = vars.mc;
    c[10] = mod360(c[9] + 30.0 + excess);
    c[11] = mod360(c[10] + 30.0 + 2.0 * excess);
    c[8] = mod360(c[9] - 30.0 + excess);
    c[7] = mod360(c[8] - 30.0 + 2.0 * excess);
    for i in 0..6 {
        c[i] = mod360(c[i + 6] + 180.0);
    }
    c
}

/// Whole-sign houses, anchored on the sign of the Ascendant in the chart's
/// zodiac.
pub fn whole_sign(vars: &TimeVariables) -> [f64; 12] {
    let offset = vars.zodiac_offset;
    let first = ((vars.asc + offset).rem_euclid(360.0) / 30.0).floor() * 30.0 - offset;
    std::array::from_fn(|i| mod360(first + 30.0 * i as f64))
}

/// Cusps on 0° of each sign of the chart's zodiac.
pub fn null(vars: &TimeVariables) -> [f64; 12] {
    std::array::from_fn(|i| mod360(30.0 * i as f64 - vars.zodiac_offset))
}
