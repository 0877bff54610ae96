//! Mean orbital elements of the Earth, Moon and inner planets.
//!
//! Each body's elements are cubic polynomials in Julian centuries from
//! its own epoch, referred to the mean ecliptic and equinox of date.
//! [`ElementSet`] evaluates all of them for one Julian Day and keeps the
//! result until a different day is requested. The lunar branch also
//! yields nutation and obliquity, which every later stage consumes.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Table 31.A and
//! eqs. 47.1–47.7.

use astro_frames::{NutationArguments, mod360, nutation, smod360};
use astro_frames::{mean_obliquity_deg, true_obliquity_deg};
use astro_time::{DAYS_PER_CENTURY, J2000_JD};
use tracing::debug;

use crate::Body;

/// Bodies with a mean-element polynomial: Earth, Moon, Mercury, Venus, Mars.
pub const ELEMENT_BODIES: usize = 5;

/// Number of auxiliary mean anomalies used as disturbance arguments.
pub const AUX_COUNT: usize = 6;

pub const AUX_MERCURY: usize = 0;
pub const AUX_VENUS: usize = 1;
pub const AUX_EARTH: usize = 2;
pub const AUX_MARS: usize = 3;
pub const AUX_JUPITER: usize = 4;
pub const AUX_SATURN: usize = 5;

/// Epoch of the auxiliary anomaly table (1850 Jan 0.5).
pub const AUX_EPOCH_JD: f64 = 2_396_758.0;

/// Static per-body element polynomials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementTable {
    /// Semi-major axis, AU.
    pub axis: f64,
    /// Sidereal period, days.
    pub period: f64,
    /// Polynomial epoch, JD.
    pub epoch: f64,
    /// Mean longitude, degrees.
    pub lg: [f64; 4],
    /// Longitude of perihelion, degrees.
    pub pe: [f64; 4],
    /// Eccentricity.
    pub ex: [f64; 4],
    /// Longitude of the ascending node, degrees.
    pub kn: [f64; 4],
    /// Inclination, degrees.
    pub inc: [f64; 4],
}

/// Osculating-style element values at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrbitalElements {
    /// Julian centuries since the body's epoch.
    pub tj: f64,
    pub lg: f64,
    pub pe: f64,
    pub ex: f64,
    pub kn: f64,
    pub inc: f64,
    /// Mean anomaly, `lg − pe` wrapped to [0, 360).
    pub ma: f64,
}

#[rustfmt::skip]
static ELEMENT_TABLES: [ElementTable; ELEMENT_BODIES] = [
    // Earth (indexed by the Sun)
    ElementTable {
        axis: 1.000_001_018, period: 365.256_363, epoch: J2000_JD,
        lg: [100.466_457, 36_000.769_827_8, 0.000_303_22, 0.000_000_020],
        pe: [102.937_348, 1.719_536_6, 0.000_456_88, -0.000_000_018],
        ex: [0.016_708_63, -0.000_042_037, -0.000_000_126_7, 0.000_000_000_14],
        kn: [0.0; 4],
        inc: [0.0; 4],
    },
    // Moon
    ElementTable {
        axis: 0.002_569_555, period: 27.321_582, epoch: J2000_JD,
        lg: [218.316_447_7, 481_267.881_234_21, -0.001_578_6, 1.0 / 538_841.0],
        pe: [83.353_051_3, 4_069.013_728_7, -0.010_320_0, -0.000_012_491_6],
        ex: [0.054_900_489, 0.0, 0.0, 0.0],
        kn: [125.044_547_9, -1_934.136_289_1, 0.002_075_4, 0.000_002_139_4],
        inc: [5.145_396_4, 0.0, 0.0, 0.0],
    },
    // Mercury
    ElementTable {
        axis: 0.387_098_310, period: 87.969_257, epoch: J2000_JD,
        lg: [252.250_906, 149_474.072_249_1, 0.000_303_50, 0.000_000_018],
        pe: [77.456_119, 1.556_477_6, 0.000_295_44, 0.000_000_009],
        ex: [0.205_631_75, 0.000_020_407, -0.000_000_028_3, -0.000_000_000_18],
        kn: [48.330_893, 1.186_188_3, 0.000_175_42, 0.000_000_215],
        inc: [7.004_986, 0.001_821_5, -0.000_018_10, 0.000_000_056],
    },
    // Venus
    ElementTable {
        axis: 0.723_329_820, period: 224.700_799, epoch: J2000_JD,
        lg: [181.979_801, 58_519.213_030_2, 0.000_310_14, 0.000_000_015],
        pe: [131.563_703, 1.402_228_8, -0.001_076_18, -0.000_005_678],
        ex: [0.006_771_92, -0.000_047_765, 0.000_000_098_1, 0.000_000_000_46],
        kn: [76.679_920, 0.901_120_6, 0.000_406_18, -0.000_000_093],
        inc: [3.394_662, 0.001_003_7, -0.000_000_88, -0.000_000_007],
    },
    // Mars
    ElementTable {
        axis: 1.523_679_342, period: 686.979_586, epoch: J2000_JD,
        lg: [355.433_000, 19_141.696_447_1, 0.000_310_52, 0.000_000_016],
        pe: [336.060_234, 1.841_044_9, 0.000_134_77, 0.000_000_536],
        ex: [0.093_400_65, 0.000_090_484, -0.000_000_080_6, -0.000_000_000_25],
        kn: [49.558_093, 0.772_095_9, 0.000_015_57, 0.000_002_267],
        inc: [1.849_726, -0.000_601_1, 0.000_012_76, -0.000_000_007],
    },
];

/// Auxiliary mean anomalies: value at [`AUX_EPOCH_JD`] and rate per
/// Julian century, degrees. Order: Mercury, Venus, Earth, Mars, Jupiter,
/// Saturn.
#[rustfmt::skip]
static AUX_ANOMALIES: [[f64; 2]; AUX_COUNT] = [
    [248.067_297, 149_472.515_771_5],
    [114.500_961,  58_517.810_801_4],
    [359.446_472,  35_999.050_291_2],
    [109.851_673,  19_139.855_402_2],
    [148.026_645,   3_034.690_139_6],
    [284.715_968,   1_221.547_307_3],
];

fn poly(c: &[f64; 4], t: f64) -> f64 {
    c[0] + t * (c[1] + t * (c[2] + t * c[3]))
}

/// Element table for a body that has one.
pub fn element_table(body: Body) -> Option<&'static ElementTable> {
    element_slot(body).map(|i| &ELEMENT_TABLES[i])
}

const fn element_slot(body: Body) -> Option<usize> {
    match body {
        Body::Sun => Some(0),
        Body::Moon => Some(1),
        Body::Mercury => Some(2),
        Body::Venus => Some(3),
        Body::Mars => Some(4),
        _ => None,
    }
}

/// Per-session element cache.
///
/// Holds the elements of every polynomial body, the auxiliary anomalies
/// and the nutation/obliquity for the last Julian Day passed to
/// [`ElementSet::update`].
#[derive(Debug, Clone)]
pub struct ElementSet {
    last_jd: Option<f64>,
    elements: [OrbitalElements; ELEMENT_BODIES],
    aux: [f64; AUX_COUNT],
    nutation_deg: f64,
    mean_obliquity_deg: f64,
    obliquity_deg: f64,
}

impl Default for ElementSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementSet {
    pub fn new() -> Self {
        Self {
            last_jd: None,
            elements: [OrbitalElements::default(); ELEMENT_BODIES],
            aux: [0.0; AUX_COUNT],
            nutation_deg: 0.0,
            mean_obliquity_deg: 0.0,
            obliquity_deg: 0.0,
        }
    }

    /// Evaluate everything for `jd` (TT) unless it is the cached day.
    ///
    /// Returns `true` when a recomputation happened.
    pub fn update(&mut self, jd: f64) -> bool {
        if self.last_jd == Some(jd) {
            return false;
        }
        debug!(jd, "recomputing orbital elements");

        for (slot, table) in ELEMENT_TABLES.iter().enumerate() {
            let t = (jd - table.epoch) / DAYS_PER_CENTURY;
            let lg = mod360(poly(&table.lg, t));
            let pe = mod360(poly(&table.pe, t));
            self.elements[slot] = OrbitalElements {
                tj: t,
                lg,
                pe,
                ex: poly(&table.ex, t),
                kn: mod360(poly(&table.kn, t)),
                inc: poly(&table.inc, t),
                ma: smod360(lg - pe),
            };
            if slot == 1 {
                self.update_nutation(t);
            }
        }

        let t1850 = (jd - AUX_EPOCH_JD) / DAYS_PER_CENTURY;
        for (value, [a0, a1]) in self.aux.iter_mut().zip(AUX_ANOMALIES.iter()) {
            *value = mod360(a0 + a1 * t1850);
        }

        self.last_jd = Some(jd);
        true
    }

    /// Lunar branch: nutation arguments come straight from the Earth and
    /// Moon elements just computed.
    fn update_nutation(&mut self, t: f64) {
        let earth = self.elements[0];
        let moon = self.elements[1];
        let args = NutationArguments {
            elongation: moon.lg - earth.lg - 180.0,
            sun_anomaly: earth.ma,
            moon_anomaly: moon.ma,
            latitude_arg: moon.lg - moon.kn,
            node: moon.kn,
        };
        let (dpsi, deps) = nutation(&args, t);
        self.nutation_deg = dpsi / 3600.0;
        self.mean_obliquity_deg = mean_obliquity_deg(t);
        self.obliquity_deg = true_obliquity_deg(t, deps);
    }

    /// Last evaluated Julian Day, if any.
    pub fn last_jd(&self) -> Option<f64> {
        self.last_jd
    }

    /// Elements of a polynomial body; `None` for the others.
    pub fn get(&self, body: Body) -> Option<&OrbitalElements> {
        element_slot(body).map(|i| &self.elements[i])
    }

    /// Heliocentric elements of the Earth.
    pub fn earth(&self) -> &OrbitalElements {
        &self.elements[0]
    }

    pub fn moon(&self) -> &OrbitalElements {
        &self.elements[1]
    }

    /// Auxiliary mean anomalies, degrees.
    pub fn aux(&self) -> &[f64; AUX_COUNT] {
        &self.aux
    }

    /// Nutation in longitude, degrees.
    pub fn nutation_deg(&self) -> f64 {
        self.nutation_deg
    }

    pub fn mean_obliquity_deg(&self) -> f64 {
        self.mean_obliquity_deg
    }

    /// True obliquity (mean + nutation in obliquity), degrees.
    pub fn obliquity_deg(&self) -> f64 {
        self.obliquity_deg
    }
}
