//! Types for the house engine: system selectors, inputs and results.

/// House division systems.
///
/// The last three are accepted as selectors but have no implementation;
/// they resolve to [`HouseSystem::Placidus`] with a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HouseSystem {
    Placidus,
    Koch,
    /// Equal houses from the Ascendant.
    Equal,
    /// Prime-vertical division.
    Campanus,
    /// Equator division from the RAMC (axial rotation).
    Meridian,
    /// Equator division projected through the horizon poles.
    Regiomontanus,
    /// Quadrant trisection in longitude.
    Porphyry,
    Morinus,
    /// Polich-Page.
    Topocentric,
    /// Semi-arc division of the Ascendant's parallel.
    Alcabitius,
    /// Equal houses with the MC on cusp 10.
    EqualMidheaven,
    /// Porphyry with a sinusoidal spread of the quadrant excess.
    PorphyryNeo,
    /// Each house is one sign, starting at 0° of the Ascendant's sign.
    WholeSign,
    /// Cusps fixed at 0° of each sign.
    Null,
    Gauquelin,
    Horizontal,
    Krusinski,
}

/// Every selector, implemented ones first.
pub const ALL_HOUSE_SYSTEMS: [HouseSystem; 17] = [
    HouseSystem::Placidus,
    HouseSystem::Koch,
    HouseSystem::Equal,
    HouseSystem::Campanus,
    HouseSystem::Meridian,
    HouseSystem::Regiomontanus,
    HouseSystem::Porphyry,
    HouseSystem::Morinus,
    HouseSystem::Topocentric,
    HouseSystem::Alcabitius,
    HouseSystem::EqualMidheaven,
    HouseSystem::PorphyryNeo,
    HouseSystem::WholeSign,
    HouseSystem::Null,
    HouseSystem::Gauquelin,
    HouseSystem::Horizontal,
    HouseSystem::Krusinski,
];

impl HouseSystem {
    pub const fn all() -> &'static [HouseSystem] {
        &ALL_HOUSE_SYSTEMS
    }

    /// Lower-case identifier used in configuration files and the CLI.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Placidus => "placidus",
            Self::Koch => "koch",
            Self::Equal => "equal",
            Self::Campanus => "campanus",
            Self::Meridian => "meridian",
            Self::Regiomontanus => "regiomontanus",
            Self::Porphyry => "porphyry",
            Self::Morinus => "morinus",
            Self::Topocentric => "topocentric",
            Self::Alcabitius => "alcabitius",
            Self::EqualMidheaven => "equal_mc",
            Self::PorphyryNeo => "porphyry_neo",
            Self::WholeSign => "whole_sign",
            Self::Null => "null",
            Self::Gauquelin => "gauquelin",
            Self::Horizontal => "horizontal",
            Self::Krusinski => "krusinski",
        }
    }

    /// Parse an identifier as produced by [`HouseSystem::name`]; case and
    /// `-`/`_` are not significant.
    pub fn from_name(name: &str) -> Option<Self> {
        let key = name.trim().to_ascii_lowercase().replace('-', "_");
        ALL_HOUSE_SYSTEMS.into_iter().find(|s| s.name() == key)
    }

    /// Whether a cusp algorithm exists for this selector.
    pub const fn is_implemented(self) -> bool {
        !matches!(self, Self::Gauquelin | Self::Horizontal | Self::Krusinski)
    }

    /// Semi-arc systems whose construction degenerates inside the polar
    /// circles.
    pub const fn latitude_dependent(self) -> bool {
        matches!(
            self,
            Self::Placidus | Self::Koch | Self::Topocentric | Self::Alcabitius
        )
    }
}

/// Date, time and place of a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseInput {
    pub day: i32,
    pub month: i32,
    pub year: i32,
    /// Decimal hour, UT.
    pub hour: f64,
    /// Geographic latitude, degrees north positive.
    pub latitude: f64,
    /// Geographic longitude, degrees east positive.
    pub longitude: f64,
    /// Report angles and cusps in the sidereal zodiac.
    pub sidereal: bool,
}

/// Everything the cusp algorithms need, computed once per chart.
///
/// Angles are tropical. `zodiac_offset` is added to every reported
/// longitude by [`crate::compute_houses`]; it is 0 unless a sidereal
/// zodiac was requested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeVariables {
    /// Whole-day Julian index of the civil date.
    pub jd: f64,
    /// Julian centuries since 1900 Jan 0.5, including the hour.
    pub t: f64,
    /// Greenwich sidereal time, hours.
    pub sidereal_time: f64,
    /// Right ascension of the meridian, radians.
    pub ramc: f64,
    /// Obliquity of the ecliptic, radians.
    pub obliquity: f64,
    /// Geographic latitude, radians.
    pub latitude: f64,
    pub mc: f64,
    pub asc: f64,
    pub vertex: f64,
    pub east_point: f64,
    /// Degrees added to tropical longitudes.
    pub zodiac_offset: f64,
}

/// Angles and cusps of one chart, in degrees of the chosen zodiac.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub jd: f64,
    /// Greenwich sidereal time, hours.
    pub sidereal_time: f64,
    /// Right ascension of the meridian, degrees.
    pub ramc: f64,
    /// Linear 1900-epoch mean obliquity the cusps were computed with,
    /// degrees. Not the true obliquity used for body positions.
    pub house_obliquity: f64,
    pub mc: f64,
    pub asc: f64,
    pub vertex: f64,
    pub east_point: f64,
    /// Cusps 1 to 12.
    pub cusps: [f64; 12],
}

/// Result of a house computation together with its diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseOutcome {
    pub geometry: ChartGeometry,
    /// System actually used.
    pub system: HouseSystem,
    /// The requested selector when it was replaced by Placidus.
    pub fallback: Option<HouseSystem>,
    /// Latitude inside a polar circle for a semi-arc system; cusps were
    /// computed with clamped arguments.
    pub polar: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for system in HouseSystem::all() {
            assert_eq!(HouseSystem::from_name(system.name()), Some(*system));
        }
        assert_eq!(HouseSystem::from_name("Whole-Sign"), Some(HouseSystem::WholeSign));
        assert_eq!(HouseSystem::from_name("vedic"), None);
    }

    #[test]
    fn unimplemented_selectors() {
        let missing: Vec<_> = HouseSystem::all()
            .iter()
            .filter(|s| !s.is_implemented())
            .collect();
        assert_eq!(
            missing,
            [&HouseSystem::Gauquelin, &HouseSystem::Horizontal, &HouseSystem::Krusinski]
        );
    }

    #[test]
    fn semi_arc_systems_are_latitude_dependent() {
        assert!(HouseSystem::Placidus.latitude_dependent());
        assert!(HouseSystem::Alcabitius.latitude_dependent());
        assert!(!HouseSystem::Equal.latitude_dependent());
        assert!(!HouseSystem::Campanus.latitude_dependent());
    }
}
