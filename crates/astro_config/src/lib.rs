//! Chart settings loaded from TOML.
//!
//! ```toml
//! house_system = "koch"
//! bodies = ["sun", "moon", "mars", "true_node"]
//! sidereal = false
//!
//! [flags]
//! heliocentric = false
//! true_position = false
//! nutation = true
//! speed = true
//!
//! [location]
//! name = "Berlin"
//! latitude = 52.52
//! longitude = 13.40
//!
//! [orbs]
//! conjunction = 10.0
//! quincunx = 0.0   # not reported
//! ```
//!
//! Every field is optional; missing ones take the [`Default`] values.
//! Names are validated lazily by the typed accessors.

use std::path::Path;

use astro_core::{Body, CalcFlags, MAX_BODIES};
use astro_houses::HouseSystem;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or interpreting chart settings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unknown house system: {0:?}")]
    UnknownHouseSystem(String),
    #[error("unknown body: {0:?}")]
    UnknownBody(String),
    #[error("invalid location: latitude {latitude}, longitude {longitude}")]
    InvalidLocation { latitude: f64, longitude: f64 },
    #[error("invalid orb for {aspect}: {orb} (must be within 0 to 15 degrees)")]
    InvalidOrb { aspect: &'static str, orb: f64 },
}

/// Largest orb accepted for any aspect, degrees.
pub const MAX_ORB_DEG: f64 = 15.0;

/// Calculation flags as written in the file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlagsConfig {
    pub heliocentric: bool,
    pub true_position: bool,
    pub nutation: bool,
    pub speed: bool,
}

impl Default for FlagsConfig {
    fn default() -> Self {
        Self {
            heliocentric: false,
            true_position: false,
            nutation: true,
            speed: true,
        }
    }
}

/// Allowed deviation from the exact angle of each aspect, degrees.
///
/// An orb of 0 switches the aspect off.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrbsConfig {
    pub conjunction: f64,
    pub semi_sextile: f64,
    pub sextile: f64,
    pub square: f64,
    pub trine: f64,
    pub quincunx: f64,
    pub opposition: f64,
}

impl Default for OrbsConfig {
    fn default() -> Self {
        Self {
            conjunction: 8.0,
            semi_sextile: 2.0,
            sextile: 6.0,
            square: 7.0,
            trine: 8.0,
            quincunx: 3.0,
            opposition: 8.0,
        }
    }
}

impl OrbsConfig {
    /// The same orb for every aspect.
    pub fn uniform(orb: f64) -> Self {
        Self {
            conjunction: orb,
            semi_sextile: orb,
            sextile: orb,
            square: orb,
            trine: orb,
            quincunx: orb,
            opposition: orb,
        }
    }

    /// `(name, orb)` pairs in order of the exact angle.
    pub fn entries(&self) -> [(&'static str, f64); 7] {
        [
            ("conjunction", self.conjunction),
            ("semi_sextile", self.semi_sextile),
            ("sextile", self.sextile),
            ("square", self.square),
            ("trine", self.trine),
            ("quincunx", self.quincunx),
            ("opposition", self.opposition),
        ]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (aspect, orb) in self.entries() {
            if !(0.0..=MAX_ORB_DEG).contains(&orb) {
                return Err(ConfigError::InvalidOrb { aspect, orb });
            }
        }
        Ok(())
    }
}

/// A named place.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LocationConfig {
    #[serde(default)]
    pub name: Option<String>,
    /// Degrees, north positive.
    pub latitude: f64,
    /// Degrees, east positive.
    pub longitude: f64,
}

impl LocationConfig {
    /// Check the coordinate ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_location(self.latitude, self.longitude)
    }
}

/// Reject coordinates outside [-90, 90] × [-180, 180] or non-finite.
pub fn validate_location(latitude: f64, longitude: f64) -> Result<(), ConfigError> {
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(ConfigError::InvalidLocation {
            latitude,
            longitude,
        });
    }
    Ok(())
}

/// Chart settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub house_system: String,
    pub bodies: Vec<String>,
    pub flags: FlagsConfig,
    /// Report longitudes in the sidereal zodiac.
    pub sidereal: bool,
    pub location: Option<LocationConfig>,
    pub orbs: OrbsConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            house_system: HouseSystem::Placidus.name().to_string(),
            bodies: Body::ALL.iter().map(|b| b.name().to_string()).collect(),
            flags: FlagsConfig::default(),
            sidereal: false,
            location: None,
            orbs: OrbsConfig::default(),
        }
    }
}

impl ChartConfig {
    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse TOML text and validate every name and the location.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.house_system()?;
        self.bodies()?;
        self.orbs.validate()?;
        if let Some(location) = &self.location {
            location.validate()?;
        }
        Ok(())
    }

    pub fn house_system(&self) -> Result<HouseSystem, ConfigError> {
        HouseSystem::from_name(&self.house_system)
            .ok_or_else(|| ConfigError::UnknownHouseSystem(self.house_system.clone()))
    }

    /// Requested bodies in index order, without duplicates.
    pub fn bodies(&self) -> Result<Vec<Body>, ConfigError> {
        let mut wanted = [false; MAX_BODIES];
        for name in &self.bodies {
            let body = Body::from_name(name).ok_or_else(|| ConfigError::UnknownBody(name.clone()))?;
            wanted[body.index()] = true;
        }
        Ok(Body::ALL
            .into_iter()
            .filter(|b| wanted[b.index()])
            .collect())
    }

    pub fn calc_flags(&self) -> CalcFlags {
        CalcFlags {
            heliocentric: self.flags.heliocentric,
            true_position: self.flags.true_position,
            no_nutation: !self.flags.nutation,
            speed: self.flags.speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = ChartConfig::from_toml_str("").unwrap();
        assert_eq!(config, ChartConfig::default());
        assert_eq!(config.house_system().unwrap(), HouseSystem::Placidus);
        assert_eq!(config.bodies().unwrap().len(), MAX_BODIES);
        let flags = config.calc_flags();
        assert!(!flags.heliocentric && !flags.no_nutation && flags.speed);
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = ChartConfig::from_toml_str("house_system = \"vedic\"").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownHouseSystem(ref s) if s == "vedic"));

        let err = ChartConfig::from_toml_str("bodies = [\"sun\", \"vulcan\"]").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownBody(ref s) if s == "vulcan"));
    }

    #[test]
    fn bodies_are_sorted_and_deduplicated() {
        let config = ChartConfig {
            bodies: vec!["mars".into(), "Sun".into(), "earth".into(), "moon".into()],
            ..ChartConfig::default()
        };
        assert_eq!(config.bodies().unwrap(), vec![Body::Sun, Body::Moon, Body::Mars]);
    }

    #[test]
    fn location_bounds() {
        assert!(validate_location(90.0, -180.0).is_ok());
        assert!(matches!(
            validate_location(91.0, 0.0),
            Err(ConfigError::InvalidLocation { .. })
        ));
        assert!(validate_location(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn orbs_override_defaults() {
        let config = ChartConfig::from_toml_str("[orbs]\nconjunction = 10.0\nquincunx = 0.0\n").unwrap();
        assert_eq!(config.orbs.conjunction, 10.0);
        assert_eq!(config.orbs.quincunx, 0.0);
        assert_eq!(config.orbs.trine, OrbsConfig::default().trine);
    }

    #[test]
    fn orbs_out_of_range() {
        let err = ChartConfig::from_toml_str("[orbs]\nsquare = -1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOrb { aspect: "square", .. }));
        assert!(OrbsConfig::uniform(MAX_ORB_DEG + 0.5).validate().is_err());
        assert!(OrbsConfig::uniform(f64::NAN).validate().is_err());
        assert!(OrbsConfig::uniform(0.0).validate().is_ok());
    }

    #[test]
    fn malformed_toml() {
        assert!(matches!(
            ChartConfig::from_toml_str("house_system = ["),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            ChartConfig::from_toml_str("colour = \"red\""),
            Err(ConfigError::Toml(_))
        ));
    }
}
