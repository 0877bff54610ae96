//! Analytic ephemeris for the Sun, Moon, planets and lunar points.
//!
//! Positions are computed from first principles: polynomial orbital
//! elements with periodic perturbation series for the inner planets,
//! mean elements with secular precession for the outer planets and
//! Chiron, and a trigonometric lunar theory. A [`Session`] owns the
//! element cache and answers [`Session::calc`] queries.
//!
//! ```no_run
//! use astro_core::{Body, CalcFlags, Session};
//!
//! let mut session = Session::new();
//! let sun = session.calc(Body::Sun, 2_451_545.0, CalcFlags::default())?;
//! println!("Sun at {:.4}°", sun.longitude);
//! # Ok::<(), astro_core::CoreError>(())
//! ```

pub mod elements;
pub mod error;
pub mod geocentric;
pub mod heliocentric;
pub mod kepler;
pub mod moon;
pub mod moon_data;
pub mod outer;
pub mod perturbation;
pub mod position;
pub mod session;

pub use elements::{ElementSet, ElementTable, OrbitalElements, element_table};
pub use error::CoreError;
pub use geocentric::to_geocentric;
pub use heliocentric::{HelioState, OrbitGeometry, heliocentric_position, orbit_state};
pub use kepler::solve_kepler;
pub use moon::{MoonState, lunar_position};
pub use position::Position;
pub use session::Session;

/// Number of addressable bodies.
pub const MAX_BODIES: usize = 14;

/// Bodies and computed points, in fixed index order.
///
/// `Sun` doubles as the Earth when the heliocentric flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    MeanNode,
    Lilith,
    Chiron,
    TrueNode,
}

impl Body {
    /// All bodies, in index order.
    pub const ALL: [Body; MAX_BODIES] = [
        Self::Sun,
        Self::Moon,
        Self::Mercury,
        Self::Venus,
        Self::Mars,
        Self::Jupiter,
        Self::Saturn,
        Self::Uranus,
        Self::Neptune,
        Self::Pluto,
        Self::MeanNode,
        Self::Lilith,
        Self::Chiron,
        Self::TrueNode,
    ];

    /// Fixed table index (0..[`MAX_BODIES`]).
    pub const fn index(self) -> usize {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Uranus => 7,
            Self::Neptune => 8,
            Self::Pluto => 9,
            Self::MeanNode => 10,
            Self::Lilith => 11,
            Self::Chiron => 12,
            Self::TrueNode => 13,
        }
    }

    /// Inverse of [`Body::index`].
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < MAX_BODIES {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Lower-case English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
            Self::Pluto => "pluto",
            Self::MeanNode => "mean_node",
            Self::Lilith => "lilith",
            Self::Chiron => "chiron",
            Self::TrueNode => "true_node",
        }
    }

    /// Parse a name as produced by [`Body::name`], case-insensitively.
    /// `"earth"` maps to [`Body::Sun`].
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        if lower == "earth" {
            return Some(Self::Sun);
        }
        Self::ALL.into_iter().find(|b| b.name() == lower)
    }

    /// Points computed from the lunar orbit rather than a physical body.
    pub const fn is_lunar_point(self) -> bool {
        matches!(self, Self::MeanNode | Self::Lilith | Self::TrueNode)
    }
}

/// Calculation options for [`Session::calc`].
///
/// The default is geocentric, apparent (aberration applied), with
/// nutation, and without an explicit lunar speed computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CalcFlags {
    /// Heliocentric instead of geocentric; `Body::Sun` then yields Earth.
    pub heliocentric: bool,
    /// True geometric position: skip annual aberration. Heliocentric
    /// output never carries it.
    pub true_position: bool,
    /// Mean equinox of date: skip nutation in longitude.
    pub no_nutation: bool,
    /// Difference the Moon over a short interval for its speed instead of
    /// reporting the mean motion.
    pub speed: bool,
}

impl CalcFlags {
    /// Annual aberration is an observer effect: geocentric apparent only.
    pub const fn applies_aberration(self) -> bool {
        !self.true_position && !self.heliocentric
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        for (i, body) in Body::ALL.iter().enumerate() {
            assert_eq!(body.index(), i);
            assert_eq!(Body::from_index(i), Some(*body));
        }
        assert_eq!(Body::from_index(MAX_BODIES), None);
    }

    #[test]
    fn names_parse_back() {
        for body in Body::ALL {
            assert_eq!(Body::from_name(body.name()), Some(body));
        }
        assert_eq!(Body::from_name(" Earth "), Some(Body::Sun));
        assert_eq!(Body::from_name("TRUE_NODE"), Some(Body::TrueNode));
        assert_eq!(Body::from_name("vulcan"), None);
    }

    #[test]
    fn fixed_indices() {
        assert_eq!(Body::Pluto.index(), 9);
        assert_eq!(Body::Chiron.index(), 12);
        assert_eq!(Body::TrueNode.index(), 13);
    }
}
