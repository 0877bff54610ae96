//! Angular relationships between pairs of bodies.

use astro_config::OrbsConfig;
use astro_core::{Body, MAX_BODIES, Position};
use astro_frames::{diff360, signum0};

/// Aspect kinds, in order of their exact angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectKind {
    Conjunction,
    SemiSextile,
    Sextile,
    Square,
    Trine,
    Quincunx,
    Opposition,
}

pub const ALL_ASPECTS: [AspectKind; 7] = [
    AspectKind::Conjunction,
    AspectKind::SemiSextile,
    AspectKind::Sextile,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Quincunx,
    AspectKind::Opposition,
];

impl AspectKind {
    /// Exact separation, degrees.
    pub const fn angle(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::SemiSextile => 30.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Quincunx => 150.0,
            Self::Opposition => 180.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::SemiSextile => "semi_sextile",
            Self::Sextile => "sextile",
            Self::Square => "square",
            Self::Trine => "trine",
            Self::Quincunx => "quincunx",
            Self::Opposition => "opposition",
        }
    }

    /// Configured orb for this kind.
    pub fn orb(self, orbs: &OrbsConfig) -> f64 {
        match self {
            Self::Conjunction => orbs.conjunction,
            Self::SemiSextile => orbs.semi_sextile,
            Self::Sextile => orbs.sextile,
            Self::Square => orbs.square,
            Self::Trine => orbs.trine,
            Self::Quincunx => orbs.quincunx,
            Self::Opposition => orbs.opposition,
        }
    }
}

/// One aspect between two bodies; `first` precedes `second` in index
/// order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aspect {
    pub first: Body,
    pub second: Body,
    pub kind: AspectKind,
    /// Unsigned separation of the longitudes, degrees in [0, 180].
    pub separation: f64,
    /// Distance from the exact angle, degrees.
    pub orb: f64,
    /// The orb is shrinking at the current speeds.
    pub applying: bool,
}

/// Tightest aspect formed by two positions, if any is within its orb.
///
/// Returns the kind, the orb and whether the aspect is applying. A
/// configured orb of 0 never matches.
pub fn aspect_between(
    a: &Position,
    b: &Position,
    orbs: &OrbsConfig,
) -> Option<(AspectKind, f64, bool)> {
    let signed = diff360(a.longitude, b.longitude);
    let separation = signed.abs();

    let (kind, deviation) = ALL_ASPECTS
        .into_iter()
        .filter_map(|kind| {
            let limit = kind.orb(orbs);
            let deviation = (separation - kind.angle()).abs();
            (limit > 0.0 && deviation <= limit).then_some((kind, deviation))
        })
        .min_by(|x, y| x.1.total_cmp(&y.1))?;

    let separation_rate = signum0(signed) * (a.speed_longitude - b.speed_longitude);
    let orb_rate = signum0(separation - kind.angle()) * separation_rate;
    Some((kind, deviation, orb_rate < 0.0))
}

/// Every aspect among the computed bodies, tightest first.
pub fn find_aspects(positions: &[Option<Position>; MAX_BODIES], orbs: &OrbsConfig) -> Vec<Aspect> {
    let computed: Vec<(Body, &Position)> = Body::ALL
        .into_iter()
        .filter_map(|b| positions[b.index()].as_ref().map(|p| (b, p)))
        .collect();

    let mut aspects = Vec::new();
    for (i, &(first, a)) in computed.iter().enumerate() {
        for &(second, b) in &computed[i + 1..] {
            if let Some((kind, orb, applying)) = aspect_between(a, b, orbs) {
                aspects.push(Aspect {
                    first,
                    second,
                    kind,
                    separation: diff360(a.longitude, b.longitude).abs(),
                    orb,
                    applying,
                });
            }
        }
    }
    aspects.sort_by(|x, y| {
        x.orb
            .total_cmp(&y.orb)
            .then(x.first.index().cmp(&y.first.index()))
            .then(x.second.index().cmp(&y.second.index()))
    });
    aspects
}
