//! Error types for ephemeris computation.

use thiserror::Error;

use crate::Body;

/// Failures of a single body's position computation.
///
/// Numeric domain problems (out-of-range `acos` arguments, zero
/// denominators) are never reported here: they are clamped or
/// epsilon-substituted where they occur.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CoreError {
    /// No heliocentric solver is registered for this body.
    #[error("no heliocentric solver for {0:?}")]
    UnsupportedBody(Body),
    /// Newton iteration on Kepler's equation hit the iteration bound.
    #[error(
        "Kepler iteration did not converge in {iterations} steps (M = {mean_anomaly_deg}°, e = {eccentricity})"
    )]
    KeplerNoConvergence {
        mean_anomaly_deg: f64,
        eccentricity: f64,
        iterations: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_body() {
        let e = CoreError::UnsupportedBody(Body::MeanNode);
        assert_eq!(e.to_string(), "no heliocentric solver for MeanNode");
    }

    #[test]
    fn display_kepler() {
        let e = CoreError::KeplerNoConvergence {
            mean_anomaly_deg: 1.5,
            eccentricity: 0.99,
            iterations: 100,
        };
        assert!(e.to_string().contains("100 steps"));
    }
}
