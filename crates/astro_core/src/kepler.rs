//! Kepler's equation.

use crate::error::CoreError;

/// Upper bound on Newton steps before the solve is declared failed.
pub const KEPLER_MAX_ITERATIONS: u32 = 100;

/// Tolerance used by the planetary solvers, degrees (≈ 0.001″).
pub const KEPLER_TOLERANCE_DEG: f64 = 0.000_000_3;

/// Solve `M = E − e·sin E` for the eccentric anomaly, returned in radians.
///
/// Newton iteration seeded at `E₀ = M`, stopping once the correction is
/// below `tolerance_deg`.
pub fn solve_kepler(
    mean_anomaly_deg: f64,
    eccentricity: f64,
    tolerance_deg: f64,
) -> Result<f64, CoreError> {
    let m = mean_anomaly_deg.to_radians();
    let tolerance = tolerance_deg.to_radians();
    let mut e_anom = m;
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let delta =
            (m + eccentricity * e_anom.sin() - e_anom) / (1.0 - eccentricity * e_anom.cos());
        e_anom += delta;
        if delta.abs() < tolerance {
            return Ok(e_anom);
        }
    }
    Err(CoreError::KeplerNoConvergence {
        mean_anomaly_deg,
        eccentricity,
        iterations: KEPLER_MAX_ITERATIONS,
    })
}
