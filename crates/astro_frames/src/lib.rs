//! Angle arithmetic and coordinate helpers for the astro ephemeris.
//!
//! This crate provides:
//! - Circle arithmetic in degrees (wrapping, signed differences)
//! - DMS and packed "degrees.minutes" conversions
//! - Polar/rectangular transforms with zero-angle guards
//! - IAU 1980 nutation (principal terms) and mean obliquity

pub mod angle;
pub mod dms;
pub mod nutation;
pub mod obliquity;
pub mod polar;

pub use angle::{diff360, min_dist, mod_tau, mod360, signum0, smod360, winkel};
pub use dms::{Dms, deg_to_dms, deg_to_packed, dms_to_deg, packed_to_deg, sign_dms};
pub use nutation::{NutationArguments, nutation};
pub use obliquity::{mean_obliquity_arcsec, mean_obliquity_deg, true_obliquity_deg};
pub use polar::{KLEIN, NEAR_ZERO, pol_to_rec, rec_to_pol, rec_to_sph, test_near_zero};
