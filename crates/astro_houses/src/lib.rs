//! House engine for the astro ephemeris.
//!
//! This crate provides:
//! - The time-variables stage: sidereal time, RAMC, obliquity, MC,
//!   Ascendant, Vertex and East Point ([`compute_time_variables`])
//! - Fourteen house-cusp algorithms behind one dispatch
//!   ([`compute_houses`]), with a Placidus fallback for unimplemented
//!   selectors and a polar-latitude diagnostic
//! - The sidereal-zodiac offset

pub mod angles;
pub mod cusps;
pub mod types;

pub use angles::{
    AXIAL_TILT_DEG, POLAR_LIMIT_DEG, ascendant, compute_time_variables, east_point,
    house_obliquity_deg, is_polar, midheaven, sidereal_offset_deg, vertex,
};
pub use cusps::{CuspFn, compute_houses, cusp_fn};
pub use types::{
    ALL_HOUSE_SYSTEMS, ChartGeometry, HouseInput, HouseOutcome, HouseSystem, TimeVariables,
};

/// Time variables and cusps in one call.
pub fn houses_for(system: HouseSystem, input: &HouseInput) -> HouseOutcome {
    compute_houses(system, &compute_time_variables(input))
}
