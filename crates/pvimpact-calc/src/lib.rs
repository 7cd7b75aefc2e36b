//! pvimpact-calc — Environmental impact calculator for PV installations.
//! Pure functions of capacity and service life; no I/O.

pub mod impact;
pub mod rounding;

pub use impact::{calculate_env_impact, calculate_with, ImpactReport};
