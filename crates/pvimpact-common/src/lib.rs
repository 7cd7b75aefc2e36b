//! pvimpact-common — Shared error and conversion-factor types used across all pvimpact crates.

pub mod error;
pub mod factors;

// Re-export commonly used types
pub use error::{ImpactError, Result};
pub use factors::ConversionFactors;
