//! Decimal rounding for reported figures.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round `value` to `decimals` places.
///
/// Rounds the exact binary value of `value`, so 2.8049999999999997 stays
/// below the half and gives 2.8. True ties go to the even digit.
/// Values outside the decimal range are returned unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(decimals, RoundingStrategy::MidpointNearestEven))
        // Parsing the decimal text gives the nearest f64 to the rounded figure
        .and_then(|d| d.to_string().parse::<f64>().ok())
        .unwrap_or(value)
}
