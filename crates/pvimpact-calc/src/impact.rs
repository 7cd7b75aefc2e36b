//! Annual environmental benefit of a PV installation.
//!
//! For capacity c (kW), service life y (years) and factors
//! (yield, grid, embodied, coal):
//!
//!   annual_power     = c * yield
//!   co2_reduction    = annual_power * grid - c * embodied / y
//!   coal_replacement = annual_power * 1000 * coal / 1000
//!
//! The embodied-carbon term spreads the installation's lifecycle emissions
//! evenly over its service life. Coal is kg/kWh, so MWh * 1000 gives kWh and
//! the final / 1000 converts kg back to tonnes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use pvimpact_common::{ConversionFactors, ImpactError, Result};
use crate::rounding::round_to;

/// Reported decimal places for every figure.
pub const REPORT_DECIMALS: u32 = 2;

/// Environmental benefit figures, rounded for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactReport {
    /// Annual generation (MWh/year)
    pub annual_power: f64,
    /// Annual CO2 avoided, net of amortized embodied carbon (t/year)
    pub co2_reduction: f64,
    /// Annual standard coal displaced (t/year)
    pub coal_replacement: f64,
}

/// Compute the impact report using the default conversion factors.
pub fn calculate_env_impact(pv_cap: f64, years: u64) -> Result<ImpactReport> {
    calculate_with(&ConversionFactors::default(), pv_cap, years)
}

/// Compute the impact report for `pv_cap` kW over `years` years.
pub fn calculate_with(
    factors: &ConversionFactors,
    pv_cap: f64,
    years: u64,
) -> Result<ImpactReport> {
    if !pv_cap.is_finite() {
        return Err(ImpactError::NonFiniteCapacity(pv_cap));
    }
    if pv_cap <= 0.0 {
        return Err(ImpactError::NonPositiveCapacity(pv_cap));
    }
    if years == 0 {
        return Err(ImpactError::ZeroServiceLife);
    }

    let annual_power = pv_cap * factors.annual_yield_mwh_per_kw;
    let amortized_embodied = pv_cap * factors.embodied_carbon_t_per_kw / years as f64;
    let co2_reduction = annual_power * factors.grid_emission_t_per_mwh - amortized_embodied;
    let coal_replacement = (annual_power * 1000.0 * factors.coal_kg_per_kwh) / 1000.0;

    let report = ImpactReport {
        annual_power:     finite("annual_power", round_to(annual_power, REPORT_DECIMALS))?,
        co2_reduction:    finite("co2_reduction", round_to(co2_reduction, REPORT_DECIMALS))?,
        coal_replacement: finite("coal_replacement", round_to(coal_replacement, REPORT_DECIMALS))?,
    };

    debug!(
        pv_cap,
        years,
        annual_power = report.annual_power,
        co2_reduction = report.co2_reduction,
        coal_replacement = report.coal_replacement,
        "Computed PV impact"
    );

    Ok(report)
}

fn finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ImpactError::ResultOutOfRange(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_installation() {
        // 100 kW over 25 years: 120 MWh, 66.0 - 2.2 t CO2, 36 t coal
        let r = calculate_env_impact(100.0, 25).unwrap();
        assert_eq!(r.annual_power, 120.0);
        assert_eq!(r.co2_reduction, 63.8);
        assert_eq!(r.coal_replacement, 36.0);
    }

    #[test]
    fn test_fractional_capacity() {
        // 5.5 kW over 20 years: 6.6 MWh, 3.63 - 0.15125 t CO2, 1.98 t coal
        let r = calculate_env_impact(5.5, 20).unwrap();
        assert_eq!(r.annual_power, 6.6);
        assert_eq!(r.co2_reduction, 3.48);
        assert_eq!(r.coal_replacement, 1.98);
    }

    #[test]
    fn test_single_year_life() {
        // Whole embodied carbon charged in one year: 10*1.2*0.55 - 10*0.55 = 1.1
        let r = calculate_env_impact(10.0, 1).unwrap();
        assert_eq!(r.annual_power, 12.0);
        assert_eq!(r.co2_reduction, 1.1);
        assert_eq!(r.coal_replacement, 3.6);
    }

    #[test]
    fn test_annual_power_proportional_to_capacity() {
        for cap in [1.0, 2.5, 40.0, 250.0, 1000.0] {
            let r = calculate_env_impact(cap, 25).unwrap();
            assert!((r.annual_power - cap * 1.2).abs() < 0.005,
                "cap {} gave annual_power {}", cap, r.annual_power);
            assert!((r.coal_replacement - r.annual_power * 0.3).abs() < 0.01,
                "cap {} gave coal {} for power {}", cap, r.coal_replacement, r.annual_power);
        }
    }

    #[test]
    fn test_co2_non_decreasing_in_service_life() {
        for cap in [0.5, 12.0, 100.0, 3200.0] {
            let mut prev = f64::NEG_INFINITY;
            for years in 1..=60 {
                let r = calculate_env_impact(cap, years).unwrap();
                assert!(r.co2_reduction >= prev,
                    "cap {}: co2 dropped from {} to {} at {} years", cap, prev, r.co2_reduction, years);
                prev = r.co2_reduction;
            }
        }
    }

    #[test]
    fn test_outputs_have_two_decimals() {
        let r = calculate_env_impact(7.345, 13).unwrap();
        for v in [r.annual_power, r.co2_reduction, r.coal_replacement] {
            let scaled = v * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-6, "{} has more than 2 decimals", v);
        }
    }

    #[test]
    fn test_values_just_below_half_cent_round_down() {
        // 0.66 - 0.055 and 3.366 - 0.561 land a hair under the half-cent
        let r = calculate_env_impact(1.0, 10).unwrap();
        assert_eq!(r.co2_reduction, 0.6);
        let r = calculate_env_impact(5.1, 5).unwrap();
        assert_eq!(r.annual_power, 6.12);
        assert_eq!(r.co2_reduction, 2.8);
        assert_eq!(r.coal_replacement, 1.84);
    }

    #[test]
    fn test_very_long_service_life() {
        // Embodied term vanishes, leaving the full grid offset
        let r = calculate_env_impact(100.0, 5_000_000_000).unwrap();
        assert_eq!(r.co2_reduction, 66.0);
        let r = calculate_env_impact(100.0, u64::MAX).unwrap();
        assert_eq!(r.co2_reduction, 66.0);
    }

    #[test]
    fn test_zero_years_is_error() {
        assert_eq!(calculate_env_impact(100.0, 0), Err(ImpactError::ZeroServiceLife));
    }

    #[test]
    fn test_non_positive_capacity_is_error() {
        assert_eq!(calculate_env_impact(0.0, 25), Err(ImpactError::NonPositiveCapacity(0.0)));
        assert_eq!(calculate_env_impact(-3.0, 25), Err(ImpactError::NonPositiveCapacity(-3.0)));
    }

    #[test]
    fn test_non_finite_capacity_is_error() {
        assert!(matches!(
            calculate_env_impact(f64::NAN, 25),
            Err(ImpactError::NonFiniteCapacity(_))
        ));
        assert!(matches!(
            calculate_env_impact(f64::INFINITY, 25),
            Err(ImpactError::NonFiniteCapacity(_))
        ));
    }

    #[test]
    fn test_overflowing_capacity_is_error() {
        // 1.2 * MAX overflows to infinity
        assert_eq!(
            calculate_env_impact(f64::MAX, 25),
            Err(ImpactError::ResultOutOfRange("annual_power"))
        );
    }

    #[test]
    fn test_custom_factors() {
        let factors = ConversionFactors {
            annual_yield_mwh_per_kw: 1.5,
            grid_emission_t_per_mwh: 0.8,
            embodied_carbon_t_per_kw: 1.0,
            coal_kg_per_kwh: 0.4,
        };
        // 10 kW: 15 MWh, 15*0.8 - 10/10 = 11 t, 15*0.4 = 6 t
        let r = calculate_with(&factors, 10.0, 10).unwrap();
        assert_eq!(r.annual_power, 15.0);
        assert_eq!(r.co2_reduction, 11.0);
        assert_eq!(r.coal_replacement, 6.0);
    }

    #[test]
    fn test_report_serializes_with_wire_names() {
        let r = calculate_env_impact(100.0, 25).unwrap();
        let json = serde_json::to_value(r).unwrap();
        assert_eq!(json["annual_power"], 120.0);
        assert_eq!(json["co2_reduction"], 63.8);
        assert_eq!(json["coal_replacement"], 36.0);
    }
}
