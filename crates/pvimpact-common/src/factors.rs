//! Linear conversion factors for PV environmental-impact figures.
//!
//! Defaults are industry rule-of-thumb values. Deployments can override any
//! of them from the `[factors]` table of the service config.

use serde::{Deserialize, Serialize};

use crate::error::{ImpactError, Result};

/// Conversion factors applied by the impact calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionFactors {
    /// Energy generated per kW of installed capacity per year (MWh)
    #[serde(default = "default_annual_yield")]
    pub annual_yield_mwh_per_kw: f64,

    /// CO2 emitted by the grid per MWh, avoided by PV generation (t)
    #[serde(default = "default_grid_emission")]
    pub grid_emission_t_per_mwh: f64,

    /// Lifecycle CO2 per kW of capacity, amortized over the service life (t)
    #[serde(default = "default_embodied_carbon")]
    pub embodied_carbon_t_per_kw: f64,

    /// Standard coal burned per kWh of thermal generation (kg)
    #[serde(default = "default_coal_per_kwh")]
    pub coal_kg_per_kwh: f64,
}

fn default_annual_yield()    -> f64 { 1.2 }
fn default_grid_emission()   -> f64 { 0.55 }
fn default_embodied_carbon() -> f64 { 0.55 }
fn default_coal_per_kwh()    -> f64 { 0.3 }

impl Default for ConversionFactors {
    fn default() -> Self {
        Self {
            annual_yield_mwh_per_kw:  default_annual_yield(),
            grid_emission_t_per_mwh:  default_grid_emission(),
            embodied_carbon_t_per_kw: default_embodied_carbon(),
            coal_kg_per_kwh:          default_coal_per_kwh(),
        }
    }
}

impl ConversionFactors {
    /// Check every factor is finite and non-negative, and the yield is positive.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("annual_yield_mwh_per_kw",  self.annual_yield_mwh_per_kw),
            ("grid_emission_t_per_mwh",  self.grid_emission_t_per_mwh),
            ("embodied_carbon_t_per_kw", self.embodied_carbon_t_per_kw),
            ("coal_kg_per_kwh",          self.coal_kg_per_kwh),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ImpactError::InvalidFactor {
                    name,
                    reason: format!("{value} is not finite"),
                });
            }
            if value < 0.0 {
                return Err(ImpactError::InvalidFactor {
                    name,
                    reason: format!("{value} is negative"),
                });
            }
        }

        if self.annual_yield_mwh_per_kw == 0.0 {
            return Err(ImpactError::InvalidFactor {
                name: "annual_yield_mwh_per_kw",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
