//! Impact calculation endpoint.
//!
//! Front ends send form values verbatim, so both fields accept either a JSON
//! number or a numeric string.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use serde_json::Value;

use pvimpact_calc::{calculate_with, ImpactReport};
use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    /// PV capacity (kW)
    #[serde(default)]
    pub pv_cap: Option<Value>,
    /// Service life (years)
    #[serde(default)]
    pub years: Option<Value>,
}

/// POST /calculate
pub async fn calculate(
    State(state): State<SharedState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<ImpactReport>, ApiError> {
    let Json(req) = payload?;

    let pv_cap = coerce_capacity(req.pv_cap.as_ref())?;
    let years = coerce_years(req.years.as_ref())?;

    let report = calculate_with(&state.factors, pv_cap, years)?;
    Ok(Json(report))
}

/// Number as-is, or a float parsed from a (trimmed) string.
fn coerce_capacity(value: Option<&Value>) -> Result<f64, ApiError> {
    match value {
        None => Err(missing("pv_cap")),
        Some(Value::Number(n)) => n.as_f64()
            .ok_or_else(|| ApiError::BadRequest(format!("`pv_cap` is not representable: {n}"))),
        Some(Value::String(s)) => s.trim().parse::<f64>()
            .map_err(|_| ApiError::BadRequest(format!("`pv_cap` must be numeric, got {s:?}"))),
        Some(other) => Err(ApiError::BadRequest(format!(
            "`pv_cap` must be a number or numeric string, got {other}"
        ))),
    }
}

/// Integer as-is, float truncated toward zero, or an integer parsed from a
/// (trimmed) string. Zero passes through; the calculator rejects it.
fn coerce_years(value: Option<&Value>) -> Result<u64, ApiError> {
    match value {
        None => Err(missing("years")),
        Some(Value::Number(n)) => {
            if let Some(u) = n.as_u64() {
                return Ok(u);
            }
            if let Some(i) = n.as_i64() {
                return Err(negative(i));
            }
            let f = n.as_f64().unwrap_or(f64::NAN).trunc();
            if f < 0.0 {
                return Err(negative(f));
            }
            // `as` saturates, so floats past u64::MAX clamp to it
            Ok(f as u64)
        }
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            match (trimmed.parse::<u64>(), trimmed.parse::<i128>()) {
                (Ok(u), _) => Ok(u),
                (Err(_), Ok(i)) if i < 0 => Err(negative(i)),
                (Err(_), Ok(i)) => Err(ApiError::BadRequest(format!("`years` is too large: {i}"))),
                (Err(_), Err(_)) => Err(ApiError::BadRequest(format!(
                    "`years` must be an integer, got {s:?}"
                ))),
            }
        }
        Some(other) => Err(ApiError::BadRequest(format!(
            "`years` must be an integer or integer string, got {other}"
        ))),
    }
}

fn missing(field: &str) -> ApiError {
    ApiError::BadRequest(format!("missing field `{field}`"))
}

fn negative(years: impl std::fmt::Display) -> ApiError {
    ApiError::BadRequest(format!("`years` must not be negative, got {years}"))
}
