//! Shared application state for the web server.

use std::sync::Arc;

use pvimpact_common::ConversionFactors;

/// Shared state injected into every Axum handler.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Factors applied to every calculation; fixed for the process lifetime
    pub factors: ConversionFactors,
}

impl AppState {
    pub fn new(factors: ConversionFactors) -> Self {
        Self { factors }
    }
}

pub type SharedState = Arc<AppState>;
