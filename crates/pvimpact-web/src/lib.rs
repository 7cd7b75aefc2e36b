//! pvimpact-web — HTTP front end for the PV impact calculator.
//! Exposes:
//!   - POST /calculate  capacity + service life → annual impact figures
//!   - GET  /health     liveness probe

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
