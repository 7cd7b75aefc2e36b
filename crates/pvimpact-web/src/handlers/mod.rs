//! HTTP handlers for all routes.

pub mod calculate;
pub mod health;
