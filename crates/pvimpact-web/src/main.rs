//! pvimpact web server
//!
//! Run with: cargo run -p pvimpact-web

use tracing::info;
use tracing_subscriber::EnvFilter;

use pvimpact_web::{config::Config, router::build_router, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pvimpact=debug,info")),
        )
        .init();

    info!("Starting pvimpact server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = Config::load()?;
    info!(
        "Conversion factors: yield {} MWh/kW, grid {} t/MWh, embodied {} t/kW, coal {} kg/kWh",
        config.factors.annual_yield_mwh_per_kw,
        config.factors.grid_emission_t_per_mwh,
        config.factors.embodied_carbon_t_per_kw,
        config.factors.coal_kg_per_kwh,
    );

    let app = build_router(AppState::new(config.factors));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
