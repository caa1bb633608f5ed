mod agent;
mod config;
mod errors;
mod models;
mod routes;
mod service;
#[cfg(test)]
mod test_support;

use std::sync::Arc;

use tracing::{info, warn};

use crate::agent::GroqAgentService;
use crate::config::Config;
use crate::routes::build_router;
use crate::service::relay_service::RelayService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    // Initialise tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "groq_relay=debug,tower_http=debug".into()),
        )
        .init();

    // ── Configuration ─────────────────────────────────────────────────────────
    let config = Config::from_env();
    if config.groq_api_key.is_none() {
        // Not fatal: each chat request reports the missing key instead.
        warn!("GROQ_API_KEY is not set; /api/chat will answer 500 until it is");
    }
    match config.upstream_timeout {
        Some(timeout) => info!("Upstream timeout set to {}s", timeout.as_secs()),
        None => info!("No upstream timeout configured"),
    }

    // ── Dependency wiring ─────────────────────────────────────────────────────
    let agent = GroqAgentService::new(&config)?;
    info!("Relaying to {} with model {}", agent.api_url(), config.model);
    let port = config.port;
    let relay_service = RelayService::new(Arc::new(config), agent);

    // ── Router ────────────────────────────────────────────────────────────────
    let app = build_router(relay_service);

    // ── Listen ────────────────────────────────────────────────────────────────
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {port}");

    axum::serve(listener, app).await?;
    Ok(())
}
