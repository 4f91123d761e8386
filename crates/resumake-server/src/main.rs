//! resumake server entry point.

mod config;
mod routes;
mod state;

use crate::config::ServerConfig;
use crate::state::AppState;
use anyhow::Context;
use resumake_llm::{GroqClient, ResumeGenerator};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Misconfiguration (missing credential, bad port) aborts here, before
    // the listener binds.
    let config = ServerConfig::from_env()?;
    let client = GroqClient::new(config.groq.clone())?;
    let state = AppState::new(ResumeGenerator::new(Arc::new(client)));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(%addr, model = %config.groq.model, "resumake server listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, routes::router(state)).await?;
    Ok(())
}
