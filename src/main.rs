//! Social Pulse — binary entrypoint.
//! Boots the Axum HTTP server around the query pipeline.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use social_pulse::api::{self, AppState};
use social_pulse::config::Settings;
use social_pulse::sentiment::LexiconScorer;
use social_pulse::twitter::TwitterClient;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("social_pulse=info,warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();
    init_tracing();

    let settings = Settings::load()?;
    let client = TwitterClient::new(&settings)?;
    let state = AppState::new(Arc::new(client), Arc::new(LexiconScorer::new()));
    let router = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr)
        .await
        .with_context(|| format!("binding {}", settings.bind_addr))?;
    tracing::info!(addr = %settings.bind_addr, "listening");
    axum::serve(listener, router)
        .await
        .context("serving http")?;
    Ok(())
}
