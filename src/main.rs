//! campus-match — Binary Entrypoint
//! Boots the Axum HTTP server over the pure scoring core: routes, default
//! preferences, and middleware.
//!
//! See `README.md` for quickstart.

use std::net::SocketAddr;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use campus_match::api::{self, AppState};
use campus_match::config;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("campus_match=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op elsewhere. Enables CAMPUS_MATCH_CONFIG_PATH
    // and PORT overrides before anything reads them.
    let _ = dotenvy::dotenv();

    init_tracing();

    let defaults = config::load_default_preferences()?;
    let router = api::router(AppState::new(defaults));

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "campus-match listening");
    axum::serve(listener, router).await?;

    Ok(())
}
