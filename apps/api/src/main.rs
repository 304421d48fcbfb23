mod catalog;
mod config;
mod contact;
mod errors;
mod routes;
mod session;
mod state;
mod theme;
mod views;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::loader::load_catalog;
use crate::config::Config;
use crate::contact::delivery::SimulatedSink;
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;

/// Upper bound on how often expired sessions are swept.
const MAX_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Content catalog is read-only for the life of the process
    let catalog = Arc::new(load_catalog(config.catalog_path.as_deref())?);

    // Visitor sessions, swept in the background
    let sessions = SessionStore::new(config.session_ttl);
    spawn_session_sweeper(sessions.clone());
    info!("Session store ready (ttl: {:?})", config.session_ttl);

    let message_sink = Arc::new(SimulatedSink::new(config.contact_delay));
    info!("Contact delivery: simulated ({:?} delay)", config.contact_delay);

    let state = AppState {
        config: config.clone(),
        catalog,
        sessions,
        message_sink,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the front-end host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn spawn_session_sweeper(sessions: SessionStore) {
    let period = sessions.ttl().min(MAX_SWEEP_INTERVAL).max(Duration::from_secs(1));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            sessions.purge_expired().await;
        }
    });
}
