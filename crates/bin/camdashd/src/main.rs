//! # camdashd
//!
//! Composition root that wires the HTTP adapter together and serves the
//! browser dashboard.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Construct the backend proxy client when proxying is enabled
//! - Build the axum router with the client settings and the asset directory
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the wiring layer. No domain logic belongs here.

mod config;

use anyhow::Context;
use camdash_adapter_http_axum::router;
use camdash_adapter_http_axum::state::AppState;
use camdash_adapter_http_axum::upstream::Upstream;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_new(&config.logging.filter)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Backend proxy
    let upstream = match config.upstream_url() {
        Some(url) => {
            tracing::info!(backend = url, "proxying backend endpoints");
            Some(Upstream::new(url, config.backend_timeout())?)
        }
        None => None,
    };

    // Dashboard assets
    let assets_dir = &config.dashboard.assets_dir;
    if !assets_dir.is_dir() {
        tracing::warn!(
            path = %assets_dir.display(),
            "dashboard assets directory not found; only API routes will be served"
        );
    }

    // HTTP
    let client_settings = config.client_settings();
    tracing::info!(
        api_base_url = %client_settings.api_base_url,
        refresh_interval_ms = client_settings.refresh_interval_ms,
        "dashboard settings"
    );
    let state = AppState::new(client_settings, upstream);
    let app = router::build(state, Some(assets_dir));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!("camdashd listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("camdashd stopped");
    Ok(())
}

/// Resolve on Ctrl-C, or on SIGTERM where available.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
