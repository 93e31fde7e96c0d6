//! # corrald — corral daemon
//!
//! Composition root that wires everything together and starts both servers.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Construct the in-memory pony store and the pony service
//! - Build the REST fixture router and the static asset router
//! - Bind both TCP listeners and serve each on its own task
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use corral_adapter_http_axum::state::AppState;
use corral_adapter_http_axum::{assets, router};
use corral_adapter_memory::InMemoryPonyRepository;
use corral_app::services::pony_service::PonyService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Store & services
    let pony_service = PonyService::new(InMemoryPonyRepository::new());

    // HTTP
    let api_app = router::build(AppState::new(pony_service));
    let assets_app = assets::build(&config.assets.root);

    let api_addr = config.api_addr();
    let api_listener = TcpListener::bind(&api_addr)
        .await
        .with_context(|| format!("failed to bind REST server to {api_addr}"))?;
    tracing::info!("starting REST server on {api_addr}");

    let assets_addr = config.assets_addr();
    let assets_listener = TcpListener::bind(&assets_addr)
        .await
        .with_context(|| format!("failed to bind asset server to {assets_addr}"))?;
    tracing::info!(
        root = %config.assets.root.display(),
        "serving tests at http://{assets_addr}/{}",
        assets::ENTRY_POINT
    );

    let api_task = tokio::spawn(async move {
        axum::serve(api_listener, api_app)
            .with_graceful_shutdown(shutdown_signal())
            .await
    });
    let assets_task = tokio::spawn(async move {
        axum::serve(assets_listener, assets_app)
            .with_graceful_shutdown(shutdown_signal())
            .await
    });

    let (api_result, assets_result) = tokio::try_join!(api_task, assets_task)?;
    api_result.context("REST server failed")?;
    assets_result.context("asset server failed")?;

    tracing::info!("servers stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "unable to listen for ctrl-c");
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
                tracing::error!(error = %err, "unable to listen for SIGTERM");
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
