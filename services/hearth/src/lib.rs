//! Hearth - Household bills dashboard service
//!
//! Serves the bills dashboard and the JSON API used by the Leptos frontend.

pub mod bill;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod state;

pub use config::{load_config, Config};
pub use error::{HearthError, Result};

use std::net::SocketAddr;

use tokio_util::sync::CancellationToken;

use crate::bill::Bill;

/// Run the hearth service until Ctrl-C is received
pub async fn run(config: Config) -> Result<()> {
    let cancel = CancellationToken::new();

    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            return;
        }
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    serve(config, cancel).await
}

/// Serve the dashboard until `cancel` fires
pub async fn serve(config: Config, cancel: CancellationToken) -> Result<()> {
    config.validate()?;

    let bills: Vec<Bill> = config.bills.into_iter().map(Bill::from).collect();
    tracing::debug!("Loaded {} bills for {}", bills.len(), config.household.name);
    let state = state::new_state_handle(config.household, bills);

    let mut router = dashboard::build_router(state);
    if config.server.permissive_cors {
        tracing::debug!("Permissive CORS enabled");
        router = dashboard::with_permissive_cors(router);
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        HearthError::Dashboard(format!(
            "Failed to bind dashboard to port {}: {}",
            config.server.port, e
        ))
    })?;
    tracing::info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await?;

    tracing::info!("Dashboard stopped");
    Ok(())
}
