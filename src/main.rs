//! ornament-relay server entry point.
//!
//! Starts the Axum HTTP server that serves the control page and relays
//! commands to polling devices.

use std::sync::Arc;

use ornament_relay::api;
use ornament_relay::api::page::render_control_page;
use ornament_relay::app_state::AppState;
use ornament_relay::config::RelayConfig;
use ornament_relay::domain::InMemoryMailbox;
use ornament_relay::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = RelayConfig::from_env()?;
    init_tracing(config.log_format);
    tracing::info!(
        addr = %config.listen_addr,
        device_id = %config.default_device_id,
        "starting ornament-relay"
    );

    // Build domain layer
    let mailbox = Arc::new(InMemoryMailbox::new());

    // Build application state
    let control_page = render_control_page(&config.public_base_url, &config.default_device_id);
    let app_state = AppState::new(mailbox, control_page);

    // Build router
    let app = api::build_router(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
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
