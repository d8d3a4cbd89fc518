//! REST service shell entry point.
//!
//! Wires the pieces together the way a supervisor would: install tracing
//! and metrics, then drive the server through its lifecycle contract and
//! stop it on Ctrl+C.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rest_shell::http::RestServer;
use rest_shell::lifecycle::Service;
use rest_shell::observability::metrics;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rest_shell=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("rest-shell v0.1.0 starting");

    // Install the process-global metrics recorder. The registry is shared
    // state; this binary only writes observations to it.
    if let Err(e) = metrics::init_metrics() {
        tracing::error!(error = %e, "Failed to install metrics recorder");
    }

    let config_path =
        std::env::var("REST_SHELL_CONFIG").unwrap_or_else(|_| "rest.toml".to_string());

    let mut service: Box<dyn Service> = Box::new(RestServer::new(config_path));

    tracing::info!(service = service.name(), "Registering service");
    service.initialize().await?;
    service.start().await?;

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received");

    service.stop().await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
