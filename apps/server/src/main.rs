//! # Kassa Server
//!
//! HTTP receipt service binary: loads configuration, opens the catalog
//! database, and serves the cash-machine endpoints.

use tracing::info;

use kassa_db::{Database, DbConfig};
use kassa_server::{create_router, AppConfig, AppState, DocumentStore, ReceiptPipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting Kassa receipt service...");

    // Load configuration
    let config = AppConfig::load()?;
    info!(
        bind_addr = %config.bind_addr,
        database = %config.database_path.display(),
        media_root = %config.media_root.display(),
        "Configuration loaded"
    );

    // Open catalog database (runs migrations)
    let db = Database::new(DbConfig::new(&config.database_path)).await?;
    info!("Catalog database ready");

    // Assemble the pipeline and router state
    let store = DocumentStore::new(&config.media_root, config.media_base_url.as_str());
    let pipeline = ReceiptPipeline::new(db.items(), store);
    let state = AppState {
        items: db.items(),
        pipeline,
    };

    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    db.close().await;
    Ok(())
}

/// Resolves when Ctrl-C is received, triggering graceful shutdown.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(?e, "Failed to install Ctrl-C handler");
    }
    info!("Shutdown signal received");
}
