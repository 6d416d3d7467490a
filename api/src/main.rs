use std::sync::Arc;

use anyhow::Result;
use dotenv::dotenv;
use shared::{InMemoryItemStore, ItemStore};

use api::config::ServerConfig;
use api::observability::Observability;
use api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = ServerConfig::from_env()?;
    let obs = Observability::init(config.log_format)?;
    tracing::info!(?config, "Configuration loaded");

    let store: Arc<dyn ItemStore> = if config.seed_data {
        let store = InMemoryItemStore::with_seed_data().await;
        tracing::info!(items = store.len().await, "Item store seeded");
        Arc::new(store)
    } else {
        Arc::new(InMemoryItemStore::new())
    };

    let state = AppState::new(store, obs.registry);
    let app = api::app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("API server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
