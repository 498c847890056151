//! TaxLens API Server
//!
//! Main entry point for the TaxLens budget allocation service.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taxlens_api::{AppState, create_router};
use taxlens_core::{BudgetQueryService, RecordLoader};
use taxlens_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taxlens=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Build the index before accepting any request
    let outcome = RecordLoader::load_path(&config.data.path)
        .with_context(|| format!("Failed to load budget data from {}", config.data.path.display()))?;
    let state = AppState::new(BudgetQueryService::new(outcome.index));

    // Create router
    let app = create_router(state);

    // Start server
    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
