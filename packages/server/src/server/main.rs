// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use catalog::{CatalogService, Extractor, Fetcher, HttpFetcher, MangaStore, Reconciler, SqliteStore};
use server_core::{
    server::{build_app, AppState},
    Config,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,catalog=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Manga Catalog API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    let profile = config.source_profile()?;
    tracing::info!(source = profile.name, "Configuration loaded");

    // Connect to database (migrations run on connect)
    tracing::info!("Connecting to database...");
    let store = SqliteStore::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    let mut fetcher = HttpFetcher::new();
    if let Some(user_agent) = &config.user_agent {
        fetcher = fetcher.with_user_agent(user_agent);
    }
    let fetcher: Arc<dyn Fetcher> = Arc::new(fetcher);
    let store: Arc<dyn MangaStore> = Arc::new(store);

    // Build application
    let catalog = CatalogService::new(Extractor::new(fetcher, profile), Reconciler::new(store));
    let app = build_app(AppState::new(catalog), &config.allowed_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
