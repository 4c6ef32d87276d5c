//! Bookstore Server - in-memory book inventory
//!
//! Serves the bookstore REST API over a store seeded at startup.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookstore_server::{
    api,
    config::AppConfig,
    models::book::seed_books,
    repository::Repository,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("bookstore_server={},tower_http=debug", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Bookstore Server v{}", env!("CARGO_PKG_VERSION"));

    let books = if config.store.seed { seed_books() } else { Vec::new() };
    tracing::info!("Book store initialized with {} books", books.len());

    let listener = api::bind_listener(&config.server).await.with_context(|| {
        format!("Failed to bind {}:{}", config.server.host, config.server.port)
    })?;

    tracing::info!("Server listening on http://{}", listener.local_addr()?);

    let state = AppState::new(config, Repository::new(books));
    let app = api::create_router(state);

    axum::serve(listener, app).await?;

    Ok(())
}
