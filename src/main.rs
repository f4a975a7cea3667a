//! Bookshelf Server
//!
//! A small Rust REST API server for a book catalog.

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;

use bookshelf_server::{
    api,
    config::AppConfig,
    repository::{seed, BookStore, MemoryBookStore, PgBookStore},
    telemetry, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing (and the telemetry exporter, if configured)
    telemetry::init(&config)?;

    tracing::info!("Starting Bookshelf Server v{}", env!("CARGO_PKG_VERSION"));

    // Select the storage backend: PostgreSQL when a connection string is
    // configured, in-memory otherwise
    let store: Arc<dyn BookStore> = match config.database.connection_url() {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .min_connections(config.database.min_connections)
                .connect(url)
                .await
                .context("Failed to connect to database")?;

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;

            tracing::info!("Using PostgreSQL storage backend");
            Arc::new(PgBookStore::new(pool))
        }
        None => {
            tracing::info!("No connection string configured, using in-memory storage backend");
            Arc::new(MemoryBookStore::new())
        }
    };

    // Seed the store before serving. A broken store at startup is fatal.
    seed::initialize(store.as_ref())
        .await
        .context("Failed to seed book store")?;

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        store,
    };

    // Build router
    let app = api::router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().context("Invalid host address")?,
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
