/**
 * Server Initialization
 *
 * This module builds the Axum application from a `ServerConfig`.
 *
 * # Initialization Process
 *
 * 1. Open the store: PostgreSQL (with migrations) when `DATABASE_URL` is
 *    set, otherwise the in-memory store
 * 2. Optionally seed the demo data
 * 3. Build `AppState` and the router
 *
 * A configured database that cannot be reached is a startup error; the
 * server never silently falls back to memory in that case.
 */

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::backend::routes::create_router;
use crate::backend::seed::{seed_demo_data, SeedError};
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::store::{BoardStore, MemoryStore, PgStore, StoreError};

/// Startup failures
#[derive(Debug, Error)]
pub enum InitError {
    #[error("store initialization failed: {0}")]
    Store(#[from] StoreError),

    #[error("seeding demo data failed: {0}")]
    Seed(#[from] SeedError),
}

/// Open the store selected by the configuration
pub async fn load_store(config: &ServerConfig) -> Result<Arc<dyn BoardStore>, StoreError> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Using the in-memory store; data is lost on restart.");
        return Ok(Arc::new(MemoryStore::new()));
    };

    tracing::info!("Connecting to database...");
    let store = PgStore::connect(database_url).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    store.migrate().await?;
    tracing::info!("Database migrations completed successfully");

    Ok(Arc::new(store))
}

/// Build the router around existing state
pub fn build_app(state: AppState) -> Router<()> {
    create_router(state)
}

/// Create and configure the Axum application
pub async fn create_app(config: ServerConfig) -> Result<Router<()>, InitError> {
    tracing::info!(?config, "Initializing taskboard server");

    let store = load_store(&config).await?;

    if config.seed_demo_data {
        seed_demo_data(store.as_ref(), config.bcrypt_cost).await?;
    }

    let state = AppState::new(store, config);
    Ok(build_app(state))
}
