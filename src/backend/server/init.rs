/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including store selection, state creation, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Select the document store: PostgreSQL when `DATABASE_URL` is set
 *    (connecting and running migrations), otherwise in-memory
 * 2. Build the application state from the store and configuration
 * 3. Create and configure the router
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::AppConfig;
use crate::backend::server::state::AppState;
use crate::backend::store::{MemoryStore, PgStore, Store};

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if `DATABASE_URL` is set but the database cannot be reached or
/// migrated. A missing `DATABASE_URL` is not an error.
pub async fn create_app(config: AppConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing DevConnect backend server");

    let store = load_store(&config).await?;
    let app_state = AppState::new(store, config);

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}

/// Pick the document store for this configuration
pub async fn load_store(config: &AppConfig) -> Result<Arc<dyn Store>, sqlx::Error> {
    match &config.database_url {
        Some(url) => {
            let store = PgStore::connect(url).await.map_err(|e| {
                tracing::error!("Failed to initialize database: {:?}", e);
                e
            })?;
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Documents will be kept in memory and lost on restart.");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
