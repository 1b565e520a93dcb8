/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct holds the injected collaborators every handler
 * needs:
 * - The document store (`Arc<dyn Store>`)
 * - The token service (signing keys and lifetime)
 * - The loaded configuration
 *
 * Nothing in the state changes after startup; all mutable data lives in the
 * store.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract only the part they
 * use, e.g. `State(store): State<Arc<dyn Store>>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::sessions::TokenService;
use crate::backend::server::config::AppConfig;
use crate::backend::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,

    pub tokens: TokenService,

    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, config: AppConfig) -> Self {
        let tokens = TokenService::new(&config.jwt_secret, config.token_ttl_secs);
        Self {
            store,
            tokens,
            config: Arc::new(config),
        }
    }
}

impl FromRef<AppState> for Arc<dyn Store> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
