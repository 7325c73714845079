/**
 * Application State Management
 *
 * This module defines the application state shared by every handler and
 * implements the `FromRef` traits for Axum state extraction.
 *
 * # Thread Safety
 *
 * Every field is an `Arc` over something immutable or internally
 * synchronized, so cloning the state per request is cheap.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use chrono::Duration;

use crate::backend::auth::sessions::TokenService;
use crate::backend::server::config::ServerConfig;
use crate::backend::store::BoardStore;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Persistence port (PostgreSQL or in-memory)
    pub store: Arc<dyn BoardStore>,

    /// Session token signer/verifier
    pub tokens: Arc<TokenService>,

    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build state around a store, deriving the token service from `config`
    pub fn new(store: Arc<dyn BoardStore>, config: ServerConfig) -> Self {
        let tokens = TokenService::new(&config.jwt_secret, Duration::days(config.token_ttl_days));
        Self {
            store,
            tokens: Arc::new(tokens),
            config: Arc::new(config),
        }
    }

    /// bcrypt cost for newly hashed passwords
    pub fn bcrypt_cost(&self) -> u32 {
        self.config.bcrypt_cost
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("tokens", &self.tokens)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl FromRef<AppState> for Arc<dyn BoardStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

#[cfg(test)]
impl AppState {
    /// State over a fresh in-memory store with a cheap bcrypt cost
    pub(crate) fn in_memory() -> Self {
        use crate::backend::server::config::ServerConfigBuilder;
        use crate::backend::store::MemoryStore;

        let config = ServerConfigBuilder::new("test-secret")
            .bcrypt_cost(4)
            .build()
            .expect("valid test config");
        Self::new(Arc::new(MemoryStore::new()), config)
    }
}
