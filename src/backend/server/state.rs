/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds every collaborator a handler needs, injected once at
 * construction:
 * - the persistence `Store`
 * - the `TokenService` holding the signing secret
 * - the `PasswordHasher` with its configured cost
 * - the paths of the static assets
 *
 * Everything except the store is immutable after startup; the store does
 * its own synchronisation.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let the authorization gate take
 * `State<Arc<TokenService>>` and the resume route `State<Arc<AssetPaths>>`.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::server::config::AssetPaths;
use crate::backend::store::Store;

/// Application state shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    /// User and comment persistence
    pub store: Arc<dyn Store>,

    /// Token issuance and validation
    pub tokens: Arc<TokenService>,

    /// Password hashing with the configured bcrypt cost
    pub hasher: PasswordHasher,

    /// Static file locations
    pub assets: Arc<AssetPaths>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn Store>,
        tokens: TokenService,
        hasher: PasswordHasher,
        assets: AssetPaths,
    ) -> Self {
        Self {
            store,
            tokens: Arc::new(tokens),
            hasher,
            assets: Arc::new(assets),
        }
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for Arc<AssetPaths> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.assets.clone()
    }
}

#[cfg(test)]
impl AppState {
    /// In-memory state with a fixed secret and the cheapest bcrypt cost
    pub(crate) fn for_tests() -> Self {
        use crate::backend::auth::passwords::MIN_COST;
        use crate::backend::store::MemoryStore;

        Self::new(
            Arc::new(MemoryStore::new()),
            TokenService::new(b"test-secret").unwrap(),
            PasswordHasher::new(MIN_COST).unwrap(),
            AssetPaths::default(),
        )
    }
}
