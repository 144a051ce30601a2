/**
 * Server Initialization
 *
 * This module builds the application from a `ServerConfig`.
 *
 * # Initialization Process
 *
 * 1. Open the store; for PostgreSQL, connect and run migrations
 * 2. Build the token service from the secret (empty secret aborts)
 * 3. Build the password hasher with the configured cost
 * 4. Create the router with all routes and layers
 *
 * A failure at any step is returned as `InitError` and the binary exits.
 */

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::backend::auth::passwords::{HashError, PasswordHasher};
use crate::backend::auth::sessions::{TokenError, TokenService};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{ConfigError, ServerConfig, StoreBackend};
use crate::backend::server::state::AppState;
use crate::backend::store::{MemoryStore, PgStore, Store};

/// Startup errors
#[derive(Debug, Error)]
pub enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("token service: {0}")]
    Token(#[from] TokenError),

    #[error("password hasher: {0}")]
    Hasher(#[from] HashError),

    #[error("failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to run database migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Open the configured store
///
/// For PostgreSQL this connects, then applies the migrations in
/// `migrations/`.
pub async fn load_store(backend: &StoreBackend) -> Result<Arc<dyn Store>, InitError> {
    match backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::Postgres(settings) => {
            tracing::info!("Connecting to database...");
            let pool = PgPoolOptions::new()
                .max_connections(10)
                .acquire_timeout(Duration::from_secs(5))
                .connect_with(settings.connect_options()?)
                .await?;
            tracing::info!("Database connection pool created successfully");

            tracing::info!("Running database migrations...");
            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("Database migrations completed successfully");

            Ok(Arc::new(PgStore::new(pool)))
        }
    }
}

/// Build the application state from configuration and an open store
pub fn build_state(config: &ServerConfig, store: Arc<dyn Store>) -> Result<AppState, InitError> {
    let tokens = TokenService::new(config.jwt_secret.as_bytes())?;
    let hasher = PasswordHasher::new(config.bcrypt_cost)?;

    Ok(AppState::new(store, tokens, hasher, config.assets.clone()))
}

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, InitError> {
    tracing::info!("Initializing comment board server");

    let store = load_store(&config.store).await?;
    let app_state = build_state(config, store)?;

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}
