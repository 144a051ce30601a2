//! PostgreSQL test fixtures
//!
//! Tests that need a live database call [`TestDatabase::connect`], which
//! returns `None` when `DATABASE_URL` is unset so the test can skip itself.
//! Every fixture gets its own email domain; the rows it created are removed
//! by [`TestDatabase::cleanup`], so tests can share one database and run in
//! parallel.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;

use comment_board::backend::server::config::AssetPaths;
use comment_board::backend::server::AppState;
use comment_board::backend::store::PgStore;

use super::test_state_with_store;

/// Migrated database plus a unique email domain for this fixture
pub struct TestDatabase {
    pool: PgPool,
    domain: String,
}

impl TestDatabase {
    /// Connect to `DATABASE_URL` and run the migrations
    pub async fn connect() -> Option<Self> {
        let Ok(url) = std::env::var("DATABASE_URL") else {
            eprintln!("DATABASE_URL not set, skipping PostgreSQL test");
            return None;
        };

        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect(&url)
            .await
            .expect("Failed to create test database pool");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        Some(Self {
            pool,
            domain: format!("{}.test", uuid::Uuid::new_v4().simple()),
        })
    }

    /// Email address unique to this fixture
    pub fn email(&self, local: &str) -> String {
        format!("{local}@{}", self.domain)
    }

    pub fn store(&self) -> PgStore {
        PgStore::new(self.pool.clone())
    }

    /// Application state over this database
    pub fn state(&self) -> AppState {
        test_state_with_store(Arc::new(self.store()), AssetPaths::default())
    }

    /// Delete this fixture's users; their comments go with them
    pub async fn cleanup(&self) {
        sqlx::query("DELETE FROM users WHERE email LIKE $1")
            .bind(format!("%@{}", self.domain))
            .execute(&self.pool)
            .await
            .expect("Failed to clean up test data");
    }
}
