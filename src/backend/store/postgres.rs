/**
 * PostgreSQL Store
 *
 * Runtime-checked `sqlx` queries against the `users` and `comments` tables
 * created by the migrations in `migrations/`.
 */

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::store::{Comment, Store, StoreError, User};

/// Store backed by a PostgreSQL connection pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_insert_error(err: sqlx::Error, user_id: Option<Uuid>) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return StoreError::DuplicateEmail;
        }
        if let (true, Some(id)) = (db_err.is_foreign_key_violation(), user_id) {
            return StoreError::UnknownUser(id);
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl Store for PgStore {
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password)
            VALUES ($1, $2)
            RETURNING id, email, password, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, None))
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create_comment(&self, user_id: Uuid, content: &str) -> Result<Comment, StoreError> {
        sqlx::query_as::<_, Comment>(
            r#"
            WITH inserted AS (
                INSERT INTO comments (user_id, content)
                VALUES ($1, $2)
                RETURNING id, user_id, content, created_at
            )
            SELECT inserted.id, inserted.user_id, users.email, inserted.content, inserted.created_at
            FROM inserted
            JOIN users ON users.id = inserted.user_id
            "#,
        )
        .bind(user_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, Some(user_id)))
    }

    async fn list_comments(&self) -> Result<Vec<Comment>, StoreError> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT c.id, c.user_id, u.email, c.content, c.created_at
            FROM comments c
            JOIN users u ON u.id = c.user_id
            ORDER BY c.created_at DESC, c.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    async fn delete_comment(&self, id: Uuid, email: &str) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM comments
            WHERE id = $1
              AND user_id = (SELECT id FROM users WHERE email = $2)
            "#,
        )
        .bind(id)
        .bind(email)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
