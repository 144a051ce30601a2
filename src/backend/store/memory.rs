use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::store::{Comment, Store, StoreError, User};

#[derive(Debug, Default)]
struct Tables {
    /// Users keyed by email
    users: HashMap<String, User>,
    comments: Vec<Comment>,
}

/// Process-local store with the same semantics as `PgStore`.
///
/// Data is lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.users.contains_key(email) {
            return Err(StoreError::DuplicateEmail);
        }

        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        tables.users.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.tables.read().await.users.get(email).cloned())
    }

    async fn create_comment(&self, user_id: Uuid, content: &str) -> Result<Comment, StoreError> {
        let mut tables = self.tables.write().await;
        let email = tables
            .users
            .values()
            .find(|u| u.id == user_id)
            .map(|u| u.email.clone())
            .ok_or(StoreError::UnknownUser(user_id))?;

        let comment = Comment {
            id: Uuid::new_v4(),
            user_id,
            email,
            content: content.to_string(),
            created_at: Utc::now(),
        };
        tables.comments.push(comment.clone());
        Ok(comment)
    }

    async fn list_comments(&self) -> Result<Vec<Comment>, StoreError> {
        let mut comments = self.tables.read().await.comments.clone();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(comments)
    }

    async fn delete_comment(&self, id: Uuid, email: &str) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        let Some(owner) = tables.users.get(email).map(|u| u.id) else {
            return Ok(false);
        };

        let before = tables.comments.len();
        tables
            .comments
            .retain(|c| !(c.id == id && c.user_id == owner));
        Ok(tables.comments.len() < before)
    }
}
