use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use blog_core::domain::{NewUser, User};
use blog_core::error::RepoError;
use blog_core::ports::UserRepository;

/// Vec-backed user table. Email uniqueness mirrors the database constraint.
#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every row, soft-deleted ones included.
    pub async fn all(&self) -> Vec<User> {
        self.rows.read().await.clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn email_exists(&self, email: &str) -> Result<bool, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .any(|u| u.email == email && u.deleted_at.is_none()))
    }

    async fn create(&self, new_user: NewUser) -> Result<User, RepoError> {
        let mut rows = self.rows.write().await;

        if rows.iter().any(|u| u.email == new_user.email) {
            return Err(RepoError::Constraint("users_email_key".to_string()));
        }

        let now = Utc::now();
        let user = User {
            id: rows.len() as i64 + 1,
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            is_verified: false,
            verification_code: Some(new_user.verification_code),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        rows.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .find(|u| u.email == email && u.deleted_at.is_none())
            .cloned())
    }

    async fn update(&self, user: User) -> Result<User, RepoError> {
        let mut rows = self.rows.write().await;
        let slot = rows
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(RepoError::NotFound)?;
        *slot = user.clone();
        Ok(user)
    }
}
