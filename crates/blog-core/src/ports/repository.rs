use async_trait::async_trait;

use crate::domain::{Like, NewLike, NewPost, NewUser, Post, User};
use crate::error::RepoError;

/// User persistence. Soft-deleted users are invisible to every method.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn email_exists(&self, email: &str) -> Result<bool, RepoError>;

    async fn create(&self, user: NewUser) -> Result<User, RepoError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Persist every mutable column of an existing user.
    async fn update(&self, user: User) -> Result<User, RepoError>;
}

/// Post persistence.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Live posts of a user, oldest first.
    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Post>, RepoError>;

    /// Stamp `deleted_at`. Unknown or already deleted ids are a no-op.
    async fn soft_delete(&self, post_id: i64) -> Result<(), RepoError>;
}

/// Like persistence.
#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn add(&self, like: NewLike) -> Result<Like, RepoError>;

    /// Hard-delete every like of `user_id` on `post_id`, returning how many went.
    async fn remove(&self, post_id: i64, user_id: i64) -> Result<u64, RepoError>;

    async fn count_by_post(&self, post_id: i64) -> Result<u64, RepoError>;
}
