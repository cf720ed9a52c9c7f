use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use blog_core::domain::{NewPost, Post};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

#[derive(Default)]
pub struct InMemoryPostRepository {
    rows: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every row, soft-deleted ones included.
    pub async fn all(&self) -> Vec<Post> {
        self.rows.read().await.clone()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let mut rows = self.rows.write().await;
        let now = Utc::now();
        let post = Post {
            id: rows.len() as i64 + 1,
            user_id: new_post.user_id,
            title: new_post.title,
            content: new_post.content,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        rows.push(post.clone());
        Ok(post)
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Post>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|p| p.user_id == user_id && !p.is_deleted())
            .cloned()
            .collect())
    }

    async fn soft_delete(&self, post_id: i64) -> Result<(), RepoError> {
        let mut rows = self.rows.write().await;
        if let Some(post) = rows
            .iter_mut()
            .find(|p| p.id == post_id && !p.is_deleted())
        {
            let now = Utc::now();
            post.deleted_at = Some(now);
            post.updated_at = now;
        }
        Ok(())
    }
}
