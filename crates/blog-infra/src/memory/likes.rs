use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use blog_core::domain::{Like, NewLike};
use blog_core::error::RepoError;
use blog_core::ports::LikeRepository;

#[derive(Default)]
pub struct InMemoryLikeRepository {
    rows: RwLock<Vec<Like>>,
    next_id: RwLock<i64>,
}

impl InMemoryLikeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LikeRepository for InMemoryLikeRepository {
    async fn add(&self, new_like: NewLike) -> Result<Like, RepoError> {
        // Ids keep increasing across removals, like a sequence.
        let mut next_id = self.next_id.write().await;
        *next_id += 1;

        let like = Like {
            id: *next_id,
            user_id: new_like.user_id,
            post_id: new_like.post_id,
            created_at: Utc::now(),
        };
        self.rows.write().await.push(like.clone());
        Ok(like)
    }

    async fn remove(&self, post_id: i64, user_id: i64) -> Result<u64, RepoError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|l| !(l.post_id == post_id && l.user_id == user_id));
        Ok((before - rows.len()) as u64)
    }

    async fn count_by_post(&self, post_id: i64) -> Result<u64, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|l| l.post_id == post_id).count() as u64)
    }
}
