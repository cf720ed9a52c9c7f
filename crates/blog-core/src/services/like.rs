use std::sync::Arc;

use crate::domain::{Like, NewLike};
use crate::error::RepoError;
use crate::ports::LikeRepository;

pub struct LikeService {
    likes: Arc<dyn LikeRepository>,
}

impl LikeService {
    pub fn new(likes: Arc<dyn LikeRepository>) -> Self {
        Self { likes }
    }

    /// Record a like. Repeats are stored as separate rows.
    pub async fn add(&self, post_id: i64, user_id: i64) -> Result<Like, RepoError> {
        self.likes.add(NewLike { user_id, post_id }).await
    }

    pub async fn remove(&self, post_id: i64, user_id: i64) -> Result<u64, RepoError> {
        self.likes.remove(post_id, user_id).await
    }

    pub async fn count(&self, post_id: i64) -> Result<u64, RepoError> {
        self.likes.count_by_post(post_id).await
    }
}
