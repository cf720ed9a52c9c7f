use std::sync::Arc;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;
use crate::ports::PostRepository;

/// Thin delegation over [`PostRepository`]. Store errors pass through unchanged.
pub struct PostService {
    posts: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    pub async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        self.posts.create(post).await
    }

    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<Post>, RepoError> {
        self.posts.find_by_user_id(user_id).await
    }

    // No ownership check: any caller may delete any post.
    pub async fn delete(&self, post_id: i64) -> Result<(), RepoError> {
        self.posts.soft_delete(post_id).await
    }
}
