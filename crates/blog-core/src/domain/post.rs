use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a blog post owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Post {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Fields supplied when creating a post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub user_id: i64,
    pub title: String,
    pub content: String,
}
