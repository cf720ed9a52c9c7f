use chrono::{DateTime, Utc};
use serde::Serialize;

/// Like entity - one user liking one post. Nothing prevents repeats.
#[derive(Debug, Clone, Serialize)]
pub struct Like {
    pub id: i64,
    pub user_id: i64,
    pub post_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy)]
pub struct NewLike {
    pub user_id: i64,
    pub post_id: i64,
}
