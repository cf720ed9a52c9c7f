//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::{
    LikeRepository, Mailer, PasswordService, PostRepository, TokenService, UserRepository,
};
use blog_core::services::{LikeService, PostService, UserService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
    pub posts: Arc<PostService>,
    pub likes: Arc<LikeService>,
}

/// Everything the services are built from.
pub struct Adapters {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub likes: Arc<dyn LikeRepository>,
    pub passwords: Arc<dyn PasswordService>,
    pub tokens: Arc<dyn TokenService>,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    /// Wire services bottom-up from concrete adapters.
    pub fn new(adapters: Adapters) -> Self {
        let Adapters {
            users,
            posts,
            likes,
            passwords,
            tokens,
            mailer,
        } = adapters;

        tracing::info!("Application state initialized");

        Self {
            users: Arc::new(UserService::new(users, passwords, tokens, mailer)),
            posts: Arc::new(PostService::new(posts)),
            likes: Arc::new(LikeService::new(likes)),
        }
    }
}
