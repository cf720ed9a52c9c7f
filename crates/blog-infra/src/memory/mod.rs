//! In-memory repositories - used by tests and the `minimal` build.
//!
//! Data is lost on process restart.

mod likes;
mod posts;
mod users;

pub use likes::InMemoryLikeRepository;
pub use posts::InMemoryPostRepository;
pub use users::InMemoryUserRepository;
