//! Services - business rules applied on top of the ports.

mod like;
mod post;
mod user;

pub use like::LikeService;
pub use post::PostService;
pub use user::{RegisterUser, UserService, generate_verification_code};
