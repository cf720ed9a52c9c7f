//! Domain entities - the core business objects.

mod like;
mod post;
mod user;

pub use like::{Like, NewLike};
pub use post::{NewPost, Post};
pub use user::{NewUser, User};
