//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory adapters only
//! - `postgres` - PostgreSQL persistence via SeaORM
//! - `auth` - JWT + Argon2 authentication
//! - `smtp` - Verification mail over SMTP via lettre

pub mod database;
pub mod mail;
pub mod memory;

#[cfg(feature = "auth")]
pub mod auth;

pub use database::{DatabaseConfig, DatabaseConnections};
pub use mail::RecordingMailer;
pub use memory::{InMemoryLikeRepository, InMemoryPostRepository, InMemoryUserRepository};

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService, PasswordConfig};

#[cfg(feature = "smtp")]
pub use mail::{SmtpConfig, SmtpMailer, SmtpTls};

/// Mask the local part of an email address for logging.
pub fn mask_email(email: &str) -> String {
    match email.find('@') {
        Some(at_pos) => {
            let (local, domain) = email.split_at(at_pos);
            let masked_local = match local.chars().next() {
                Some(first) if local.len() > 1 => format!("{first}***"),
                _ => "***".to_string(),
            };
            format!("{masked_local}{domain}")
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::mask_email;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("alice@example.com"), "a***@example.com");
        assert_eq!(mask_email("a@x.com"), "***@x.com");
        assert_eq!(mask_email("not-an-email"), "***");
    }
}
