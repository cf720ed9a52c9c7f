//! Domain-level error types.

use thiserror::Error;

use crate::ports::{AuthError, MailError};

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} {key}")]
    NotFound {
        entity_type: &'static str,
        key: String,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid verification code")]
    InvalidVerificationCode,

    #[error("Dependency failure: {0}")]
    Dependency(String),
}

impl DomainError {
    pub fn user_not_found(email: &str) -> Self {
        Self::NotFound {
            entity_type: "user",
            key: email.to_string(),
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Constraint(msg) => DomainError::Duplicate(msg),
            other => DomainError::Dependency(other.to_string()),
        }
    }
}

impl From<AuthError> for DomainError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => DomainError::InvalidCredentials,
            other => DomainError::Dependency(other.to_string()),
        }
    }
}

impl From<MailError> for DomainError {
    fn from(err: MailError) -> Self {
        DomainError::Dependency(format!("failed to send verification email: {err}"))
    }
}
