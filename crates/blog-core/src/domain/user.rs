use chrono::{DateTime, Utc};
use serde::Serialize;

/// User entity - a registered account.
///
/// `password_hash` and `verification_code` never leave the process.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_verified: bool,
    #[serde(skip_serializing)]
    pub verification_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Mark the email address as verified and clear the single-use code.
    pub fn mark_verified(&mut self) {
        self.is_verified = true;
        self.verification_code = None;
        self.updated_at = Utc::now();
    }
}

/// A user that has not been persisted yet.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub verification_code: String,
}
