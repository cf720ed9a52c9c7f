//! Registration, login and email verification.

use std::sync::{Arc, OnceLock};

use base64::{Engine as _, engine::general_purpose::URL_SAFE};
use rand::RngCore;
use rand::rngs::OsRng;

use crate::domain::{NewUser, User};
use crate::error::DomainError;
use crate::ports::{Mailer, PasswordService, TokenService, UserRepository};

pub const VERIFICATION_SUBJECT: &str = "Email Verification";

/// Hashed once and compared against when the email is unknown.
const DUMMY_PASSWORD: &str = "blog-login-dummy-password";

/// Input for [`UserService::register`].
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct UserService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
    mailer: Arc<dyn Mailer>,
    dummy_hash: OnceLock<String>,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            users,
            passwords,
            tokens,
            mailer,
            dummy_hash: OnceLock::new(),
        }
    }

    /// Register a new, unverified user.
    ///
    /// The verification email goes out before the row is written, so a mail
    /// relay failure leaves no user behind.
    pub async fn register(&self, req: RegisterUser) -> Result<User, DomainError> {
        if self.users.email_exists(&req.email).await? {
            return Err(DomainError::Duplicate("email already exists".to_string()));
        }

        let password_hash = self.passwords.hash(&req.password)?;
        let verification_code = generate_verification_code();

        self.mailer
            .send(
                &req.email,
                VERIFICATION_SUBJECT,
                &format!("Your verification code is: {verification_code}"),
            )
            .await?;

        let user = self
            .users
            .create(NewUser {
                name: req.name,
                email: req.email,
                password_hash,
                verification_code,
            })
            .await?;

        Ok(user)
    }

    /// Check credentials and issue a bearer token.
    ///
    /// An unknown email still pays for one password comparison so both
    /// failures take about as long.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, DomainError> {
        let Some(user) = self.users.find_by_email(email).await? else {
            self.verify_against_dummy(password);
            return Err(DomainError::user_not_found(email));
        };

        if !self.passwords.verify(password, &user.password_hash)? {
            return Err(DomainError::InvalidCredentials);
        }

        Ok(self.tokens.generate_token(user.id)?)
    }

    /// Confirm an email address with the code that was mailed to it.
    pub async fn verify_email(&self, email: &str, code: &str) -> Result<(), DomainError> {
        let mut user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::user_not_found(email))?;

        if user.verification_code.as_deref() != Some(code) {
            return Err(DomainError::InvalidVerificationCode);
        }

        user.mark_verified();
        self.users.update(user).await?;
        Ok(())
    }

    fn verify_against_dummy(&self, password: &str) {
        let hash = match self.dummy_hash.get() {
            Some(hash) => hash,
            None => match self.passwords.hash(DUMMY_PASSWORD) {
                Ok(hash) => self.dummy_hash.get_or_init(|| hash),
                Err(_) => return,
            },
        };
        let _ = self.passwords.verify(password, hash);
    }
}

/// 128 bits from the OS RNG, URL-safe base64 with padding.
pub fn generate_verification_code() -> String {
    let mut bytes = [0u8; 16];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_code_shape() {
        let code = generate_verification_code();

        assert_eq!(code.len(), 24);
        assert!(code.ends_with("=="));
        assert!(
            code.trim_end_matches('=')
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_verification_codes_differ() {
        assert_ne!(generate_verification_code(), generate_verification_code());
    }
}
