//! Argon2 password hashing implementation.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde::Deserialize;

use blog_core::ports::{AuthError, PasswordService};

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PasswordConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

/// Argon2-based password service.
pub struct Argon2PasswordService {
    argon2: Argon2<'static>,
}

impl Argon2PasswordService {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Build with explicit cost parameters.
    pub fn with_config(config: PasswordConfig) -> Result<Self, AuthError> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

impl Default for Argon2PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AuthError::HashingError(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap() -> Argon2PasswordService {
        Argon2PasswordService::with_config(PasswordConfig {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let service = cheap();
        let password = "secure_password_123";

        let hash = service.hash(password).unwrap();
        assert_ne!(hash, password);
        assert!(service.verify(password, &hash).unwrap());
        assert!(!service.verify("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_same_password_gets_fresh_salt() {
        let service = cheap();

        assert_ne!(service.hash("p").unwrap(), service.hash("p").unwrap());
    }

    #[test]
    fn test_garbage_hash_is_an_error() {
        assert!(cheap().verify("p", "not-a-phc-string").is_err());
    }

    #[test]
    fn test_invalid_params_rejected() {
        let result = Argon2PasswordService::with_config(PasswordConfig {
            memory_kib: 1,
            iterations: 0,
            parallelism: 1,
        });

        assert!(result.is_err());
    }
}
