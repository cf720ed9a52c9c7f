//! JWT token service implementation.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use blog_core::ports::{AuthError, TokenClaims, TokenService};

pub const DEFAULT_SECRET: &str = "change-me-in-production";

/// JWT token service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    #[serde(rename = "secret_key")]
    pub secret: String,
    #[serde(default = "default_lifetime")]
    pub token_lifetime_minutes: i64,
}

fn default_lifetime() -> i64 {
    24 * 60
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            token_lifetime_minutes: default_lifetime(),
        }
    }
}

/// Internal JWT claims structure for serialization.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    user_id: i64,
    exp: i64, // expiration timestamp
    iat: i64, // issued at
}

/// HS256 token service keyed by a process-wide secret.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: JwtConfig,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        if config.secret == DEFAULT_SECRET || config.secret.is_empty() {
            tracing::warn!("Using default JWT secret. Set jwt.secret_key or JWT_SECRET.");
        }

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            encoding_key,
            decoding_key,
            config,
        }
    }
}

impl TokenService for JwtTokenService {
    fn generate_token(&self, user_id: i64) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now + TimeDelta::minutes(self.config.token_lifetime_minutes);

        let claims = Claims {
            user_id,
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            }
        })?;

        Ok(TokenClaims {
            user_id: token_data.claims.user_id,
            exp: token_data.claims.exp,
        })
    }

    fn expiration_seconds(&self) -> i64 {
        self.config.token_lifetime_minutes * 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key".to_string(),
            token_lifetime_minutes: 60,
        }
    }

    #[test]
    fn test_validate_token_success() {
        let service = JwtTokenService::new(test_config());

        let token = service.generate_token(17).unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.user_id, 17);
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_validate_invalid_token() {
        let service = JwtTokenService::new(test_config());

        let result = service.validate_token("invalid-token");

        assert!(matches!(result.unwrap_err(), AuthError::InvalidToken(_)));
    }

    #[test]
    fn test_validate_wrong_secret_token() {
        let issuer = JwtTokenService::new(test_config());
        let other = JwtTokenService::new(JwtConfig {
            secret: "another-secret".to_string(),
            token_lifetime_minutes: 60,
        });

        let token = issuer.generate_token(1).unwrap();

        assert!(other.validate_token(&token).is_err());
    }

    #[test]
    fn test_expired_token() {
        // Past the default 60s leeway.
        let service = JwtTokenService::new(JwtConfig {
            secret: "test-secret-key".to_string(),
            token_lifetime_minutes: -5,
        });

        let token = service.generate_token(1).unwrap();

        assert!(matches!(
            service.validate_token(&token).unwrap_err(),
            AuthError::TokenExpired
        ));
    }

    #[test]
    fn test_default_lifetime_is_one_day() {
        let service = JwtTokenService::new(JwtConfig::default());

        assert_eq!(service.expiration_seconds(), 86400);
    }
}
