// JWT token service: HS256 mint + verify against a single configured secret

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use uuid::Uuid;

use crate::models::auth::AccessTokenClaims;

/// Errors for JWT operations
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("JWT encoding error: {0}")]
    EncodingError(String),

    #[error("Token secret must be at least 32 bytes")]
    WeakSecret,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Clock error: {0}")]
    ClockError(String),
}

impl From<jsonwebtoken::errors::Error> for JwtError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;
        match err.kind() {
            ErrorKind::ExpiredSignature => JwtError::TokenExpired,
            ErrorKind::InvalidToken
            | ErrorKind::InvalidSignature
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => JwtError::InvalidToken,
            _ => JwtError::EncodingError(err.to_string()),
        }
    }
}

/// JWT configuration: key pair derived from one secret
#[derive(Clone)]
pub struct JwtConfig {
    pub token_expiry: u64,
    pub algorithm: Algorithm,
    pub encoding_key: EncodingKey,
    pub decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("token_expiry", &self.token_expiry)
            .field("algorithm", &self.algorithm)
            .field("encoding_key", &"<redacted>")
            .field("decoding_key", &"<redacted>")
            .finish()
    }
}

impl JwtConfig {
    /// Build a config from a raw secret.
    ///
    /// A secret under 32 bytes is a startup misconfiguration: the validator
    /// could not safely decide any request, so key construction refuses it.
    pub fn new(secret: &str, token_expiry: u64) -> Result<Self, JwtError> {
        if secret.len() < 32 {
            return Err(JwtError::WeakSecret);
        }

        Ok(Self {
            token_expiry,
            algorithm: Algorithm::HS256,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        })
    }

    /// Create JWT config from the centralized app configuration
    pub fn from_env() -> Result<Self, JwtError> {
        let crate::app_config::AuthTokenConfig {
            secret,
            token_expiry,
        } = &crate::app_config::config().auth;

        Self::new(secret, *token_expiry)
    }

    /// Deterministic config for tests, independent of the environment
    pub fn for_test() -> Self {
        Self::new("test-token-secret-hs256-minimum-32-characters", 3600)
            .expect("test secret meets the length requirement")
    }
}

/// Mints and verifies panel access tokens
pub struct JwtService {
    config: JwtConfig,
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    /// Create JWT service from environment
    pub fn from_env() -> Result<Self, JwtError> {
        Ok(Self::new(JwtConfig::from_env()?))
    }

    /// Mint a signed access token for an authenticated user
    pub fn mint_token(&self, user_id: &str, email: &str) -> Result<String, JwtError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| JwtError::ClockError(e.to_string()))?
            .as_secs();

        let claims = AccessTokenClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: now,
            exp: now + self.config.token_expiry,
        };

        encode(&Header::new(self.config.algorithm), &claims, &self.config.encoding_key)
            .map_err(Into::into)
    }

    /// Verify a token's signature and expiry and return its claims.
    ///
    /// Expiry validation is always on with zero leeway; an expired token
    /// fails no matter how valid its signature is. Pure function of the
    /// token, the secret and the clock.
    ///
    /// # Errors
    /// * `JwtError::TokenExpired` - expiry claim is in the past
    /// * `JwtError::InvalidToken` - malformed token or signature mismatch
    pub fn verify_token(&self, token: &str) -> Result<AccessTokenClaims, JwtError> {
        let mut validation = Validation::new(self.config.algorithm);
        validation.validate_exp = true;
        validation.validate_nbf = false;
        validation.leeway = 0;

        let token_data = decode::<AccessTokenClaims>(token, &self.config.decoding_key, &validation)?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, Header};

    #[test]
    fn test_mint_and_verify_roundtrip() {
        let service = JwtService::new(JwtConfig::for_test());

        let token = service
            .mint_token("user-42", "stylist@salon.example")
            .unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, "user-42");
        assert_eq!(claims.email, "stylist@salon.example");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_weak_secret_rejected() {
        let result = JwtConfig::new("short", 3600);
        assert!(matches!(result, Err(JwtError::WeakSecret)));
    }

    #[test]
    fn test_wrong_secret_fails_verification() {
        let minting = JwtService::new(
            JwtConfig::new("first-secret-that-is-32-characters-ok", 3600).unwrap(),
        );
        let verifying = JwtService::new(
            JwtConfig::new("other-secret-that-is-32-characters-ok", 3600).unwrap(),
        );

        let token = minting.mint_token("user-1", "a@b.com").unwrap();
        let result = verifying.verify_token(&token);

        assert!(matches!(result, Err(JwtError::InvalidToken)));
    }

    #[test]
    fn test_expired_token_fails_even_with_valid_signature() {
        let config = JwtConfig::for_test();
        let service = JwtService::new(config.clone());

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();

        // Signed with the right key but already past its expiry
        let claims = AccessTokenClaims {
            sub: "user-1".to_string(),
            email: "a@b.com".to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(&Header::new(config.algorithm), &claims, &config.encoding_key).unwrap();

        let result = service.verify_token(&token);
        assert!(matches!(result, Err(JwtError::TokenExpired)));
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let service = JwtService::new(JwtConfig::for_test());
        assert!(service.verify_token("not.a.jwt").is_err());
        assert!(service.verify_token("").is_err());
    }

    #[test]
    fn test_verification_is_idempotent() {
        let service = JwtService::new(JwtConfig::for_test());
        let token = service.mint_token("user-7", "owner@salon.example").unwrap();

        let first = service.verify_token(&token).unwrap();
        let second = service.verify_token(&token).unwrap();

        assert_eq!(first, second);
    }
}
