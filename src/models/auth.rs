// Access token claims for the salon backend
// Minted and verified against the single process-wide secret

use serde::{Deserialize, Serialize};

/// Claims carried by a signed access token.
///
/// Handlers never see this struct directly; the auth middleware projects it
/// down to `CurrentUser {id, email}` so no other claim leaks downstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessTokenClaims {
    /// User ID (subject)
    pub sub: String,

    /// User email address
    pub email: String,

    /// Token ID (UUID format), unique per mint
    pub jti: String,

    /// Issued at timestamp (Unix epoch seconds)
    pub iat: u64,

    /// Expires at timestamp (Unix epoch seconds)
    pub exp: u64,
}

impl AccessTokenClaims {
    pub fn new(user_id: String, email: String, token_id: String, issued_at: u64, expires_at: u64) -> Self {
        Self {
            sub: user_id,
            email,
            jti: token_id,
            iat: issued_at,
            exp: expires_at,
        }
    }

    /// Check if the token is expired against the system clock
    pub fn is_expired(&self) -> bool {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        self.exp < now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_claims_structure() {
        let jti = Uuid::new_v4().to_string();
        let claims = AccessTokenClaims::new(
            "user-123".to_string(),
            "stylist@salon.example".to_string(),
            jti.clone(),
            1640995200,
            1640998800,
        );

        assert_eq!(claims.sub, "user-123");
        assert_eq!(claims.email, "stylist@salon.example");
        assert_eq!(claims.jti, jti);
        assert_eq!(claims.iat, 1640995200);
        assert_eq!(claims.exp, 1640998800);
    }

    #[test]
    fn test_claims_serialization_roundtrip() {
        let claims = AccessTokenClaims::new(
            "user-789".to_string(),
            "owner@salon.example".to_string(),
            Uuid::new_v4().to_string(),
            1640995200,
            1640998800,
        );

        let json = serde_json::to_string(&claims).expect("Should serialize");
        let deserialized: AccessTokenClaims =
            serde_json::from_str(&json).expect("Should deserialize");

        assert_eq!(claims, deserialized);
    }

    #[test]
    fn test_claims_exact_field_count() {
        let claims = AccessTokenClaims::new(
            "test".to_string(),
            "test@salon.example".to_string(),
            "test-jti".to_string(),
            0,
            0,
        );

        let json_value = serde_json::to_value(&claims).expect("Should serialize");
        let obj = json_value.as_object().expect("Should be object");

        assert_eq!(obj.len(), 5, "AccessTokenClaims should have exactly 5 fields");
        assert!(obj.contains_key("sub"));
        assert!(obj.contains_key("email"));
        assert!(obj.contains_key("jti"));
        assert!(obj.contains_key("iat"));
        assert!(obj.contains_key("exp"));
    }

    #[test]
    fn test_token_expiry_check() {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs();

        let expired = AccessTokenClaims::new(
            "user-expired".to_string(),
            "expired@salon.example".to_string(),
            Uuid::new_v4().to_string(),
            now - 3600,
            now - 1,
        );
        assert!(expired.is_expired(), "Token should be expired");

        let valid = AccessTokenClaims::new(
            "user-valid".to_string(),
            "valid@salon.example".to_string(),
            Uuid::new_v4().to_string(),
            now,
            now + 3600,
        );
        assert!(!valid.is_expired(), "Token should not be expired");
    }
}
