//! Password hashing and bearer-token session management.

pub mod extractor;

pub use extractor::AuthUser;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};

use crate::error::{AppError, AppResult};
use crate::models::SessionClaims;

/// Session JWT issuer.
pub const SESSION_ISSUER: &str = "ignitionlab";
/// Access token lifetime (24 hours).
pub const ACCESS_TOKEN_TTL_SECS: i64 = 60 * 60 * 24;

/// Hash a password with bcrypt at the default cost.
pub fn hash_password(password: &str) -> AppResult<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::Database(format!("Failed to hash password: {}", e)))
}

/// Verify a password against a stored bcrypt hash. Malformed hashes count
/// as a mismatch.
pub fn verify_password(password: &str, hashed: &str) -> bool {
    bcrypt::verify(password, hashed).unwrap_or(false)
}

/// Create a signed access token for a username.
pub fn create_access_token(username: &str, secret: &SecretString) -> AppResult<String> {
    let now = chrono::Utc::now();
    let exp = now + chrono::Duration::seconds(ACCESS_TOKEN_TTL_SECS);

    let claims = SessionClaims {
        sub: username.to_string(),
        iss: SESSION_ISSUER.to_string(),
        exp: exp.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let key = EncodingKey::from_secret(secret.expose_secret().as_bytes());
    encode(&Header::default(), &claims, &key)
        .map_err(|e| AppError::Database(format!("Failed to create access token: {}", e)))
}

/// Verify an access token and return its claims.
pub fn verify_token(token: &str, secret: &SecretString) -> AppResult<SessionClaims> {
    let key = DecodingKey::from_secret(secret.expose_secret().as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[SESSION_ISSUER]);

    decode::<SessionClaims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|_| AppError::Unauthorized("Could not validate credentials".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret() -> SecretString {
        SecretString::from("test-secret".to_string())
    }

    #[test]
    fn test_token_round_trip() {
        let token = create_access_token("sam", &secret()).unwrap();
        let claims = verify_token(&token, &secret()).unwrap();
        assert_eq!(claims.sub, "sam");
        assert_eq!(claims.iss, SESSION_ISSUER);
    }

    #[test]
    fn test_token_rejects_wrong_secret() {
        let token = create_access_token("sam", &secret()).unwrap();
        let other = SecretString::from("different-secret".to_string());
        assert!(verify_token(&token, &other).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let now = chrono::Utc::now();
        let claims = SessionClaims {
            sub: "sam".to_string(),
            iss: SESSION_ISSUER.to_string(),
            exp: (now.timestamp() - 3600) as usize,
            iat: (now.timestamp() - 7200) as usize,
        };
        let key = EncodingKey::from_secret(secret().expose_secret().as_bytes());
        let token = encode(&Header::default(), &claims, &key).unwrap();

        assert!(verify_token(&token, &secret()).is_err());
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let now = chrono::Utc::now();
        let claims = SessionClaims {
            sub: "sam".to_string(),
            iss: "someone-else".to_string(),
            exp: (now.timestamp() + 3600) as usize,
            iat: now.timestamp() as usize,
        };
        let key = EncodingKey::from_secret(secret().expose_secret().as_bytes());
        let token = encode(&Header::default(), &claims, &key).unwrap();

        assert!(verify_token(&token, &secret()).is_err());
    }

    #[test]
    fn test_password_hash_and_verify() {
        let hashed = hash_password("IgnLabDyN@2025").unwrap();
        assert!(verify_password("IgnLabDyN@2025", &hashed));
        assert!(!verify_password("wrong", &hashed));
    }

    #[test]
    fn test_malformed_hash_counts_as_mismatch() {
        assert!(!verify_password("anything", "not-a-bcrypt-hash"));
    }
}
