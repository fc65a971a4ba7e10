//! Session token generation and validation

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Session token claims
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// User ID
    pub sub: String,
    pub email: String,
    /// Access id of the backing `user_session` row
    pub jti: String,
    /// Expiration timestamp
    pub exp: u64,
}

pub fn generate_token(
    user_id: impl Into<String>,
    email: impl Into<String>,
    access_id: impl Into<String>,
    secret: &str,
    lifetime_seconds: u64,
) -> udb_shared::Result<String> {
    let now: u64 = udb_shared::now_timestamp().try_into().unwrap_or_default();

    let claims = Claims {
        sub: user_id.into(),
        email: email.into(),
        jti: access_id.into(),
        exp: now + lifetime_seconds,
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}

pub fn validate_token(token: &str, secret: &str) -> udb_shared::Result<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-at-least-32-characters-long";

    #[test]
    fn test_generate_and_validate_token() {
        let token = generate_token("user-1", "a@b.com", "access-1", SECRET, 3600).unwrap();
        let claims = validate_token(&token, SECRET).unwrap();

        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.email, "a@b.com");
        assert_eq!(claims.jti, "access-1");
    }

    #[test]
    fn test_validate_token_wrong_secret() {
        let token = generate_token("user-1", "a@b.com", "access-1", SECRET, 3600).unwrap();

        assert!(validate_token(&token, "another-secret-key-at-least-32-characters").is_err());
        assert!(validate_token("garbage", SECRET).is_err());
    }

    #[test]
    fn test_validate_token_expired() {
        let now = udb_shared::now_timestamp() as u64;
        let claims = Claims {
            sub: "user-1".to_owned(),
            email: "a@b.com".to_owned(),
            jti: "access-1".to_owned(),
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(validate_token(&token, SECRET).is_err());
    }
}
