use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

pub const SESSION_COOKIE: &str = "session";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub name: String,
    pub exp: usize,
}

pub fn issue_token(user_id: Uuid, name: &str, secret: &str, ttl_hours: i64) -> Result<String> {
    let claims = Claims {
        sub: user_id,
        name: name.to_string(),
        exp: (Utc::now() + Duration::hours(ttl_hours)).timestamp().max(0) as usize,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| Error::Internal(format!("failed to sign session token: {}", e)))
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
        .map(|data| data.claims)
        .map_err(|_| Error::Unauthorized("Invalid or expired session".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-session-secret";

    #[test]
    fn issued_token_verifies() {
        let id = Uuid::new_v4();
        let token = issue_token(id, "Ada", SECRET, 1).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, id);
        assert_eq!(claims.name, "Ada");
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue_token(Uuid::new_v4(), "Ada", SECRET, 1).unwrap();
        assert!(matches!(
            verify_token(&token, "other-secret"),
            Err(Error::Unauthorized(_))
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        // Past the default 60s leeway.
        let token = issue_token(Uuid::new_v4(), "Ada", SECRET, -2).unwrap();
        assert!(verify_token(&token, SECRET).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(verify_token("not.a.jwt", SECRET).is_err());
    }
}
