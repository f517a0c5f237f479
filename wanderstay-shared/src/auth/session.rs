/// Session token issue and verification
///
/// Sessions are signed JWTs (HS256) carrying the user id as subject. The
/// token travels in an HTTP-only cookie (see [`crate::auth::cookie`]), not
/// in an Authorization header.
///
/// # Lifetimes
///
/// - Default session: 1 day
/// - "Remember me" session: 30 days
///
/// # Example
///
/// ```
/// use wanderstay_shared::auth::session::{issue_token, verify_token};
/// use uuid::Uuid;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let user_id = Uuid::new_v4();
/// let token = issue_token(user_id, false, "secret-key-at-least-32-bytes!!!")?;
///
/// let claims = verify_token(&token, "secret-key-at-least-32-bytes!!!")?;
/// assert_eq!(claims.sub, user_id);
/// # Ok(())
/// # }
/// ```

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token issuer claim value
const ISSUER: &str = "wanderstay";

/// Error type for session token operations
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Failed to create token
    #[error("Failed to create session token: {0}")]
    CreateError(String),

    /// Token failed signature or structural validation
    #[error("Invalid session token: {0}")]
    ValidationError(String),

    /// Token has expired
    #[error("Session token has expired")]
    Expired,
}

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject - user ID
    pub sub: Uuid,

    /// Issuer - always "wanderstay"
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl SessionClaims {
    /// Creates claims for a user with the lifetime implied by `remember`
    pub fn new(user_id: Uuid, remember: bool) -> Self {
        let now = Utc::now();
        let expiration = now + session_lifetime(remember);

        Self {
            sub: user_id,
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Checks if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Session lifetime for the given remember flag
///
/// 1 day by default, 30 days for remembered sessions.
pub fn session_lifetime(remember: bool) -> Duration {
    if remember {
        Duration::days(30)
    } else {
        Duration::days(1)
    }
}

/// Issues a signed session token for a user
///
/// # Errors
///
/// Returns `SessionError::CreateError` if encoding fails.
pub fn issue_token(user_id: Uuid, remember: bool, secret: &str) -> Result<String, SessionError> {
    let claims = SessionClaims::new(user_id, remember);
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, &claims, &key)
        .map_err(|e| SessionError::CreateError(format!("Token encoding failed: {}", e)))
}

/// Verifies a session token and extracts its claims
///
/// Checks the signature, expiration, and issuer.
///
/// # Errors
///
/// Returns `SessionError::Expired` for expired tokens and
/// `SessionError::ValidationError` for anything else that fails.
pub fn verify_token(token: &str, secret: &str) -> Result<SessionClaims, SessionError> {
    let key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);
    validation.validate_exp = true;

    let token_data = decode::<SessionClaims>(token, &key, &validation).map_err(|e| {
        match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionError::Expired,
            _ => SessionError::ValidationError(format!("Token validation failed: {}", e)),
        }
    })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-at-least-32-bytes-long";

    #[test]
    fn test_session_lifetime() {
        assert_eq!(session_lifetime(false), Duration::days(1));
        assert_eq!(session_lifetime(true), Duration::days(30));
    }

    #[test]
    fn test_claims_creation() {
        let user_id = Uuid::new_v4();
        let claims = SessionClaims::new(user_id, false);

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.iss, "wanderstay");
        assert!(!claims.is_expired());
        assert!(claims.exp - claims.iat >= Duration::days(1).num_seconds());
    }

    #[test]
    fn test_remember_extends_expiry() {
        let user_id = Uuid::new_v4();
        let short = SessionClaims::new(user_id, false);
        let long = SessionClaims::new(user_id, true);

        assert!(long.exp > short.exp);
    }

    #[test]
    fn test_issue_and_verify_token() {
        let user_id = Uuid::new_v4();
        let token = issue_token(user_id, false, SECRET).expect("Should issue token");

        let claims = verify_token(&token, SECRET).expect("Should verify token");
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.iss, "wanderstay");
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let token = issue_token(Uuid::new_v4(), false, SECRET).expect("Should issue token");
        assert!(verify_token(&token, "a-completely-different-secret-key").is_err());
    }

    #[test]
    fn test_verify_garbage_token() {
        let result = verify_token("not.a.jwt", SECRET);
        assert!(matches!(result, Err(SessionError::ValidationError(_))));
    }

    #[test]
    fn test_expired_token_rejected() {
        // Hand-build claims that expired an hour ago.
        let now = Utc::now();
        let claims = SessionClaims {
            sub: Uuid::new_v4(),
            iss: "wanderstay".to_string(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        assert!(claims.is_expired());

        let header = Header::new(Algorithm::HS256);
        let key = EncodingKey::from_secret(SECRET.as_bytes());
        let token = encode(&header, &claims, &key).unwrap();

        let result = verify_token(&token, SECRET);
        assert!(matches!(result, Err(SessionError::Expired)));
    }
}
