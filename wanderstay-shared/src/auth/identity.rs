/// Resolving the calling user from a request
///
/// Precedence:
/// 1. Signed session cookie: verify signature and expiry, then load the
///    subject user by id.
/// 2. Explicit identity headers (`x-user-id`, then `x-user-email`) as a
///    fallback for trusted callers and tooling.
/// 3. Otherwise unauthenticated.
///
/// A bad or expired token, or a token whose subject no longer exists, is
/// never a hard failure: resolution falls through to the next source and
/// ultimately to `None`. Only database errors propagate.

use axum::http::HeaderMap;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::auth::{cookie, email::normalize_email, session};
use crate::models::user::User;

/// Trusted-caller fallback header carrying a user id
pub const USER_ID_HEADER: &str = "x-user-id";

/// Trusted-caller fallback header carrying a user email
pub const USER_EMAIL_HEADER: &str = "x-user-email";

/// Resolves the calling user, or `None` when unauthenticated
///
/// Pure read: no side effects on any store.
///
/// # Errors
///
/// Returns an error only when a user lookup fails at the database level.
pub async fn resolve_identity(
    pool: &PgPool,
    headers: &HeaderMap,
    session_secret: &str,
) -> Result<Option<User>, sqlx::Error> {
    // 1. Session cookie.
    if let Some(token) = cookie::extract_session_token(headers) {
        match session::verify_token(&token, session_secret) {
            Ok(claims) => {
                if let Some(user) = User::find_by_id(pool, claims.sub).await? {
                    return Ok(Some(user));
                }
                debug!(user_id = %claims.sub, "Session subject no longer exists");
            }
            Err(e) => {
                debug!("Session token rejected: {}", e);
            }
        }
    }

    // 2. Identity headers.
    if let Some(id) = header_value(headers, USER_ID_HEADER).and_then(|v| Uuid::parse_str(&v).ok())
    {
        if let Some(user) = User::find_by_id(pool, id).await? {
            return Ok(Some(user));
        }
    }

    if let Some(email) = header_value(headers, USER_EMAIL_HEADER) {
        if let Some(user) = User::find_by_email(pool, &normalize_email(&email)).await? {
            return Ok(Some(user));
        }
    }

    // 3. Unauthenticated.
    Ok(None)
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Reconstructs a display name from an email's local part
///
/// Splits the local part on `.`, `_`, and `-`, capitalizes each token, and
/// joins with spaces. Used as the last-resort contact name on bookings.
///
/// # Example
///
/// ```
/// use wanderstay_shared::auth::identity::name_from_email;
///
/// assert_eq!(name_from_email("jane.doe@example.com"), "Jane Doe");
/// assert_eq!(name_from_email("mark_twain@example.com"), "Mark Twain");
/// ```
pub fn name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);

    local
        .split(['.', '_', '-'])
        .filter(|token| !token.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_name_from_email_separators() {
        assert_eq!(name_from_email("jane.doe@example.com"), "Jane Doe");
        assert_eq!(name_from_email("mark_twain@example.com"), "Mark Twain");
        assert_eq!(name_from_email("mary-jane@example.com"), "Mary Jane");
        assert_eq!(name_from_email("a.b-c_d@example.com"), "A B C D");
    }

    #[test]
    fn test_name_from_email_single_token() {
        assert_eq!(name_from_email("ada@example.com"), "Ada");
    }

    #[test]
    fn test_name_from_email_collapses_empty_tokens() {
        assert_eq!(name_from_email("jane..doe@example.com"), "Jane Doe");
        assert_eq!(name_from_email(".leading@example.com"), "Leading");
    }

    #[test]
    fn test_name_from_email_no_at_sign() {
        assert_eq!(name_from_email("just-a-name"), "Just A Name");
    }

    #[test]
    fn test_header_value_trims_and_rejects_empty() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_EMAIL_HEADER, HeaderValue::from_static("  a@b.com  "));
        headers.insert(USER_ID_HEADER, HeaderValue::from_static("   "));

        assert_eq!(
            header_value(&headers, USER_EMAIL_HEADER).as_deref(),
            Some("a@b.com")
        );
        assert_eq!(header_value(&headers, USER_ID_HEADER), None);
        assert_eq!(header_value(&headers, "x-missing"), None);
    }

    // resolve_identity paths that touch the database are covered by the
    // api crate's router tests (unauthenticated short-circuits) and by
    // deployment smoke tests.
}
