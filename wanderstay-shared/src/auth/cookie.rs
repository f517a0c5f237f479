/// Session cookie directives
///
/// The session token is delivered and presented in a single HTTP-only
/// cookie. This module builds the `Set-Cookie` directive strings and reads
/// the token back out of a request's `Cookie` header.
///
/// # Attributes
///
/// - `HttpOnly` always; the token is never readable from scripts
/// - `Secure` in production deployments
/// - `SameSite=None` when the front end lives on another site and the
///   cookie is secure, otherwise `SameSite=Lax`
/// - `Max-Age` matching the session lifetime; `Max-Age=0` clears it

use axum::http::{header, HeaderMap};
use chrono::Duration;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "wanderstay_session";

/// SameSite cookie policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    /// Same-site only
    Strict,

    /// Cross-site top-level GET allowed
    Lax,

    /// Cross-site allowed, requires Secure
    None,
}

impl SameSite {
    /// The attribute value as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Deployment-dependent cookie settings
#[derive(Debug, Clone, Copy)]
pub struct CookieOptions {
    /// Set the `Secure` attribute (production over HTTPS)
    pub secure: bool,

    /// The front end is served from a different site than the API
    pub cross_site: bool,
}

impl CookieOptions {
    /// SameSite policy implied by the deployment shape
    ///
    /// Cross-site deployments need `None`, which browsers only accept on
    /// secure cookies; everything else gets `Lax`.
    pub fn same_site(&self) -> SameSite {
        if self.cross_site && self.secure {
            SameSite::None
        } else {
            SameSite::Lax
        }
    }
}

/// Builds the `Set-Cookie` value carrying a session token
pub fn session_cookie(token: &str, max_age: Duration, options: CookieOptions) -> String {
    build_cookie(token, max_age.num_seconds(), options)
}

/// Builds the `Set-Cookie` value that clears the session (logout)
pub fn clear_session_cookie(options: CookieOptions) -> String {
    build_cookie("", 0, options)
}

fn build_cookie(value: &str, max_age_seconds: i64, options: CookieOptions) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite={}",
        SESSION_COOKIE,
        value,
        max_age_seconds,
        options.same_site().as_str()
    );

    if options.secure {
        cookie.push_str("; Secure");
    }

    cookie
}

/// Reads the session token out of a request's `Cookie` header, if present
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    let cookie_header = headers.get(header::COOKIE)?.to_str().ok()?;

    cookie_header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_same_site_selection() {
        let local = CookieOptions {
            secure: false,
            cross_site: false,
        };
        assert_eq!(local.same_site(), SameSite::Lax);

        let cross_site_secure = CookieOptions {
            secure: true,
            cross_site: true,
        };
        assert_eq!(cross_site_secure.same_site(), SameSite::None);

        // SameSite=None is only honored on secure cookies, so an insecure
        // cross-site deployment still falls back to Lax.
        let cross_site_insecure = CookieOptions {
            secure: false,
            cross_site: true,
        };
        assert_eq!(cross_site_insecure.same_site(), SameSite::Lax);
    }

    #[test]
    fn test_session_cookie_directive() {
        let options = CookieOptions {
            secure: true,
            cross_site: false,
        };
        let cookie = session_cookie("tok123", Duration::days(1), options);

        assert!(cookie.starts_with("wanderstay_session=tok123; "));
        assert!(cookie.contains("Max-Age=86400"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Secure"));
    }

    #[test]
    fn test_clear_cookie_directive() {
        let options = CookieOptions {
            secure: false,
            cross_site: false,
        };
        let cookie = clear_session_cookie(options);

        assert!(cookie.starts_with("wanderstay_session=; "));
        assert!(cookie.contains("Max-Age=0"));
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_extract_session_token() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; wanderstay_session=abc.def.ghi; lang=en"),
        );

        assert_eq!(
            extract_session_token(&headers),
            Some("abc.def.ghi".to_string())
        );
    }

    #[test]
    fn test_extract_session_token_missing() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("theme=dark"));
        assert_eq!(extract_session_token(&headers), None);

        let empty = HeaderMap::new();
        assert_eq!(extract_session_token(&empty), None);
    }

    #[test]
    fn test_extract_session_token_empty_value() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("wanderstay_session="),
        );
        assert_eq!(extract_session_token(&headers), None);
    }
}
