/// Email normalization and shape validation
///
/// Emails are stored and looked up in trimmed lowercase form, so that
/// `"A@B.com"` at registration and `"a@b.com"` at login hit the same row.
/// Validation is a deliberately basic `local@domain` shape check; anything
/// stricter belongs to a verification flow, not the write path.

/// Normalizes an email to its canonical stored form: trimmed and lowercased
///
/// # Example
///
/// ```
/// use wanderstay_shared::auth::email::normalize_email;
///
/// assert_eq!(normalize_email("  User@Example.COM "), "user@example.com");
/// ```
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Checks a basic `local@domain` shape
///
/// Requires exactly one `@` with a non-empty local part and a non-empty
/// domain containing at least one dot that is not at either end.
pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();

    let Some((local, domain)) = email.split_once('@') else {
        return Err("Invalid email address".to_string());
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err("Invalid email address".to_string());
    }

    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err("Invalid email address".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("A@B.com"), "a@b.com");
        assert_eq!(normalize_email("  spaced@domain.org  "), "spaced@domain.org");
        assert_eq!(normalize_email("already@lower.net"), "already@lower.net");
    }

    #[test]
    fn test_validate_email_accepts_basic_shapes() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("first.last@sub.domain.co").is_ok());
        assert!(validate_email(" padded@example.com ").is_ok());
    }

    #[test]
    fn test_validate_email_rejects_bad_shapes() {
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("user@nodot").is_err());
        assert!(validate_email("user@.leading").is_err());
        assert!(validate_email("user@trailing.").is_err());
        assert!(validate_email("a@b@c.com").is_err());
    }
}
