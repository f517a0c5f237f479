/// Password hashing using Argon2id
///
/// Passwords are stored only as PHC-format Argon2id hashes with a random
/// per-password salt. Verification is delegated to the argon2 crate, which
/// performs a constant-time comparison.
///
/// # Example
///
/// ```
/// use wanderstay_shared::auth::password::{hash_password, verify_password};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("super_secret_password")?;
/// assert!(verify_password("super_secret_password", &hash)?);
/// assert!(!verify_password("wrong_password", &hash)?);
/// # Ok(())
/// # }
/// ```

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Minimum accepted password length for registration
pub const MIN_PASSWORD_LEN: usize = 6;

/// Error type for password hashing operations
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    /// Failed to hash password
    #[error("Failed to hash password: {0}")]
    HashError(String),

    /// Failed to verify password
    #[error("Failed to verify password: {0}")]
    VerifyError(String),

    /// Invalid password hash format
    #[error("Invalid password hash format: {0}")]
    InvalidHash(String),
}

/// Hashes a password with Argon2id and a fresh random salt
///
/// Returns a PHC string (`$argon2id$v=19$...`) that embeds the algorithm,
/// parameters, and salt alongside the hash.
///
/// # Errors
///
/// Returns `PasswordError::HashError` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::HashError(format!("Hash generation failed: {}", e)))?;

    Ok(password_hash.to_string())
}

/// Verifies a plaintext password against a stored hash
///
/// `Ok(false)` means the password simply does not match; an `Err` means the
/// stored hash itself is malformed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| PasswordError::InvalidHash(format!("Failed to parse hash: {}", e)))?;

    let argon2 = Argon2::default();

    match argon2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(_) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::VerifyError(format!(
            "Verification failed: {}",
            e
        ))),
    }
}

/// Validates a registration password
///
/// The only rule is a minimum length of [`MIN_PASSWORD_LEN`] characters.
///
/// # Example
///
/// ```
/// use wanderstay_shared::auth::password::validate_password;
///
/// assert!(validate_password("abcdef").is_ok());
/// assert!(validate_password("abc").is_err());
/// ```
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LEN
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_format() {
        let hash = hash_password("test_password_123").expect("Hash should succeed");
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_hash_password_produces_different_salts() {
        let hash1 = hash_password("same_password").expect("Hash 1 should succeed");
        let hash2 = hash_password("same_password").expect("Hash 2 should succeed");
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_verify_password_correct() {
        let hash = hash_password("correct_password").expect("Hash should succeed");
        assert!(verify_password("correct_password", &hash).expect("Verify should succeed"));
    }

    #[test]
    fn test_verify_password_incorrect() {
        let hash = hash_password("correct_password").expect("Hash should succeed");
        assert!(!verify_password("wrong_password", &hash).expect("Verify should succeed"));
    }

    #[test]
    fn test_verify_password_invalid_hash() {
        assert!(verify_password("password", "not-a-phc-string").is_err());
    }

    #[test]
    fn test_validate_password_minimum_length() {
        assert!(validate_password("abcdef").is_ok());
        assert!(validate_password("abcdefgh_longer").is_ok());

        let err = validate_password("abcde").unwrap_err();
        assert!(err.contains("at least 6"));
    }

    #[test]
    fn test_hash_verify_roundtrip() {
        let passwords = vec!["simple", "with spaces", "with-special-chars!@#", "密码123"];

        for password in passwords {
            let hash = hash_password(password).expect("Hash should succeed");
            assert!(
                verify_password(password, &hash).expect("Verify should succeed"),
                "Password '{}' should verify",
                password
            );
        }
    }
}
