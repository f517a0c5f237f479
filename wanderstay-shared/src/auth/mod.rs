/// Authentication primitives for Wanderstay
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`email`]: Email normalization and shape validation
/// - [`session`]: Signed session token issue and verification
/// - [`cookie`]: Session cookie directives (HttpOnly/Secure/SameSite)
/// - [`identity`]: Resolving the calling user from cookies and headers
///
/// # Example
///
/// ```no_run
/// use wanderstay_shared::auth::password::{hash_password, verify_password};
/// use wanderstay_shared::auth::session::{issue_token, verify_token};
/// use uuid::Uuid;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("hunter42")?;
/// assert!(verify_password("hunter42", &hash)?);
///
/// let token = issue_token(Uuid::new_v4(), false, "secret-key")?;
/// let claims = verify_token(&token, "secret-key")?;
/// # Ok(())
/// # }
/// ```

pub mod cookie;
pub mod email;
pub mod identity;
pub mod password;
pub mod session;
