/// User model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     email VARCHAR(255) NOT NULL UNIQUE,
///     password_hash VARCHAR(255) NOT NULL,
///     first_name VARCHAR(100),
///     last_name VARCHAR(100),
///     date_of_birth DATE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// Emails are stored in trimmed lowercase form (see
/// [`crate::auth::email::normalize_email`]); callers normalize before both
/// writes and lookups. Users are never hard-deleted in the normal flow.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// User account
///
/// The password hash never leaves the server: it is skipped during
/// serialization so handlers can return the record as-is.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID v4)
    pub id: Uuid,

    /// Email address, unique, stored lowercase
    pub email: String,

    /// Argon2id password hash
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Optional first name
    pub first_name: Option<String>,

    /// Optional last name
    pub last_name: Option<String>,

    /// Optional date of birth
    pub date_of_birth: Option<NaiveDate>,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Normalized email address
    pub email: String,

    /// Argon2id password hash (NOT a plaintext password)
    pub password_hash: String,

    /// Optional first name
    pub first_name: Option<String>,

    /// Optional last name
    pub last_name: Option<String>,

    /// Optional date of birth
    pub date_of_birth: Option<NaiveDate>,
}

impl User {
    /// Creates a new user
    ///
    /// # Errors
    ///
    /// A duplicate email surfaces as a unique-constraint database error,
    /// which the API layer maps to 409 Conflict.
    pub async fn create(pool: &PgPool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, first_name, last_name, date_of_birth)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, email, password_hash, first_name, last_name, date_of_birth, created_at
            "#,
        )
        .bind(data.email)
        .bind(data.password_hash)
        .bind(data.first_name)
        .bind(data.last_name)
        .bind(data.date_of_birth)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, first_name, last_name, date_of_birth, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by normalized email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, first_name, last_name, date_of_birth, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// The user's full display name, when any name parts are present
    ///
    /// # Example
    ///
    /// ```
    /// # use wanderstay_shared::models::user::User;
    /// # use chrono::Utc;
    /// # use uuid::Uuid;
    /// let user = User {
    ///     id: Uuid::new_v4(),
    ///     email: "ada@example.com".to_string(),
    ///     password_hash: String::new(),
    ///     first_name: Some("Ada".to_string()),
    ///     last_name: Some("Lovelace".to_string()),
    ///     date_of_birth: None,
    ///     created_at: Utc::now(),
    /// };
    /// assert_eq!(user.full_name().as_deref(), Some("Ada Lovelace"));
    /// ```
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .first_name
            .as_deref()
            .into_iter()
            .chain(self.last_name.as_deref())
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// Counts total users (debug/stats endpoint)
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_names(first: Option<&str>, last: Option<&str>) -> User {
        User {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            password_hash: "hash".to_string(),
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
            date_of_birth: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_full_name_both_parts() {
        let user = user_with_names(Some("Ada"), Some("Lovelace"));
        assert_eq!(user.full_name().as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_full_name_single_part() {
        assert_eq!(
            user_with_names(Some("Ada"), None).full_name().as_deref(),
            Some("Ada")
        );
        assert_eq!(
            user_with_names(None, Some("Lovelace")).full_name().as_deref(),
            Some("Lovelace")
        );
    }

    #[test]
    fn test_full_name_empty() {
        assert!(user_with_names(None, None).full_name().is_none());
        assert!(user_with_names(Some("  "), Some("")).full_name().is_none());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = user_with_names(Some("Ada"), None);
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "test@example.com");
    }

    // Database CRUD is exercised against a live PostgreSQL in deployment
    // smoke tests; unit tests cover the pure helpers only.
}
