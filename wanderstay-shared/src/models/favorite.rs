/// Favorite model: a toggle relation on hotels
///
/// Existence of a row means the hotel is favorited by that user (or
/// anonymously when `user_id` is NULL). Toggling deletes the row when it
/// exists and inserts it otherwise; repeated identical calls alternate
/// between the two outcomes. This is a strict toggle, not an idempotent
/// set-state operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Favorite relation row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Favorite {
    /// Unique favorite ID
    pub id: Uuid,

    /// Favorited hotel
    pub hotel_id: Uuid,

    /// Owning user; None for anonymous favorites
    pub user_id: Option<Uuid>,

    /// When the favorite was created
    pub created_at: DateTime<Utc>,
}

/// Outcome of a toggle
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ToggleOutcome {
    /// A new favorite was created
    Created {
        /// The created row
        favorite: Favorite,
    },

    /// An existing favorite was removed
    Removed {
        /// ID of the removed row
        id: Uuid,
    },
}

impl Favorite {
    /// Toggles the favorite for (hotel, user)
    ///
    /// NULL user ids match other NULL user ids, so anonymous toggles for
    /// the same hotel flip a single shared row. Runs in one transaction so
    /// concurrent toggles cannot create duplicates.
    pub async fn toggle(
        pool: &PgPool,
        hotel_id: Uuid,
        user_id: Option<Uuid>,
    ) -> Result<ToggleOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let existing: Option<Uuid> = sqlx::query_scalar(
            "SELECT id FROM favorites
             WHERE hotel_id = $1 AND user_id IS NOT DISTINCT FROM $2",
        )
        .bind(hotel_id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        let outcome = match existing {
            Some(id) => {
                sqlx::query("DELETE FROM favorites WHERE id = $1")
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;

                ToggleOutcome::Removed { id }
            }
            None => {
                let favorite = sqlx::query_as::<_, Favorite>(
                    r#"
                    INSERT INTO favorites (hotel_id, user_id)
                    VALUES ($1, $2)
                    RETURNING id, hotel_id, user_id, created_at
                    "#,
                )
                .bind(hotel_id)
                .bind(user_id)
                .fetch_one(&mut *tx)
                .await?;

                ToggleOutcome::Created { favorite }
            }
        };

        tx.commit().await?;

        Ok(outcome)
    }

    /// Lists favorites, optionally restricted to one user
    pub async fn list(
        pool: &PgPool,
        user_id: Option<Uuid>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let favorites = match user_id {
            Some(user_id) => {
                sqlx::query_as::<_, Favorite>(
                    r#"
                    SELECT id, hotel_id, user_id, created_at
                    FROM favorites
                    WHERE user_id = $1
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(user_id)
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Favorite>(
                    r#"
                    SELECT id, hotel_id, user_id, created_at
                    FROM favorites
                    ORDER BY created_at DESC
                    "#,
                )
                .fetch_all(pool)
                .await?
            }
        };

        Ok(favorites)
    }

    /// Counts favorites (debug/stats endpoint)
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM favorites")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_outcome_serialization() {
        let removed = ToggleOutcome::Removed { id: Uuid::new_v4() };
        let json = serde_json::to_value(&removed).unwrap();
        assert_eq!(json["action"], "removed");
        assert!(json["id"].is_string());
    }
}
