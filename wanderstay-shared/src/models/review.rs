/// Review models and rating aggregation
///
/// A review write is an upsert keyed on (entity, user): one review per user
/// per hotel or event, and a second submission overwrites the first. After
/// every write the parent entity's denormalized `rating` is recomputed as
/// the arithmetic mean of all current ratings, rounded to one decimal.
/// Upsert and recompute run inside a single transaction, so the stored
/// average is always consistent with the review set it was computed from.
///
/// Hotels and events get identical treatment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Inclusive rating bounds
pub const MIN_RATING: i32 = 1;
/// Inclusive rating bounds
pub const MAX_RATING: i32 = 5;

/// Error type for review writes
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    /// The reviewed entity does not exist
    #[error("{0} not found")]
    EntityNotFound(&'static str),

    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Fields common to creating or overwriting a review
#[derive(Debug, Clone)]
pub struct UpsertReview {
    /// Reviewed hotel or event
    pub entity_id: Uuid,

    /// Review author
    pub user_id: Uuid,

    /// Rating in [1,5], validated at the endpoint boundary
    pub rating: i32,

    /// Optional headline
    pub title: Option<String>,

    /// Review text, non-empty after trimming
    pub body: String,
}

/// A review left on a hotel
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct HotelReview {
    /// Unique review ID
    pub id: Uuid,

    /// Reviewed hotel
    pub hotel_id: Uuid,

    /// Review author
    pub user_id: Uuid,

    /// Rating in [1,5]
    pub rating: i32,

    /// Optional headline
    pub title: Option<String>,

    /// Review text
    pub body: String,

    /// When the review was first created
    pub created_at: DateTime<Utc>,
}

/// A review left on an event
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventReview {
    /// Unique review ID
    pub id: Uuid,

    /// Reviewed event
    pub event_id: Uuid,

    /// Review author
    pub user_id: Uuid,

    /// Rating in [1,5]
    pub rating: i32,

    /// Optional headline
    pub title: Option<String>,

    /// Review text
    pub body: String,

    /// When the review was first created
    pub created_at: DateTime<Utc>,
}

impl HotelReview {
    /// Lists a hotel's reviews, newest first
    pub async fn list(pool: &PgPool, hotel_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, HotelReview>(
            r#"
            SELECT id, hotel_id, user_id, rating, title, body, created_at
            FROM hotel_reviews
            WHERE hotel_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(hotel_id)
        .fetch_all(pool)
        .await
    }

    /// Upserts a review and refreshes the hotel's denormalized rating
    ///
    /// Returns the stored review and the new one-decimal average.
    ///
    /// # Errors
    ///
    /// `ReviewError::EntityNotFound` when the hotel does not exist.
    pub async fn upsert(pool: &PgPool, data: UpsertReview) -> Result<(Self, f64), ReviewError> {
        let mut tx = pool.begin().await?;

        let exists: Option<Uuid> =
            sqlx::query_scalar("SELECT id FROM hotels WHERE id = $1 FOR UPDATE")
                .bind(data.entity_id)
                .fetch_optional(&mut *tx)
                .await?;

        if exists.is_none() {
            return Err(ReviewError::EntityNotFound("Hotel"));
        }

        let review = sqlx::query_as::<_, HotelReview>(
            r#"
            INSERT INTO hotel_reviews (hotel_id, user_id, rating, title, body)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (hotel_id, user_id)
            DO UPDATE SET rating = EXCLUDED.rating, title = EXCLUDED.title, body = EXCLUDED.body
            RETURNING id, hotel_id, user_id, rating, title, body, created_at
            "#,
        )
        .bind(data.entity_id)
        .bind(data.user_id)
        .bind(data.rating)
        .bind(data.title)
        .bind(data.body)
        .fetch_one(&mut *tx)
        .await?;

        let average: f64 = sqlx::query_scalar(
            "SELECT ROUND(AVG(rating)::numeric, 1)::double precision
             FROM hotel_reviews WHERE hotel_id = $1",
        )
        .bind(data.entity_id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE hotels SET rating = $1 WHERE id = $2")
            .bind(average)
            .bind(data.entity_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok((review, average))
    }

    /// Counts hotel reviews (debug/stats endpoint)
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM hotel_reviews")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}

impl EventReview {
    /// Lists an event's reviews, newest first
    pub async fn list(pool: &PgPool, event_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, EventReview>(
            r#"
            SELECT id, event_id, user_id, rating, title, body, created_at
            FROM event_reviews
            WHERE event_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(event_id)
        .fetch_all(pool)
        .await
    }

    /// Upserts a review and refreshes the event's denormalized rating
    ///
    /// Same contract as [`HotelReview::upsert`].
    pub async fn upsert(pool: &PgPool, data: UpsertReview) -> Result<(Self, f64), ReviewError> {
        let mut tx = pool.begin().await?;

        let exists: Option<Uuid> =
            sqlx::query_scalar("SELECT id FROM events WHERE id = $1 FOR UPDATE")
                .bind(data.entity_id)
                .fetch_optional(&mut *tx)
                .await?;

        if exists.is_none() {
            return Err(ReviewError::EntityNotFound("Event"));
        }

        let review = sqlx::query_as::<_, EventReview>(
            r#"
            INSERT INTO event_reviews (event_id, user_id, rating, title, body)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (event_id, user_id)
            DO UPDATE SET rating = EXCLUDED.rating, title = EXCLUDED.title, body = EXCLUDED.body
            RETURNING id, event_id, user_id, rating, title, body, created_at
            "#,
        )
        .bind(data.entity_id)
        .bind(data.user_id)
        .bind(data.rating)
        .bind(data.title)
        .bind(data.body)
        .fetch_one(&mut *tx)
        .await?;

        let average: f64 = sqlx::query_scalar(
            "SELECT ROUND(AVG(rating)::numeric, 1)::double precision
             FROM event_reviews WHERE event_id = $1",
        )
        .bind(data.entity_id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE events SET rating = $1 WHERE id = $2")
            .bind(average)
            .bind(data.entity_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok((review, average))
    }

    /// Counts event reviews (debug/stats endpoint)
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM event_reviews")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}

/// Validates a rating is an integer in [1,5]
///
/// # Example
///
/// ```
/// use wanderstay_shared::models::review::validate_rating;
///
/// assert_eq!(validate_rating(4), Ok(4));
/// assert!(validate_rating(0).is_err());
/// assert!(validate_rating(6).is_err());
/// ```
pub fn validate_rating(rating: i64) -> Result<i32, String> {
    if (i64::from(MIN_RATING)..=i64::from(MAX_RATING)).contains(&rating) {
        Ok(rating as i32)
    } else {
        Err(format!("Rating must be {}-{}", MIN_RATING, MAX_RATING))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rating_bounds() {
        assert_eq!(validate_rating(1), Ok(1));
        assert_eq!(validate_rating(5), Ok(5));
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
        assert!(validate_rating(-3).is_err());
    }

    #[test]
    fn test_validate_rating_error_message() {
        assert_eq!(validate_rating(6).unwrap_err(), "Rating must be 1-5");
    }

    #[test]
    fn test_entity_not_found_message() {
        assert_eq!(
            ReviewError::EntityNotFound("Hotel").to_string(),
            "Hotel not found"
        );
    }
}
