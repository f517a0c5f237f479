/// Hotel model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE hotels (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     name VARCHAR(255) NOT NULL,
///     city VARCHAR(255) NOT NULL,
///     price DOUBLE PRECISION NOT NULL,
///     capacity INTEGER NOT NULL,
///     rating DOUBLE PRECISION,
///     description TEXT NOT NULL DEFAULT '',
///     images JSONB NOT NULL DEFAULT '[]',
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// `rating` is the denormalized one-decimal average over `hotel_reviews`,
/// maintained by the review upsert path (see [`crate::models::review`]).
/// `images` is an ordered JSONB list embedded directly in the row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

/// One image in a hotel's gallery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelImage {
    /// Image URL
    pub url: String,

    /// Alt text for accessibility
    pub alt: String,
}

/// Hotel catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Hotel {
    /// Unique hotel ID
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// City the hotel is in
    pub city: String,

    /// Price per night
    pub price: f64,

    /// Maximum guest count a single booking may request
    pub capacity: i32,

    /// Denormalized average review rating, one decimal; None before the
    /// first review
    pub rating: Option<f64>,

    /// Marketing description
    pub description: String,

    /// Ordered image gallery
    pub images: Json<Vec<HotelImage>>,

    /// When the hotel was added to the catalog
    pub created_at: DateTime<Utc>,
}

/// Input for adding a hotel to the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHotel {
    /// Display name
    pub name: String,

    /// City
    pub city: String,

    /// Price per night
    pub price: f64,

    /// Maximum guests per booking
    pub capacity: i32,

    /// Marketing description
    pub description: String,

    /// Ordered image gallery
    pub images: Vec<HotelImage>,
}

impl Hotel {
    /// Adds a hotel to the catalog (seeding and tests)
    pub async fn create(pool: &PgPool, data: CreateHotel) -> Result<Self, sqlx::Error> {
        let hotel = sqlx::query_as::<_, Hotel>(
            r#"
            INSERT INTO hotels (name, city, price, capacity, description, images)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, city, price, capacity, rating, description, images, created_at
            "#,
        )
        .bind(data.name)
        .bind(data.city)
        .bind(data.price)
        .bind(data.capacity)
        .bind(data.description)
        .bind(Json(data.images))
        .fetch_one(pool)
        .await?;

        Ok(hotel)
    }

    /// Lists hotels, optionally filtered by city (case-insensitive)
    pub async fn list(pool: &PgPool, city: Option<&str>) -> Result<Vec<Self>, sqlx::Error> {
        let hotels = match city {
            Some(city) => {
                sqlx::query_as::<_, Hotel>(
                    r#"
                    SELECT id, name, city, price, capacity, rating, description, images, created_at
                    FROM hotels
                    WHERE LOWER(city) = LOWER($1)
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(city)
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Hotel>(
                    r#"
                    SELECT id, name, city, price, capacity, rating, description, images, created_at
                    FROM hotels
                    ORDER BY created_at DESC
                    "#,
                )
                .fetch_all(pool)
                .await?
            }
        };

        Ok(hotels)
    }

    /// Finds a hotel by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let hotel = sqlx::query_as::<_, Hotel>(
            r#"
            SELECT id, name, city, price, capacity, rating, description, images, created_at
            FROM hotels
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(hotel)
    }

    /// Counts hotels (debug/stats endpoint)
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM hotels")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotel_image_serialization() {
        let image = HotelImage {
            url: "https://cdn.example.com/1.jpg".to_string(),
            alt: "Lobby".to_string(),
        };

        let json = serde_json::to_value(&image).unwrap();
        assert_eq!(json["url"], "https://cdn.example.com/1.jpg");
        assert_eq!(json["alt"], "Lobby");
    }

    #[test]
    fn test_images_serialize_as_plain_list() {
        // Json<Vec<_>> must serialize transparently so API responses embed
        // the gallery as a JSON array, not a wrapper object.
        let images = Json(vec![HotelImage {
            url: "u".to_string(),
            alt: "a".to_string(),
        }]);

        let json = serde_json::to_value(&images).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["url"], "u");
    }
}
