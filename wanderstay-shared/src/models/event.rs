/// Event model and database operations
///
/// Events mirror hotels as the second bookable catalog: a name, location,
/// start time, ticket price, and a per-booking quantity capacity. Listing
/// supports a case-insensitive text search across name, location, and
/// description, and a caller-supplied page size capped at
/// [`MAX_LIST_TAKE`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Upper bound for the `take` list parameter
pub const MAX_LIST_TAKE: i64 = 50;

/// Event catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    /// Unique event ID
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Marketing description
    pub description: String,

    /// Venue / location text
    pub location: String,

    /// When the event starts
    pub starts_at: DateTime<Utc>,

    /// Ticket price
    pub price: f64,

    /// Maximum ticket quantity a single booking may request
    pub capacity: i32,

    /// Denormalized average review rating, one decimal
    pub rating: Option<f64>,

    /// Optional hero image URL
    pub image_url: Option<String>,

    /// Alt text for the hero image
    pub image_alt: Option<String>,

    /// When the event was added
    pub created_at: DateTime<Utc>,
}

/// Input for adding an event to the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEvent {
    /// Display name
    pub name: String,

    /// Marketing description
    pub description: String,

    /// Venue / location text
    pub location: String,

    /// When the event starts
    pub starts_at: DateTime<Utc>,

    /// Ticket price
    pub price: f64,

    /// Maximum tickets per booking
    pub capacity: i32,

    /// Optional hero image URL
    pub image_url: Option<String>,

    /// Alt text for the hero image
    pub image_alt: Option<String>,
}

impl Event {
    /// Adds an event to the catalog (seeding and tests)
    pub async fn create(pool: &PgPool, data: CreateEvent) -> Result<Self, sqlx::Error> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (name, description, location, starts_at, price, capacity, image_url, image_alt)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, description, location, starts_at, price, capacity, rating,
                      image_url, image_alt, created_at
            "#,
        )
        .bind(data.name)
        .bind(data.description)
        .bind(data.location)
        .bind(data.starts_at)
        .bind(data.price)
        .bind(data.capacity)
        .bind(data.image_url)
        .bind(data.image_alt)
        .fetch_one(pool)
        .await?;

        Ok(event)
    }

    /// Lists events, optionally text-searched, soonest first
    ///
    /// `search` matches name, location, and description case-insensitively.
    /// `take` is clamped to `1..=MAX_LIST_TAKE`.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        take: Option<i64>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let take = take.unwrap_or(MAX_LIST_TAKE).clamp(1, MAX_LIST_TAKE);

        let events = match search.map(str::trim).filter(|s| !s.is_empty()) {
            Some(search) => {
                let pattern = format!("%{}%", search);
                sqlx::query_as::<_, Event>(
                    r#"
                    SELECT id, name, description, location, starts_at, price, capacity, rating,
                           image_url, image_alt, created_at
                    FROM events
                    WHERE name ILIKE $1 OR location ILIKE $1 OR description ILIKE $1
                    ORDER BY starts_at ASC
                    LIMIT $2
                    "#,
                )
                .bind(pattern)
                .bind(take)
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Event>(
                    r#"
                    SELECT id, name, description, location, starts_at, price, capacity, rating,
                           image_url, image_alt, created_at
                    FROM events
                    ORDER BY starts_at ASC
                    LIMIT $1
                    "#,
                )
                .bind(take)
                .fetch_all(pool)
                .await?
            }
        };

        Ok(events)
    }

    /// Finds an event by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, name, description, location, starts_at, price, capacity, rating,
                   image_url, image_alt, created_at
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(event)
    }

    /// Counts events (debug/stats endpoint)
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
