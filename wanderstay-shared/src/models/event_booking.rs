/// Event booking model and database operations
///
/// Event bookings always belong to an authenticated user. Total cost is
/// computed here as `price * quantity` from the event row read inside the
/// same transaction as the insert, so the charged price is the one the
/// capacity check saw.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Event ticket booking record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventBooking {
    /// Unique booking ID
    pub id: Uuid,

    /// Booking owner
    pub user_id: Uuid,

    /// Booked event
    pub event_id: Uuid,

    /// Ticket quantity; between 1 and the event's capacity
    pub quantity: i32,

    /// Ticket price times quantity at booking time
    pub total_cost: f64,

    /// Contact name on the booking
    pub contact_name: String,

    /// Contact email on the booking
    pub contact_email: String,

    /// When the booking was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating an event booking
#[derive(Debug, Clone)]
pub struct CreateEventBooking {
    /// Booked event
    pub event_id: Uuid,

    /// Resolved, authenticated user
    pub user_id: Uuid,

    /// Ticket quantity (>= 1, validated at the endpoint boundary)
    pub quantity: i32,

    /// Contact name on the booking
    pub contact_name: String,

    /// Contact email on the booking
    pub contact_email: String,
}

/// Error type for the event booking flow
#[derive(Debug, thiserror::Error)]
pub enum EventBookingError {
    /// The referenced event does not exist
    #[error("Event not found")]
    EventNotFound,

    /// Requested quantity exceeds the event's capacity
    #[error("Capacity exceeded: this event allows at most {capacity} tickets")]
    CapacityExceeded {
        /// The event's capacity limit
        capacity: i32,
    },

    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl EventBooking {
    /// Creates a capacity-validated event booking
    ///
    /// Runs the event lookup, capacity check, cost computation, and insert
    /// in one transaction with the event row share-locked.
    ///
    /// # Errors
    ///
    /// - `EventBookingError::EventNotFound` when the event id matches no row
    /// - `EventBookingError::CapacityExceeded` when `quantity > capacity`
    /// - `EventBookingError::Database` on any persistence failure
    pub async fn create(
        pool: &PgPool,
        data: CreateEventBooking,
    ) -> Result<Self, EventBookingError> {
        let mut tx = pool.begin().await?;

        let row: Option<(f64, i32)> =
            sqlx::query_as("SELECT price, capacity FROM events WHERE id = $1 FOR SHARE")
                .bind(data.event_id)
                .fetch_optional(&mut *tx)
                .await?;

        let (price, capacity) = row.ok_or(EventBookingError::EventNotFound)?;

        if data.quantity > capacity {
            return Err(EventBookingError::CapacityExceeded { capacity });
        }

        let total_cost = price * f64::from(data.quantity);

        let booking = sqlx::query_as::<_, EventBooking>(
            r#"
            INSERT INTO event_bookings (user_id, event_id, quantity, total_cost,
                                        contact_name, contact_email)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, event_id, quantity, total_cost,
                      contact_name, contact_email, created_at
            "#,
        )
        .bind(data.user_id)
        .bind(data.event_id)
        .bind(data.quantity)
        .bind(total_cost)
        .bind(data.contact_name)
        .bind(data.contact_email)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(booking)
    }

    /// Counts event bookings (debug/stats endpoint)
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM event_bookings")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_exceeded_names_the_limit() {
        let err = EventBookingError::CapacityExceeded { capacity: 8 };
        assert!(err.to_string().contains("at most 8 tickets"));
    }
}
