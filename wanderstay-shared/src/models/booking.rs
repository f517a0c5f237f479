/// Hotel booking model and database operations
///
/// Creating a booking is a check-then-write flow: load the hotel, compare
/// the requested guest count against its capacity, insert. The whole flow
/// runs inside one transaction with the hotel row share-locked, so two
/// concurrent requests cannot both pass the capacity check against state
/// the other is about to change.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Hotel booking record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Booking {
    /// Unique booking ID
    pub id: Uuid,

    /// Booking owner; None for anonymous bookings
    pub user_id: Option<Uuid>,

    /// Booked hotel
    pub hotel_id: Uuid,

    /// Optional stay start date
    pub check_in: Option<NaiveDate>,

    /// Optional stay end date
    pub check_out: Option<NaiveDate>,

    /// Guest count; never exceeds the hotel's capacity
    pub guests: i32,

    /// Booking status; always "confirmed" on creation
    pub status: String,

    /// Contact name supplied with the booking
    pub contact_name: Option<String>,

    /// Contact email supplied with the booking
    pub contact_email: Option<String>,

    /// When the booking was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a hotel booking
///
/// Date sanity (both-or-neither, start < end) is enforced at the endpoint
/// boundary; this struct carries already-validated values.
#[derive(Debug, Clone)]
pub struct CreateBooking {
    /// Booked hotel
    pub hotel_id: Uuid,

    /// Resolved user, or None for an anonymous booking
    pub user_id: Option<Uuid>,

    /// Optional stay start date
    pub check_in: Option<NaiveDate>,

    /// Optional stay end date
    pub check_out: Option<NaiveDate>,

    /// Guest count
    pub guests: i32,

    /// Contact name
    pub contact_name: Option<String>,

    /// Contact email
    pub contact_email: Option<String>,
}

/// Error type for the booking creation flow
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// The referenced hotel does not exist
    #[error("Hotel not found")]
    HotelNotFound,

    /// Requested guest count exceeds the hotel's capacity
    #[error("Capacity exceeded: this hotel allows at most {capacity} guests")]
    CapacityExceeded {
        /// The hotel's capacity limit
        capacity: i32,
    },

    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Booking {
    /// Creates a capacity-validated booking with status "confirmed"
    ///
    /// The hotel lookup, capacity check, and insert run in one transaction;
    /// the hotel row is share-locked for its duration.
    ///
    /// # Errors
    ///
    /// - `BookingError::HotelNotFound` when the hotel id matches no row
    /// - `BookingError::CapacityExceeded` when `guests > hotel.capacity`
    /// - `BookingError::Database` on any persistence failure
    pub async fn create(pool: &PgPool, data: CreateBooking) -> Result<Self, BookingError> {
        let mut tx = pool.begin().await?;

        let capacity: Option<i32> =
            sqlx::query_scalar("SELECT capacity FROM hotels WHERE id = $1 FOR SHARE")
                .bind(data.hotel_id)
                .fetch_optional(&mut *tx)
                .await?;

        let capacity = capacity.ok_or(BookingError::HotelNotFound)?;

        if data.guests > capacity {
            return Err(BookingError::CapacityExceeded { capacity });
        }

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (user_id, hotel_id, check_in, check_out, guests, status,
                                  contact_name, contact_email)
            VALUES ($1, $2, $3, $4, $5, 'confirmed', $6, $7)
            RETURNING id, user_id, hotel_id, check_in, check_out, guests, status,
                      contact_name, contact_email, created_at
            "#,
        )
        .bind(data.user_id)
        .bind(data.hotel_id)
        .bind(data.check_in)
        .bind(data.check_out)
        .bind(data.guests)
        .bind(data.contact_name)
        .bind(data.contact_email)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(booking)
    }

    /// Counts bookings (debug/stats endpoint)
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bookings")
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
        let err = BookingError::CapacityExceeded { capacity: 2 };
        assert!(err.to_string().contains("at most 2 guests"));
    }

    #[test]
    fn test_hotel_not_found_message() {
        assert_eq!(BookingError::HotelNotFound.to_string(), "Hotel not found");
    }
}
