/// Hotel booking endpoint
///
/// `POST /api/bookings` creates a capacity-validated hotel booking.
///
/// Validation order mirrors the checks a caller can fix cheapest-first:
/// required hotel id, date sanity, guest count normalization, then the
/// hotel lookup and capacity check inside the model's transaction.
///
/// Identity is optional here: a resolved user owns the booking, and with
/// no identity the booking is accepted only when anonymous bookings are
/// explicitly enabled in config (stored with a NULL user id).

use crate::{
    app::AppState,
    error::{ApiError, ApiJson, ApiResult},
};
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;
use wanderstay_shared::{
    auth::identity::resolve_identity,
    models::booking::{Booking, CreateBooking},
};

/// Default guest count when the caller supplies none
const DEFAULT_GUESTS: i64 = 2;

/// Create-booking request body
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    /// Hotel to book (required)
    pub hotel_id: Option<Uuid>,

    /// Optional stay start date (YYYY-MM-DD)
    pub check_in: Option<NaiveDate>,

    /// Optional stay end date (YYYY-MM-DD)
    pub check_out: Option<NaiveDate>,

    /// Guest count; defaults to 2, non-positive values fall back to 1
    pub guests: Option<i64>,

    /// Optional contact name
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub contact_name: Option<String>,

    /// Optional contact email
    #[validate(email(message = "must be a valid email"))]
    pub contact_email: Option<String>,
}

/// Creates a hotel booking
///
/// # Errors
///
/// - `400 Bad Request`: Missing hotel id, invalid date range, capacity
///   exceeded
/// - `401 Unauthorized`: No identity and anonymous bookings disabled
/// - `404 Not Found`: Hotel does not exist
pub async fn create_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(req): ApiJson<CreateBookingRequest>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    req.validate().map_err(ApiError::from_validation)?;

    let hotel_id = req
        .hotel_id
        .ok_or_else(|| ApiError::BadRequest("Hotel id is required".to_string()))?;

    // Dates come both-or-neither, and a stay must end after it starts.
    match (req.check_in, req.check_out) {
        (Some(check_in), Some(check_out)) if check_in >= check_out => {
            return Err(ApiError::BadRequest(
                "Check-out must be after check-in".to_string(),
            ));
        }
        (Some(_), None) | (None, Some(_)) => {
            return Err(ApiError::BadRequest(
                "Both check-in and check-out are required when dates are supplied".to_string(),
            ));
        }
        _ => {}
    }

    let guests = normalize_guests(req.guests);

    let user = resolve_identity(&state.db, &headers, state.session_secret()).await?;

    let user_id = match user {
        Some(user) => Some(user.id),
        None if state.config.bookings.allow_anonymous => None,
        None => {
            return Err(ApiError::Unauthorized(
                "Login required to create a booking".to_string(),
            ));
        }
    };

    let booking = Booking::create(
        &state.db,
        CreateBooking {
            hotel_id,
            user_id,
            check_in: req.check_in,
            check_out: req.check_out,
            guests,
            contact_name: req.contact_name,
            contact_email: req.contact_email,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "ok": true, "booking": booking })),
    ))
}

/// Normalizes the requested guest count
///
/// Missing → 2; supplied but not a positive number → 1; anything above
/// `i32::MAX` is capped (the capacity check rejects it anyway).
fn normalize_guests(guests: Option<i64>) -> i32 {
    match guests.unwrap_or(DEFAULT_GUESTS) {
        g if g >= 1 => g.min(i64::from(i32::MAX)) as i32,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_guests_default() {
        assert_eq!(normalize_guests(None), 2);
    }

    #[test]
    fn test_normalize_guests_positive_passthrough() {
        assert_eq!(normalize_guests(Some(1)), 1);
        assert_eq!(normalize_guests(Some(4)), 4);
    }

    #[test]
    fn test_normalize_guests_non_positive_falls_back_to_one() {
        assert_eq!(normalize_guests(Some(0)), 1);
        assert_eq!(normalize_guests(Some(-7)), 1);
    }

    #[test]
    fn test_normalize_guests_caps_huge_values() {
        assert_eq!(normalize_guests(Some(i64::MAX)), i32::MAX);
    }
}
