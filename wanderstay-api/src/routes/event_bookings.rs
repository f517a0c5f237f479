/// Event booking endpoint
///
/// `POST /api/event-bookings` books tickets for an event. Unlike hotel
/// bookings, these always require a resolved identity (session cookie or
/// trusted-caller headers).
///
/// Contact details fall back caller → user profile → email-derived name,
/// so the stored booking always carries something usable.

use crate::{
    app::AppState,
    error::{ApiError, ApiJson, ApiResult},
};
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;
use wanderstay_shared::{
    auth::identity::{name_from_email, resolve_identity},
    models::event_booking::{CreateEventBooking, EventBooking},
};

/// Create-event-booking request body
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventBookingRequest {
    /// Event to book (required)
    pub event_id: Option<Uuid>,

    /// Ticket quantity; defaults to 1, must be >= 1
    pub quantity: Option<i64>,

    /// Optional contact name override
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub contact_name: Option<String>,

    /// Optional contact email override
    #[validate(email(message = "must be a valid email"))]
    pub contact_email: Option<String>,
}

/// Creates an event ticket booking
///
/// # Errors
///
/// - `400 Bad Request`: Missing event id, quantity below 1 or above the
///   event's capacity
/// - `401 Unauthorized`: No resolvable identity
/// - `404 Not Found`: Event does not exist
pub async fn create_event_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(req): ApiJson<CreateEventBookingRequest>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    req.validate().map_err(ApiError::from_validation)?;

    let user = resolve_identity(&state.db, &headers, state.session_secret())
        .await?
        .ok_or_else(|| {
            ApiError::Unauthorized("Login required to book an event".to_string())
        })?;

    let event_id = req
        .event_id
        .ok_or_else(|| ApiError::BadRequest("Event id is required".to_string()))?;

    let quantity = match req.quantity.unwrap_or(1) {
        q if q >= 1 => q.min(i64::from(i32::MAX)) as i32,
        _ => {
            return Err(ApiError::BadRequest(
                "Quantity must be at least 1".to_string(),
            ));
        }
    };

    let contact_name = req
        .contact_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .or_else(|| user.full_name())
        .unwrap_or_else(|| name_from_email(&user.email));

    let contact_email = req
        .contact_email
        .map(|email| email.trim().to_string())
        .filter(|email| !email.is_empty())
        .unwrap_or_else(|| user.email.clone());

    let booking = EventBooking::create(
        &state.db,
        CreateEventBooking {
            event_id,
            user_id: user.id,
            quantity,
            contact_name,
            contact_email,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "ok": true, "booking": booking })),
    ))
}
