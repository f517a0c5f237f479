/// Debug endpoints
///
/// `GET /api/debug/stats` reports row counts per table. Intended for
/// development and smoke checks, not for dashboards.

use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, Json};
use serde_json::json;
use wanderstay_shared::models::{
    booking::Booking, event::Event, event_booking::EventBooking, favorite::Favorite,
    hotel::Hotel, review::{EventReview, HotelReview}, user::User,
};

/// Row counts for every table the API writes to
pub async fn stats(State(state): State<AppState>) -> ApiResult<Json<serde_json::Value>> {
    let users = User::count(&state.db).await?;
    let hotels = Hotel::count(&state.db).await?;
    let events = Event::count(&state.db).await?;
    let bookings = Booking::count(&state.db).await?;
    let event_bookings = EventBooking::count(&state.db).await?;
    let hotel_reviews = HotelReview::count(&state.db).await?;
    let event_reviews = EventReview::count(&state.db).await?;
    let favorites = Favorite::count(&state.db).await?;

    Ok(Json(json!({
        "ok": true,
        "stats": {
            "users": users,
            "hotels": hotels,
            "events": events,
            "bookings": bookings,
            "event_bookings": event_bookings,
            "hotel_reviews": hotel_reviews,
            "event_reviews": event_reviews,
            "favorites": favorites,
        }
    })))
}
