/// Hotel catalog endpoints
///
/// - `GET /api/hotels` - List hotels, optional `?city=` filter
/// - `GET /api/hotels/:id` - Hotel detail with embedded image gallery
///
/// Both responses carry a short public cache header; the catalog changes
/// rarely relative to how often it is browsed.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;
use wanderstay_shared::models::hotel::Hotel;

/// Cache directive on catalog responses
const CACHE_CONTROL: &str = "public, max-age=60";

/// Query parameters for listing hotels
#[derive(Debug, Deserialize)]
pub struct HotelListQuery {
    /// Filter to one city (case-insensitive)
    pub city: Option<String>,
}

/// Lists hotels, optionally filtered by city
pub async fn list_hotels(
    State(state): State<AppState>,
    Query(query): Query<HotelListQuery>,
) -> ApiResult<impl IntoResponse> {
    let hotels = Hotel::list(&state.db, query.city.as_deref()).await?;

    Ok((
        [(header::CACHE_CONTROL, CACHE_CONTROL)],
        Json(json!({ "ok": true, "hotels": hotels })),
    ))
}

/// Returns one hotel by id
///
/// # Errors
///
/// - `404 Not Found`: No hotel with that id
pub async fn get_hotel(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let hotel = Hotel::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Hotel not found".to_string()))?;

    Ok((
        [(header::CACHE_CONTROL, CACHE_CONTROL)],
        Json(json!({ "ok": true, "hotel": hotel })),
    ))
}
