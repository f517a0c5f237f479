/// Event catalog endpoints
///
/// - `GET /api/events` - List events; `?q=` text search over name,
///   location, and description; `?take=` page size capped at 50
/// - `GET /api/events/:id` - Event detail

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;
use wanderstay_shared::models::event::Event;

/// Query parameters for listing events
#[derive(Debug, Deserialize)]
pub struct EventListQuery {
    /// Free-text search over name, location, and description
    pub q: Option<String>,

    /// Maximum rows to return; clamped to 1..=50
    pub take: Option<i64>,
}

/// Lists events, soonest first
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<EventListQuery>,
) -> ApiResult<Json<serde_json::Value>> {
    let events = Event::list(&state.db, query.q.as_deref(), query.take).await?;

    Ok(Json(json!({ "ok": true, "events": events })))
}

/// Returns one event by id
///
/// # Errors
///
/// - `404 Not Found`: No event with that id
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<serde_json::Value>> {
    let event = Event::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;

    Ok(Json(json!({ "ok": true, "event": event })))
}
