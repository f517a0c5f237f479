/// Favorite (wishlist) endpoints
///
/// - `GET  /api/favorites` - list favorites, optionally for one user
/// - `POST /api/favorites` - toggle a hotel in/out of the list
///
/// The toggle is strict: an existing mark is removed, a missing one is
/// created, and the response reports which happened through the
/// `action` field.

use crate::{
    app::AppState,
    error::{ApiError, ApiJson, ApiResult},
};
use axum::{extract::Query, extract::State, Json};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;
use wanderstay_shared::models::{favorite::Favorite, hotel::Hotel};

/// Query parameters for `GET /api/favorites`
#[derive(Debug, Deserialize)]
pub struct FavoriteListQuery {
    /// Restrict to one user's favorites
    pub user_id: Option<Uuid>,
}

/// Toggle request body
#[derive(Debug, Deserialize)]
pub struct ToggleFavoriteRequest {
    pub hotel_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
}

/// Lists favorites, newest first
pub async fn list_favorites(
    State(state): State<AppState>,
    Query(query): Query<FavoriteListQuery>,
) -> ApiResult<Json<serde_json::Value>> {
    let favorites = Favorite::list(&state.db, query.user_id).await?;

    Ok(Json(json!({ "ok": true, "favorites": favorites })))
}

/// Toggles a hotel favorite for a user (or the anonymous bucket)
///
/// # Errors
///
/// - `400 Bad Request`: Missing hotel id
/// - `404 Not Found`: Hotel does not exist
pub async fn toggle_favorite(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ToggleFavoriteRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    let hotel_id = req
        .hotel_id
        .ok_or_else(|| ApiError::BadRequest("Hotel id is required".to_string()))?;

    Hotel::find_by_id(&state.db, hotel_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Hotel not found".to_string()))?;

    let outcome = Favorite::toggle(&state.db, hotel_id, req.user_id).await?;

    // Lift the outcome's fields (action plus favorite or id) to the top level
    let outcome = json!(outcome);
    let mut body = json!({ "ok": true });
    if let (Some(response), Some(fields)) = (body.as_object_mut(), outcome.as_object()) {
        for (key, value) in fields {
            response.insert(key.clone(), value.clone());
        }
    }

    Ok(Json(body))
}
