/// Review endpoints for hotels and events
///
/// - `GET  /api/hotels/:id/reviews` / `GET /api/events/:id/reviews`
/// - `POST /api/hotels/:id/reviews` / `POST /api/events/:id/reviews`
///
/// A POST is an upsert keyed on (entity, user): submitting twice
/// overwrites rather than duplicates. Every write refreshes the entity's
/// denormalized average rating inside the same transaction; the response
/// includes the new average so clients need no follow-up read.

use crate::{
    app::AppState,
    error::{ApiError, ApiJson, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;
use wanderstay_shared::{
    auth::identity::resolve_identity,
    models::{
        event::Event,
        hotel::Hotel,
        review::{validate_rating, EventReview, HotelReview, UpsertReview},
    },
};

/// Review request body
#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    /// Rating, integer 1-5
    pub rating: Option<i64>,

    /// Optional headline
    pub title: Option<String>,

    /// Review text; required, non-empty after trimming
    pub body: Option<String>,
}

/// Validated review fields shared by both entity kinds
#[derive(Debug)]
struct ValidatedReview {
    rating: i32,
    title: Option<String>,
    body: String,
}

fn validate_review(req: ReviewRequest) -> Result<ValidatedReview, ApiError> {
    let rating = req
        .rating
        .ok_or_else(|| ApiError::BadRequest("Rating must be 1-5".to_string()))
        .and_then(|r| validate_rating(r).map_err(ApiError::BadRequest))?;

    let body = req
        .body
        .map(|body| body.trim().to_string())
        .filter(|body| !body.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Review text is required".to_string()))?;

    let title = req
        .title
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty());

    Ok(ValidatedReview {
        rating,
        title,
        body,
    })
}

/// Lists a hotel's reviews, newest first
///
/// # Errors
///
/// - `404 Not Found`: Hotel does not exist
pub async fn list_hotel_reviews(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<serde_json::Value>> {
    Hotel::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Hotel not found".to_string()))?;

    let reviews = HotelReview::list(&state.db, id).await?;

    Ok(Json(json!({ "ok": true, "reviews": reviews })))
}

/// Creates or overwrites the caller's review of a hotel
///
/// # Errors
///
/// - `400 Bad Request`: Rating outside 1-5 or missing review text
/// - `401 Unauthorized`: No resolvable identity
/// - `404 Not Found`: Hotel does not exist
pub async fn post_hotel_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    ApiJson(req): ApiJson<ReviewRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    let validated = validate_review(req)?;

    let user = resolve_identity(&state.db, &headers, state.session_secret())
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Login required to review".to_string()))?;

    let (review, rating) = HotelReview::upsert(
        &state.db,
        UpsertReview {
            entity_id: id,
            user_id: user.id,
            rating: validated.rating,
            title: validated.title,
            body: validated.body,
        },
    )
    .await?;

    Ok(Json(
        json!({ "ok": true, "review": review, "rating": rating }),
    ))
}

/// Lists an event's reviews, newest first
///
/// # Errors
///
/// - `404 Not Found`: Event does not exist
pub async fn list_event_reviews(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<serde_json::Value>> {
    Event::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;

    let reviews = EventReview::list(&state.db, id).await?;

    Ok(Json(json!({ "ok": true, "reviews": reviews })))
}

/// Creates or overwrites the caller's review of an event
///
/// Same contract as [`post_hotel_review`]; events get the same
/// denormalized rating refresh as hotels.
pub async fn post_event_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    ApiJson(req): ApiJson<ReviewRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    let validated = validate_review(req)?;

    let user = resolve_identity(&state.db, &headers, state.session_secret())
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Login required to review".to_string()))?;

    let (review, rating) = EventReview::upsert(
        &state.db,
        UpsertReview {
            entity_id: id,
            user_id: user.id,
            rating: validated.rating,
            title: validated.title,
            body: validated.body,
        },
    )
    .await?;

    Ok(Json(
        json!({ "ok": true, "review": review, "rating": rating }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_review_rejects_out_of_range_rating() {
        let req = ReviewRequest {
            rating: Some(6),
            title: None,
            body: Some("Great".to_string()),
        };
        let err = validate_review(req).unwrap_err();
        assert!(err.to_string().contains("Rating must be 1-5"));
    }

    #[test]
    fn test_validate_review_rejects_missing_rating() {
        let req = ReviewRequest {
            rating: None,
            title: None,
            body: Some("Great".to_string()),
        };
        assert!(validate_review(req).is_err());
    }

    #[test]
    fn test_validate_review_requires_body_text() {
        let req = ReviewRequest {
            rating: Some(4),
            title: None,
            body: Some("   ".to_string()),
        };
        let err = validate_review(req).unwrap_err();
        assert!(err.to_string().contains("Review text is required"));
    }

    #[test]
    fn test_validate_review_trims_and_drops_empty_title() {
        let req = ReviewRequest {
            rating: Some(4),
            title: Some("  ".to_string()),
            body: Some("  Great stay  ".to_string()),
        };
        let validated = validate_review(req).unwrap();
        assert_eq!(validated.rating, 4);
        assert_eq!(validated.body, "Great stay");
        assert!(validated.title.is_none());
    }
}
