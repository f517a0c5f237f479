/// Router-level tests for the Wanderstay API
///
/// These tests exercise routing, request validation, and the
/// authentication gate without a running database. The pool is created
/// lazily and never connected; every path covered here rejects the
/// request before touching storage.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use sqlx::postgres::PgPoolOptions;
use tower::Service as _;
use wanderstay_api::app::{build_router, AppState};
use wanderstay_api::config::{ApiConfig, BookingConfig, Config, DatabaseConfig, SessionConfig};

fn test_config() -> Config {
    Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            production: false,
            cors_origins: vec!["*".to_string()],
        },
        database: DatabaseConfig {
            url: "postgresql://localhost:1/unreachable".to_string(),
            max_connections: 1,
        },
        session: SessionConfig {
            secret: "router-test-secret-at-least-32-bytes!!".to_string(),
            cross_site: false,
        },
        bookings: BookingConfig {
            allow_anonymous: false,
        },
    }
}

fn test_app() -> axum::Router {
    let config = test_config();
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect_lazy(&config.database.url)
        .unwrap();
    build_router(AppState::new(pool, config))
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let mut app = test_app();

    let request = Request::builder()
        .uri("/api/nope")
        .body(Body::empty())
        .unwrap();

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_returns_405() {
    let mut app = test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/api/bookings")
        .body(Body::empty())
        .unwrap();

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let mut app = test_app();

    let request = json_request(
        "POST",
        "/api/auth/register",
        json!({ "email": "alice@example.com", "password": "abc" }),
    );

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_register_rejects_invalid_email() {
    let mut app = test_app();

    let request = json_request(
        "POST",
        "/api/auth/register",
        json!({ "email": "not-an-email", "password": "secret123" }),
    );

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_rejects_empty_credentials() {
    let mut app = test_app();

    let request = json_request(
        "POST",
        "/api/auth/login",
        json!({ "email": "", "password": "" }),
    );

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_me_without_session_returns_401() {
    let mut app = test_app();

    let request = Request::builder()
        .uri("/api/auth/me")
        .body(Body::empty())
        .unwrap();

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["ok"], false);
    assert_eq!(body["message"], "Not logged in");
}

#[tokio::test]
async fn test_booking_requires_hotel_id() {
    let mut app = test_app();

    let request = json_request(
        "POST",
        "/api/bookings",
        json!({ "contact_name": "Alice", "contact_email": "alice@example.com" }),
    );

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Hotel id is required");
}

#[tokio::test]
async fn test_booking_rejects_inverted_dates() {
    let mut app = test_app();

    let request = json_request(
        "POST",
        "/api/bookings",
        json!({
            "hotel_id": "4a2f8b1c-0000-4000-8000-000000000001",
            "check_in": "2026-10-10",
            "check_out": "2026-10-08"
        }),
    );

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Check-out must be after check-in");
}

#[tokio::test]
async fn test_anonymous_booking_rejected_by_default() {
    let mut app = test_app();

    let request = json_request(
        "POST",
        "/api/bookings",
        json!({ "hotel_id": "4a2f8b1c-0000-4000-8000-000000000001", "guests": 2 }),
    );

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_event_booking_requires_login() {
    let mut app = test_app();

    let request = json_request(
        "POST",
        "/api/event-bookings",
        json!({ "event_id": "4a2f8b1c-0000-4000-8000-000000000002", "quantity": 2 }),
    );

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["error"], "unauthorized");
}

#[tokio::test]
async fn test_review_rejects_out_of_range_rating() {
    let mut app = test_app();

    let request = json_request(
        "POST",
        "/api/hotels/4a2f8b1c-0000-4000-8000-000000000001/reviews",
        json!({ "rating": 9, "body": "Too good to be true" }),
    );

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Rating must be 1-5");
}

#[tokio::test]
async fn test_favorite_toggle_requires_hotel_id() {
    let mut app = test_app();

    let request = json_request("POST", "/api/favorites", json!({}));

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Hotel id is required");
}

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let mut app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_mistyped_field_returns_400_json_body() {
    let mut app = test_app();

    // A wrong type inside an otherwise valid body must get the same
    // 400 JSON shape as any other validation failure.
    let request = json_request(
        "POST",
        "/api/hotels/4a2f8b1c-0000-4000-8000-000000000001/reviews",
        json!({ "rating": "four", "body": "Nice place" }),
    );

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_logout_clears_session_cookie() {
    let mut app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/logout")
        .body(Body::empty())
        .unwrap();

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get("set-cookie")
        .and_then(|value| value.to_str().ok())
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("wanderstay_session="));
    assert!(cookie.contains("Max-Age=0"));
}
