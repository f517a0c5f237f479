/// Authentication endpoints
///
/// Session-cookie authentication:
///
/// - `POST /api/auth/register` - Create an account, start a session
/// - `POST /api/auth/login` - Verify credentials, start a session
/// - `GET  /api/auth/me` - Resolve the calling user from the session
/// - `POST /api/auth/logout` - Clear the session cookie
///
/// Sessions live in a signed HTTP-only cookie; the `remember` flag on
/// register/login extends the lifetime from 1 to 30 days.

use crate::{
    app::AppState,
    error::{ApiError, ApiJson, ApiResult},
};
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use validator::Validate;
use wanderstay_shared::{
    auth::{
        cookie::{clear_session_cookie, session_cookie},
        email::{normalize_email, validate_email},
        identity::resolve_identity,
        password::{hash_password, validate_password, verify_password},
        session::{issue_token, session_lifetime},
    },
    models::user::{CreateUser, User},
};

/// Register request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address (normalized to trimmed lowercase before storage)
    pub email: String,

    /// Password (minimum 6 characters)
    pub password: String,

    /// Extend the session to 30 days
    #[serde(default)]
    pub remember: bool,

    /// Optional first name
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub first_name: Option<String>,

    /// Optional last name
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub last_name: Option<String>,

    /// Optional date of birth (YYYY-MM-DD)
    pub date_of_birth: Option<NaiveDate>,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email address (matched case-insensitively via normalization)
    pub email: String,

    /// Password
    pub password: String,

    /// Extend the session to 30 days
    #[serde(default)]
    pub remember: bool,
}

/// Register a new user
///
/// Validates the email shape and password length, normalizes the email,
/// hashes the password, creates the user, and starts a session.
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed
/// - `409 Conflict`: Email already exists
/// - `500 Internal Server Error`: Server error
pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    req.validate().map_err(ApiError::from_validation)?;

    validate_email(&req.email).map_err(ApiError::BadRequest)?;
    validate_password(&req.password).map_err(ApiError::BadRequest)?;

    let email = normalize_email(&req.email);
    let password_hash = hash_password(&req.password)?;

    // Duplicate emails surface as a unique-constraint violation mapped to 409.
    let user = User::create(
        &state.db,
        CreateUser {
            email,
            password_hash,
            first_name: req.first_name,
            last_name: req.last_name,
            date_of_birth: req.date_of_birth,
        },
    )
    .await?;

    let token = issue_token(user.id, req.remember, state.session_secret())?;
    let cookie = session_cookie(
        &token,
        session_lifetime(req.remember),
        state.cookie_options(),
    );

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, cookie)],
        Json(json!({ "ok": true, "user": user })),
    ))
}

/// Login with email and password
///
/// The email is normalized before lookup, so login succeeds regardless of
/// the casing used at registration.
///
/// # Errors
///
/// - `400 Bad Request`: Missing fields
/// - `401 Unauthorized`: Invalid credentials
/// - `500 Internal Server Error`: Server error
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(ApiError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    let email = normalize_email(&req.email);

    let user = User::find_by_email(&state.db, &email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid email or password".to_string()))?;

    let valid = verify_password(&req.password, &user.password_hash)?;
    if !valid {
        return Err(ApiError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let token = issue_token(user.id, req.remember, state.session_secret())?;
    let cookie = session_cookie(
        &token,
        session_lifetime(req.remember),
        state.cookie_options(),
    );

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(json!({ "ok": true, "user": user })),
    ))
}

/// Returns the calling user resolved from the session
///
/// # Errors
///
/// - `401 Unauthorized`: No resolvable identity
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<serde_json::Value>> {
    let user = resolve_identity(&state.db, &headers, state.session_secret())
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Not logged in".to_string()))?;

    Ok(Json(json!({ "ok": true, "user": user })))
}

/// Clears the session cookie
pub async fn logout(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let cookie = clear_session_cookie(state.cookie_options());

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(json!({ "ok": true })),
    ))
}
