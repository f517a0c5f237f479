/// Error handling for the API server
///
/// A single error type that maps onto the response taxonomy: validation →
/// 400, authentication → 401, missing references → 404, uniqueness
/// conflicts → 409, everything else → 500 with a generic message and the
/// full detail logged server-side. Handlers return `ApiResult<T>` and use
/// `?` freely; conversions below do the mapping.
///
/// Every error body is JSON of the shape
/// `{"ok": false, "error": "<code>", "message": "<text>"}`.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use wanderstay_shared::{
    auth::{password::PasswordError, session::SessionError},
    models::{
        booking::BookingError, event_booking::EventBookingError, review::ReviewError,
    },
};

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Bad request (400): validation and malformed input
    BadRequest(String),

    /// Unauthorized (401)
    Unauthorized(String),

    /// Not found (404)
    NotFound(String),

    /// Conflict (409) - e.g., duplicate email
    Conflict(String),

    /// Internal server error (500)
    InternalError(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always false on error responses
    pub ok: bool,

    /// Error code (e.g., "bad_request", "unauthorized")
    pub error: String,

    /// Human-readable error message
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Flattens `validator` derive errors into a single 400
    pub fn from_validation(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    let detail = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "is invalid".to_string());
                    format!("{}: {}", field, detail)
                })
            })
            .collect::<Vec<_>>()
            .join("; ");

        ApiError::BadRequest(message)
    }
}

/// JSON body extractor whose rejections follow the error taxonomy
///
/// Axum's built-in `Json` replies to malformed or mistyped bodies with its
/// own status codes and a plain-text message. Handlers take `ApiJson`
/// instead, so those rejections become the same 400 `ErrorResponse` body
/// as every other validation failure.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        Ok(ApiJson(value))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "unauthorized", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg),
            ApiError::InternalError(msg) => {
                // Full detail stays server-side; clients get a generic body.
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            ok: false,
            error: error_code.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(db_err) => {
                if let Some(constraint) = db_err.constraint() {
                    if constraint.contains("email") {
                        return ApiError::Conflict("Email already exists".to_string());
                    }
                    return ApiError::Conflict(format!("Constraint violation: {}", constraint));
                }

                ApiError::InternalError(format!("Database error: {}", db_err))
            }
            _ => ApiError::InternalError(format!("Database error: {}", err)),
        }
    }
}

/// Session token failures are authentication failures
impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Expired => ApiError::Unauthorized("Session expired".to_string()),
            SessionError::ValidationError(_) => {
                ApiError::Unauthorized("Invalid session".to_string())
            }
            SessionError::CreateError(msg) => {
                ApiError::InternalError(format!("Session issue failed: {}", msg))
            }
        }
    }
}

/// Password hashing failures are internal, never user errors
impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        ApiError::InternalError(format!("Password operation failed: {}", err))
    }
}

/// Convert hotel booking flow errors to API errors
impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::HotelNotFound => ApiError::NotFound(err.to_string()),
            BookingError::CapacityExceeded { .. } => ApiError::BadRequest(err.to_string()),
            BookingError::Database(e) => e.into(),
        }
    }
}

/// Convert event booking flow errors to API errors
impl From<EventBookingError> for ApiError {
    fn from(err: EventBookingError) -> Self {
        match err {
            EventBookingError::EventNotFound => ApiError::NotFound(err.to_string()),
            EventBookingError::CapacityExceeded { .. } => ApiError::BadRequest(err.to_string()),
            EventBookingError::Database(e) => e.into(),
        }
    }
}

/// Convert review flow errors to API errors
impl From<ReviewError> for ApiError {
    fn from(err: ReviewError) -> Self {
        match err {
            ReviewError::EntityNotFound(_) => ApiError::NotFound(err.to_string()),
            ReviewError::Database(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::BadRequest("Invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: Invalid input");

        let err = ApiError::NotFound("Hotel not found".to_string());
        assert_eq!(err.to_string(), "Not found: Hotel not found");
    }

    #[test]
    fn test_booking_error_mapping() {
        let err: ApiError = BookingError::CapacityExceeded { capacity: 2 }.into();
        assert!(matches!(err, ApiError::BadRequest(_)));
        assert!(err.to_string().contains("at most 2 guests"));

        let err: ApiError = BookingError::HotelNotFound.into();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_session_error_mapping() {
        let err: ApiError = SessionError::Expired.into();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }
}
