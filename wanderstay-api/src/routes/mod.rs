/// API route handlers
///
/// Organized by resource:
///
/// - `health`: Liveness and database connectivity
/// - `auth`: Registration, login, session introspection, logout
/// - `hotels` / `events`: Catalog listing and detail
/// - `bookings` / `event_bookings`: Booking creation
/// - `reviews`: Review listing and upsert with rating aggregation
/// - `favorites`: Favorite listing and toggle
/// - `debug`: Row-count statistics

pub mod auth;
pub mod bookings;
pub mod debug;
pub mod event_bookings;
pub mod events;
pub mod favorites;
pub mod health;
pub mod hotels;
pub mod reviews;
