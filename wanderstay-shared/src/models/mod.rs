/// Database models for Wanderstay
///
/// Each model owns its CRUD operations as inherent async methods over a
/// `PgPool` (or a transaction where a flow must be atomic).
///
/// # Models
///
/// - `user`: User accounts
/// - `hotel`: Hotel catalog with embedded image list and denormalized rating
/// - `event`: Event catalog
/// - `booking`: Hotel bookings (capacity-validated)
/// - `event_booking`: Event ticket bookings
/// - `review`: Hotel and event reviews with rating aggregation
/// - `favorite`: Hotel favorite toggle relation
///
/// # Example
///
/// ```no_run
/// use wanderstay_shared::models::user::{CreateUser, User};
/// use wanderstay_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(
///     &pool,
///     CreateUser {
///         email: "user@example.com".to_string(),
///         password_hash: "$argon2id$...".to_string(),
///         first_name: Some("Ada".to_string()),
///         last_name: None,
///         date_of_birth: None,
///     },
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```

pub mod booking;
pub mod event;
pub mod event_booking;
pub mod favorite;
pub mod hotel;
pub mod review;
pub mod user;
