/// Database migration runner
///
/// Migrations live in the `migrations/` directory of this crate and are
/// embedded into the binary with `sqlx::migrate!`. The API server runs them
/// on startup before accepting traffic.
///
/// # Example
///
/// ```no_run
/// use wanderstay_shared::db::pool::{create_pool, DatabaseConfig};
/// use wanderstay_shared::db::migrations::run_migrations;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
/// run_migrations(&pool).await?;
/// # Ok(())
/// # }
/// ```

use sqlx::{migrate::MigrateDatabase, postgres::PgPool, Postgres};
use tracing::{debug, info, warn};

/// Runs all pending migrations against the given pool
///
/// # Errors
///
/// Returns an error if a migration file fails to apply or the connection is
/// lost mid-migration. Failed migrations are rolled back by sqlx.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Running database migrations");

    let migrations = sqlx::migrate!("./migrations");

    match migrations.run(pool).await {
        Ok(()) => {
            info!("Database schema is up to date");
            Ok(())
        }
        Err(e) => {
            warn!("Migration failed: {}", e);
            Err(e)
        }
    }
}

/// Creates the database if it doesn't exist
///
/// Convenience for development and test environments; production databases
/// are provisioned out of band.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), sqlx::Error> {
    if !Postgres::database_exists(database_url).await? {
        info!("Database does not exist, creating it");
        Postgres::create_database(database_url).await?;
    } else {
        debug!("Database already exists");
    }

    Ok(())
}
