//! # Wanderstay API Server
//!
//! JSON API for browsing hotels and events, booking stays and tickets,
//! leaving reviews, and keeping a favorites list.
//!
//! ## Architecture
//!
//! The server is built with Axum on top of a PostgreSQL pool:
//! - Session-cookie authentication (register, login, me, logout)
//! - Hotel and event catalogs with capacity-checked bookings
//! - Reviews with denormalized average ratings
//! - Favorite toggling, health and debug endpoints
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p wanderstay-api
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wanderstay_api::{app, config::Config};
use wanderstay_shared::db::{migrations, pool};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wanderstay_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Wanderstay API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    let db = pool::create_pool(pool::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        ..Default::default()
    })
    .await?;

    migrations::run_migrations(&db).await?;

    let bind_address = config.bind_address();
    let state = app::AppState::new(db.clone(), config);
    let router = app::build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{bind_address}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool::close_pool(db).await;
    tracing::info!("Shutdown complete");

    Ok(())
}

/// Resolves when Ctrl-C is received
async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received, draining connections...");
}
