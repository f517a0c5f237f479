/// Application state and router builder
///
/// Defines the shared application state and assembles the Axum router with
/// all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use wanderstay_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = wanderstay_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use wanderstay_shared::auth::cookie::CookieOptions;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor; the pool
/// is internally reference-counted so clones are cheap.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    /// Secret used to sign and verify session tokens
    pub fn session_secret(&self) -> &str {
        &self.config.session.secret
    }

    /// Cookie settings implied by the deployment shape
    pub fn cookie_options(&self) -> CookieOptions {
        CookieOptions {
            secure: self.config.api.production,
            cross_site: self.config.session.cross_site,
        }
    }
}

/// Builds the complete Axum router
///
/// # Routes
///
/// ```text
/// /
/// ├── /health                          # Liveness + database connectivity
/// └── /api/
///     ├── /auth/                       # Session-cookie authentication
///     │   ├── POST /register
///     │   ├── POST /login
///     │   ├── GET  /me
///     │   └── POST /logout
///     ├── /hotels                      # Catalog + reviews
///     │   ├── GET  /            GET /:id
///     │   └── GET+POST /:id/reviews
///     ├── /events
///     │   ├── GET  /            GET /:id
///     │   └── GET+POST /:id/reviews
///     ├── POST /bookings               # Hotel bookings
///     ├── POST /event-bookings         # Event ticket bookings
///     ├── GET+POST /favorites          # Favorite toggle
///     └── GET  /debug/stats            # Row counts per table
/// ```
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let auth_routes = Router::new()
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login))
        .route("/me", get(routes::auth::me))
        .route("/logout", post(routes::auth::logout));

    let hotel_routes = Router::new()
        .route("/", get(routes::hotels::list_hotels))
        .route("/:id", get(routes::hotels::get_hotel))
        .route(
            "/:id/reviews",
            get(routes::reviews::list_hotel_reviews).post(routes::reviews::post_hotel_review),
        );

    let event_routes = Router::new()
        .route("/", get(routes::events::list_events))
        .route("/:id", get(routes::events::get_event))
        .route(
            "/:id/reviews",
            get(routes::reviews::list_event_reviews).post(routes::reviews::post_event_review),
        );

    let api_routes = Router::new()
        .nest("/auth", auth_routes)
        .nest("/hotels", hotel_routes)
        .nest("/events", event_routes)
        .route("/bookings", post(routes::bookings::create_booking))
        .route(
            "/event-bookings",
            post(routes::event_bookings::create_event_booking),
        )
        .route(
            "/favorites",
            get(routes::favorites::list_favorites).post(routes::favorites::toggle_favorite),
        )
        .route("/debug/stats", get(routes::debug::stats));

    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        // Development mode: permissive CORS
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::COOKIE])
            .allow_credentials(true)
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .route("/health", get(routes::health::health_check))
        .nest("/api", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
