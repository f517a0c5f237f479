/// Configuration management for the API server
///
/// Configuration is loaded from environment variables (with `.env` support
/// in development) into a typed struct.
///
/// # Environment Variables
///
/// - `DATABASE_URL`: PostgreSQL connection string (required)
/// - `DATABASE_MAX_CONNECTIONS`: Pool size (default: 10)
/// - `API_HOST`: Host to bind to (default: 0.0.0.0)
/// - `API_PORT`: Port to bind to (default: 8080)
/// - `API_PRODUCTION`: Enables Secure cookies (default: false)
/// - `CORS_ORIGINS`: Comma-separated allowed origins (default: *)
/// - `FRONTEND_CROSS_SITE`: Front end served from another site; selects
///   `SameSite=None` for the session cookie in production (default: false)
/// - `SESSION_SECRET`: Secret for session token signing (required, >= 32 chars)
/// - `ALLOW_ANONYMOUS_BOOKINGS`: Accept hotel bookings without a resolved
///   user, stored with a NULL user id (default: false)
/// - `RUST_LOG`: Log filter (default: info)

use serde::{Deserialize, Serialize};
use std::env;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Session configuration
    pub session: SessionConfig,

    /// Booking policy configuration
    pub bookings: BookingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Production deployment (HTTPS, Secure cookies)
    pub production: bool,

    /// Allowed CORS origins; "*" means permissive
    pub cors_origins: Vec<String>,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in pool
    pub max_connections: u32,
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Secret key for session token signing
    ///
    /// Must be at least 32 characters. Generate with: `openssl rand -hex 32`
    pub secret: String,

    /// The front end is served from a different site than this API
    pub cross_site: bool,
}

/// Booking policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Accept hotel bookings with no resolved user (stored with NULL user id)
    ///
    /// Off by default; anonymous booking is an explicitly enabled mode, not
    /// a silent fallback.
    pub allow_anonymous: bool,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if required variables are missing or malformed.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let api_host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let api_port = env::var("API_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()?;
        let production = env_flag("API_PRODUCTION");

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()?;

        let session_secret = env::var("SESSION_SECRET")
            .map_err(|_| anyhow::anyhow!("SESSION_SECRET environment variable is required"))?;

        if session_secret.len() < 32 {
            anyhow::bail!("SESSION_SECRET must be at least 32 characters long");
        }

        Ok(Self {
            api: ApiConfig {
                host: api_host,
                port: api_port,
                production,
                cors_origins,
            },
            database: DatabaseConfig {
                url: database_url,
                max_connections,
            },
            session: SessionConfig {
                secret: session_secret,
                cross_site: env_flag("FRONTEND_CROSS_SITE"),
            },
            bookings: BookingConfig {
                allow_anonymous: env_flag("ALLOW_ANONYMOUS_BOOKINGS"),
            },
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name)
        .map(|v| matches!(v.trim(), "1" | "true" | "TRUE" | "yes"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                production: false,
                cors_origins: vec!["*".to_string()],
            },
            database: DatabaseConfig {
                url: "postgresql://localhost/test".to_string(),
                max_connections: 10,
            },
            session: SessionConfig {
                secret: "test-secret-key-at-least-32-bytes-long".to_string(),
                cross_site: false,
            },
            bookings: BookingConfig {
                allow_anonymous: false,
            },
        }
    }

    #[test]
    fn test_bind_address() {
        assert_eq!(test_config().bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_anonymous_bookings_default_off() {
        assert!(!test_config().bookings.allow_anonymous);
    }
}
