//! # Wanderstay Shared Library
//!
//! This crate contains the types, database layer, and authentication
//! primitives shared by the Wanderstay API server.
//!
//! ## Module Organization
//!
//! - `models`: Database models and their CRUD operations
//! - `auth`: Password hashing, session tokens, cookies, identity resolution
//! - `db`: Connection pool management and migrations

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the wanderstay shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
