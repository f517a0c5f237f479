//! # Wanderstay API Server Library
//!
//! Core functionality for the Wanderstay API server: a hotel- and
//! event-booking JSON API with session-cookie authentication.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
