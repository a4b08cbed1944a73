//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields are cheap to
//! clone: `DatabaseConnection` is a connection pool (clones share the pool)
//! and the JWT settings are small values.

use sea_orm::DatabaseConnection;

use crate::config::Config;

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HS256 signing secret for issued bearer tokens.
    pub jwt_secret: String,

    /// Lifetime of issued bearer tokens, in hours.
    pub jwt_ttl_hours: i64,
}

impl AppState {
    /// Creates a new application state from initialized dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `config` - Application configuration (JWT settings are copied out)
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            jwt_secret: config.jwt_secret.clone(),
            jwt_ttl_hours: config.jwt_ttl_hours,
        }
    }
}
