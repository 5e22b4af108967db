//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client for messenger platform requests
//! - Collection registry for generic admin browsing

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::data::paging::CollectionRegistry;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `Arc<CollectionRegistry>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for messenger platform requests.
    ///
    /// Configured without redirects so a webhook cannot bounce requests elsewhere.
    pub http_client: reqwest::Client,

    /// Collections reachable through the admin browse endpoint.
    pub registry: Arc<CollectionRegistry>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `registry` - Collection registry built at startup
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        registry: CollectionRegistry,
    ) -> Self {
        Self {
            db,
            http_client,
            registry: Arc::new(registry),
        }
    }
}
