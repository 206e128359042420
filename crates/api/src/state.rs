use std::sync::Arc;

use mesajkart_core::schema::SchemaRegistry;

use crate::config::ServerConfig;
use crate::middleware::rate_limit::RateLimiter;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: mesajkart_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Field schemas for the built-in template catalog.
    pub registry: Arc<SchemaRegistry>,
    /// Fixed-window per-IP rate limiter guarding the admin routes.
    pub rate_limiter: Arc<RateLimiter>,
}
