//! Route definitions for order creation and lookup.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::orders;
use crate::state::AppState;

/// Order routes mounted at `/orders`.
///
/// ```text
/// POST /        -> create_order
/// GET  /{id}    -> get_order
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(orders::create_order))
        .route("/{id}", get(orders::get_order))
}
