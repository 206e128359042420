pub mod admin;
pub mod health;
pub mod orders;
pub mod templates;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /templates                       paginated active catalog (GET)
/// /templates/schemas               slugs with a field schema (GET)
/// /templates/{slug}/schema         ordered field descriptors (GET)
/// /templates/{slug}/defaults       initial text-field values (GET)
/// /templates/{slug}/preview        resolve card content (POST)
///
/// /orders                          create order (POST)
/// /orders/{id}                     get order (GET)
///
/// /admin/templates                 list, create (rate limited)
/// /admin/templates/{id}            get, update, delete (rate limited)
/// ```
///
/// The state is taken by value because the admin router attaches the
/// rate-limit middleware via `from_fn_with_state`.
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Public catalog, schema, and preview routes.
        .nest("/templates", templates::router())
        // Order creation and lookup.
        .nest("/orders", orders::router())
        // Admin catalog management, guarded by the per-IP rate limiter.
        .nest("/admin", admin::router(state))
}
