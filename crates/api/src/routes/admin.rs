//! Route definitions for admin catalog management.
//!
//! Every route in this tree passes through the per-IP rate limiter before
//! reaching its handler.

use axum::routing::get;
use axum::Router;

use crate::handlers::templates;
use crate::middleware::rate_limit::rate_limit;
use crate::state::AppState;

/// Admin catalog routes mounted at `/admin`.
///
/// ```text
/// GET    /templates        -> admin_list_templates
/// POST   /templates        -> admin_create_template
/// GET    /templates/{id}   -> admin_get_template
/// PUT    /templates/{id}   -> admin_update_template
/// DELETE /templates/{id}   -> admin_delete_template
/// ```
pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/templates",
            get(templates::admin_list_templates).post(templates::admin_create_template),
        )
        .route(
            "/templates/{id}",
            get(templates::admin_get_template)
                .put(templates::admin_update_template)
                .delete(templates::admin_delete_template),
        )
        .route_layer(axum::middleware::from_fn_with_state(state, rate_limit))
}
