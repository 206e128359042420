//! Route definitions for the public template catalog and schema endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{schemas, templates};
use crate::state::AppState;

/// Public catalog routes mounted at `/templates`.
///
/// ```text
/// GET  /                  -> list_templates
/// GET  /schemas           -> list_schema_slugs
/// GET  /{slug}/schema     -> get_template_schema
/// GET  /{slug}/defaults   -> get_template_defaults
/// POST /{slug}/preview    -> preview_template
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(templates::list_templates))
        .route("/schemas", get(schemas::list_schema_slugs))
        .route("/{slug}/schema", get(schemas::get_template_schema))
        .route("/{slug}/defaults", get(schemas::get_template_defaults))
        .route("/{slug}/preview", post(schemas::preview_template))
}
