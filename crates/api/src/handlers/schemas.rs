//! Handlers for template field schemas, default values, and card preview.
//!
//! These endpoints are backed entirely by the in-memory [`SchemaRegistry`];
//! no database access is involved.
//!
//! [`SchemaRegistry`]: mesajkart_core::schema::SchemaRegistry

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use mesajkart_core::render::{resolve_card, RenderRequest};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/templates/schemas
///
/// Slugs of all templates with a registered field schema, sorted.
pub async fn list_schema_slugs(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let slugs: Vec<String> = state
        .registry
        .slugs()
        .into_iter()
        .map(String::from)
        .collect();

    Ok(Json(DataResponse { data: slugs }))
}

/// GET /api/v1/templates/:slug/schema
///
/// Ordered field descriptors for one template. 404 when the slug has no
/// registered schema.
pub async fn get_template_schema(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let schema = state
        .registry
        .get(&slug)
        .ok_or_else(|| AppError::NotFound(format!("No schema registered for template '{slug}'")))?;

    Ok(Json(DataResponse {
        data: schema.clone(),
    }))
}

/// GET /api/v1/templates/:slug/defaults
///
/// Initial text-field values for one template. Unknown slugs yield an empty
/// map rather than an error; a page for an unregistered slug still renders.
pub async fn get_template_defaults(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let defaults = state.registry.default_text_fields(&slug);

    Ok(Json(DataResponse { data: defaults }))
}

/// POST /api/v1/templates/:slug/preview
///
/// Resolve the display content of a card without persisting anything. The
/// slug comes from the path; any slug in the payload is ignored.
pub async fn preview_template(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(mut request): Json<RenderRequest>,
) -> AppResult<impl IntoResponse> {
    request.slug = slug;

    let card = resolve_card(&state.registry, &request);

    Ok(Json(DataResponse { data: card }))
}
