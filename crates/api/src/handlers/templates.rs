//! Handlers for the template catalog.
//!
//! The public endpoints expose active templates to the storefront; the
//! `/admin/templates` endpoints provide full CRUD and are rate limited.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mesajkart_core::error::CoreError;
use mesajkart_core::types::DbId;
use mesajkart_core::validation::{
    clamp_limit, clamp_page, validate_audience, validate_slug, validate_title, DEFAULT_PAGE_SIZE,
    MAX_PAGE_SIZE,
};
use mesajkart_db::models::template::{CreateTemplate, TemplateListFilter, UpdateTemplate};
use mesajkart_db::repositories::TemplateRepo;

use crate::error::{AppError, AppResult};
use crate::query::{parse_status, TemplateListParams};
use crate::response::{DataResponse, PaginatedResponse};
use crate::state::AppState;

/// Normalize the search term: trimmed, absent when empty.
fn normalize_search(search: Option<String>) -> Option<String> {
    search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Public catalog endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/templates
///
/// Paginated list of active templates, optionally filtered by audience and
/// title search.
pub async fn list_templates(
    State(state): State<AppState>,
    Query(params): Query<TemplateListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(audience) = params.audience.as_deref() {
        validate_audience(audience)?;
    }

    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
    let filter = TemplateListFilter {
        search: normalize_search(params.search),
        audience: params.audience,
        is_active: Some(true),
    };

    let (templates, total) = TemplateRepo::list(&state.pool, &filter, page, limit).await?;

    Ok(Json(PaginatedResponse::new(templates, total, page, limit)))
}

// ---------------------------------------------------------------------------
// Admin catalog endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/templates
///
/// Paginated catalog list with search, audience, and status filters.
pub async fn admin_list_templates(
    State(state): State<AppState>,
    Query(params): Query<TemplateListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(audience) = params.audience.as_deref() {
        validate_audience(audience)?;
    }
    let is_active = parse_status(params.status.as_deref())?;

    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
    let filter = TemplateListFilter {
        search: normalize_search(params.search),
        audience: params.audience,
        is_active,
    };

    let (templates, total) = TemplateRepo::list(&state.pool, &filter, page, limit).await?;

    Ok(Json(PaginatedResponse::new(templates, total, page, limit)))
}

/// POST /api/v1/admin/templates
///
/// Create a catalog template. `title`, `slug`, and `audience` are required;
/// a duplicate slug yields 409 via the unique constraint.
pub async fn admin_create_template(
    State(state): State<AppState>,
    Json(input): Json<CreateTemplate>,
) -> AppResult<impl IntoResponse> {
    let title = input
        .title
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("Missing required field: title".to_string()))?;
    validate_title(title)?;

    let slug = input
        .slug
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("Missing required field: slug".to_string()))?;
    validate_slug(slug)?;

    let audience = input
        .audience
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("Missing required field: audience".to_string()))?;
    validate_audience(audience)?;

    let template = TemplateRepo::create(&state.pool, &input).await?;

    tracing::info!(
        template_id = template.id,
        slug = %template.slug,
        "Catalog template created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: template })))
}

/// GET /api/v1/admin/templates/:id
pub async fn admin_get_template(
    State(state): State<AppState>,
    Path(template_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let template = TemplateRepo::find_by_id(&state.pool, template_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id: template_id,
        }))?;

    Ok(Json(DataResponse { data: template }))
}

/// PUT /api/v1/admin/templates/:id
///
/// Partially update a catalog template. Provided fields are validated; absent
/// fields keep their current values.
pub async fn admin_update_template(
    State(state): State<AppState>,
    Path(template_id): Path<DbId>,
    Json(input): Json<UpdateTemplate>,
) -> AppResult<impl IntoResponse> {
    if let Some(title) = input.title.as_deref() {
        validate_title(title)?;
    }
    if let Some(slug) = input.slug.as_deref() {
        validate_slug(slug)?;
    }
    if let Some(audience) = input.audience.as_deref() {
        validate_audience(audience)?;
    }

    let template = TemplateRepo::update(&state.pool, template_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id: template_id,
        }))?;

    tracing::info!(template_id, slug = %template.slug, "Catalog template updated");

    Ok(Json(DataResponse { data: template }))
}

/// DELETE /api/v1/admin/templates/:id
pub async fn admin_delete_template(
    State(state): State<AppState>,
    Path(template_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TemplateRepo::delete(&state.pool, template_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id: template_id,
        }));
    }

    tracing::info!(template_id, "Catalog template deleted");

    Ok(StatusCode::NO_CONTENT)
}
