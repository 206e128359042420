//! Handlers for greeting-card orders.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use mesajkart_core::error::CoreError;
use mesajkart_core::schema::DesignStyle;
use mesajkart_core::types::DbId;
use mesajkart_db::models::order::CreateOrder;
use mesajkart_db::repositories::{OrderRepo, TemplateRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Shortest and longest allowed lifetime of a hosted card link, in hours.
const MIN_EXPIRES_HOURS: i64 = 1;
const MAX_EXPIRES_HOURS: i64 = 168;

/// POST /api/v1/orders
///
/// Create a pending order for a filled-out card. The snapshot is completed
/// before persisting: schema defaults are seeded into `text_fields` for keys
/// the buyer never touched, and the design style is normalized.
pub async fn create_order(
    State(state): State<AppState>,
    Json(mut input): Json<CreateOrder>,
) -> AppResult<impl IntoResponse> {
    if input.recipient_name.trim().is_empty() {
        return Err(CoreError::Validation("Recipient name must not be empty".to_string()).into());
    }
    if input.sender_name.trim().is_empty() {
        return Err(CoreError::Validation("Sender name must not be empty".to_string()).into());
    }
    if input.message.trim().is_empty() {
        return Err(CoreError::Validation("Message must not be empty".to_string()).into());
    }
    if let Some(email) = input.buyer_email.as_deref() {
        if !email.contains('@') {
            return Err(CoreError::Validation(format!("Invalid email address '{email}'")).into());
        }
    }

    let template = TemplateRepo::find_by_id(&state.pool, input.template_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id: input.template_id,
        }))?;

    if !template.is_active {
        return Err(CoreError::Validation(format!(
            "Template '{}' is no longer available",
            template.slug
        ))
        .into());
    }

    // Keys the buyer never touched fall back to their schema defaults in the
    // persisted snapshot; explicitly emptied keys stay empty.
    input
        .text_fields
        .seed_defaults(&state.registry.default_text_fields(&template.slug));

    let style = DesignStyle::parse_or_modern(input.design_style.as_deref().unwrap_or(""));

    let hours = input
        .expires_in_hours
        .unwrap_or(24)
        .clamp(MIN_EXPIRES_HOURS, MAX_EXPIRES_HOURS);
    let expires_at = Utc::now() + chrono::Duration::hours(hours);

    let order = OrderRepo::create(&state.pool, &input, style.as_str(), expires_at).await?;

    tracing::info!(
        order_id = order.id,
        template_id = template.id,
        style = %order.design_style,
        "Order created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: order })))
}

/// GET /api/v1/orders/:id
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let order = OrderRepo::find_by_id(&state.pool, order_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id: order_id,
        }))?;

    Ok(Json(DataResponse { data: order }))
}
