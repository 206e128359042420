//! Catalog template model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use mesajkart_core::types::{DbId, Timestamp};

/// A row from the `templates` table: one purchasable greeting-card template.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Template {
    pub id: DbId,
    pub title: String,
    /// Stable identifier used in URLs and schema lookups.
    pub slug: String,
    pub audience: String,
    pub description: Option<String>,
    pub preview_url: Option<String>,
    pub bg_audio_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new catalog template.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTemplate {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub audience: Option<String>,
    pub description: Option<String>,
    pub preview_url: Option<String>,
    pub bg_audio_url: Option<String>,
    pub is_active: Option<bool>,
}

/// DTO for updating an existing catalog template. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTemplate {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub audience: Option<String>,
    pub description: Option<String>,
    pub preview_url: Option<String>,
    pub bg_audio_url: Option<String>,
    pub is_active: Option<bool>,
}

/// Filters for paginated catalog listing.
#[derive(Debug, Clone, Default)]
pub struct TemplateListFilter {
    /// Case-insensitive substring match on `title`.
    pub search: Option<String>,
    pub audience: Option<String>,
    /// `Some(true)` for active only, `Some(false)` for inactive only,
    /// `None` for all rows.
    pub is_active: Option<bool>,
}
