//! Validation helpers and pagination constants shared by the API and
//! repository layers.
//!
//! This module lives in `core` (zero internal deps) so both the admin API and
//! any future CLI tooling validate catalog input the same way.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Audience
// ---------------------------------------------------------------------------

/// Valid audience values for a catalog template.
pub const VALID_AUDIENCES: &[&str] = &["teen", "adult", "classic", "fun", "elegant"];

/// Validate that `audience` is one of the fixed enum values.
pub fn validate_audience(audience: &str) -> Result<(), CoreError> {
    if VALID_AUDIENCES.contains(&audience) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid audience '{audience}'. Must be one of: {}",
            VALID_AUDIENCES.join(", ")
        )))
    }
}

// ---------------------------------------------------------------------------
// Title / slug
// ---------------------------------------------------------------------------

/// Maximum length for a template title.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum length for a template slug.
pub const MAX_SLUG_LEN: usize = 100;

/// Validate a template title: non-empty and within length limit.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".to_string()));
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Title too long: {} chars (max {MAX_TITLE_LEN})",
            title.len()
        )));
    }
    Ok(())
}

/// Validate a template slug: non-empty, lowercase alphanumerics and hyphens,
/// no leading/trailing/double hyphen, within length limit.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".to_string()));
    }
    if slug.len() > MAX_SLUG_LEN {
        return Err(CoreError::Validation(format!(
            "Slug too long: {} chars (max {MAX_SLUG_LEN})",
            slug.len()
        )));
    }
    let valid_chars = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !valid_chars || slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
        return Err(CoreError::Validation(format!(
            "Invalid slug '{slug}'. Use lowercase letters, digits, and single hyphens"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Default number of catalog rows per page.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum number of catalog rows per page.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Clamp an optional page-size value into `[1, max]`, defaulting when absent.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(1, max)
}

/// Clamp an optional 1-based page number to at least 1.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}
