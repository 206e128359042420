//! Shared query parameter types for API handlers.

use serde::Deserialize;

use crate::error::AppError;

/// Query parameters for catalog list endpoints
/// (`?page=&limit=&search=&audience=&status=`).
///
/// `page` and `limit` are clamped via `clamp_page` / `clamp_limit` in the
/// handler; `status` is parsed with [`parse_status`].
#[derive(Debug, Default, Deserialize)]
pub struct TemplateListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub audience: Option<String>,
    pub status: Option<String>,
}

/// Parse the `status` filter into an `is_active` predicate.
///
/// `active` and `inactive` map to `Some(true)` / `Some(false)`, absent or
/// `all` means no filter, anything else is a 400.
pub fn parse_status(status: Option<&str>) -> Result<Option<bool>, AppError> {
    match status {
        None | Some("all") => Ok(None),
        Some("active") => Ok(Some(true)),
        Some("inactive") => Ok(Some(false)),
        Some(other) => Err(AppError::BadRequest(format!(
            "Invalid status '{other}'. Must be one of: active, inactive, all"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parse_status_maps_known_values() {
        assert_matches!(parse_status(None), Ok(None));
        assert_matches!(parse_status(Some("all")), Ok(None));
        assert_matches!(parse_status(Some("active")), Ok(Some(true)));
        assert_matches!(parse_status(Some("inactive")), Ok(Some(false)));
    }

    #[test]
    fn parse_status_rejects_unknown() {
        assert_matches!(parse_status(Some("archived")), Err(AppError::BadRequest(_)));
    }
}
