use crate::types::DbId;

/// Domain-level error type shared by all crates.
///
/// The API layer maps each variant to an HTTP status; repositories and
/// handlers construct these directly for domain failures.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup by id found nothing.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed validation.
    #[error("{0}")]
    Validation(String),

    /// The operation conflicts with existing state (e.g. duplicate slug).
    #[error("{0}")]
    Conflict(String),

    /// An unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}
