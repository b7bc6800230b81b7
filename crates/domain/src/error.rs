//! Repository error types.

use thiserror::Error;

/// Errors returned by repository implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// No entity of the given kind is stored under the id.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// The backing store could not complete the operation.
    #[error("Repository unavailable: {0}")]
    Unavailable(String),
}

impl RepositoryError {
    /// Creates a not-found error for an entity kind and id.
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
