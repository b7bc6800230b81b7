//! Application error types.

use domain::{CartError, CustomerError, ProductError, RepositoryError};
use thiserror::Error;

/// Errors returned by the application services.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// A referenced customer, product or cart does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// Customer invariant violated.
    #[error(transparent)]
    Customer(#[from] CustomerError),

    /// Product invariant violated.
    #[error(transparent)]
    Product(#[from] ProductError),

    /// Cart invariant violated.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// The repository failed for a reason other than a missing entity.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl ApplicationError {
    /// Returns true for errors raised by an entity or aggregate invariant.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            ApplicationError::Customer(_)
                | ApplicationError::Product(_)
                | ApplicationError::Cart(_)
        )
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => ApplicationError::NotFound { entity, id },
            other => ApplicationError::Repository(other),
        }
    }
}

/// Convenience type alias for service results.
pub type Result<T> = std::result::Result<T, ApplicationError>;
