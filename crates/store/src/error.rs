//! Store error types.
//!
//! Every store operation returns `Result<T, StoreError>` and validates before
//! mutating, so a failed call leaves all state exactly as it was.

use thiserror::Error;

use ecosankalp_core::EmailError;

/// Errors that can occur during sign-in.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Admin secret did not match.
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// Errors returned by [`DomainStore`](crate::DomainStore) operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Malformed input, e.g. an empty required field.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The operation referenced an unknown entity.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind, e.g. `report`.
        entity: &'static str,
        /// The id that was looked up.
        id: String,
    },

    /// A mutating operation needs a signed-in user.
    #[error("sign in required")]
    AuthRequired,

    /// The status change is not an edge of the entity's lifecycle.
    #[error("{entity} cannot move from {from} to {to}")]
    InvalidTransition {
        /// Entity kind, e.g. `order`.
        entity: &'static str,
        /// Current state.
        from: String,
        /// Requested state.
        to: String,
    },

    /// The product cannot be added while unavailable.
    #[error("product out of stock: {0}")]
    OutOfStock(String),

    /// Sign-in failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),
}

impl StoreError {
    pub(crate) fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub(crate) fn invalid_transition(
        entity: &'static str,
        from: impl ToString,
        to: impl ToString,
    ) -> Self {
        Self::InvalidTransition {
            entity,
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;
