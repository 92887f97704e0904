//! Domain error taxonomy.
//!
//! Every service operation returns `Result<T, DomainError>`. Failures map
//! onto a small closed set of outcomes so the HTTP layer can translate them
//! uniformly. Errors propagate synchronously: no silent recovery, no
//! automatic retries.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum DomainError {
    /// No identity assertion accompanied the request.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The asserted identity has no local user record (sync lag or a
    /// deleted account).
    #[error("User not found")]
    ActorNotFound,

    /// A referenced entity does not exist.
    #[error("{what} not found")]
    NotFound { what: String },

    /// The actor is resolved but the policy denies the operation.
    #[error("{reason}")]
    AuthorizationDenied { reason: String },

    /// A uniqueness rule or state precondition rejected the write.
    #[error("{reason}")]
    Conflict { reason: String },

    /// The sale lifecycle forbids this transition.
    #[error("{reason}")]
    InvalidTransition { reason: String },

    /// The request payload is structurally valid but semantically wrong.
    #[error("{reason}")]
    InvalidArgument { reason: String },

    /// A required piece of server configuration is missing.
    #[error("configuration error: {what}")]
    Configuration { what: String },

    /// The backing store failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl DomainError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    pub fn denied(reason: impl Into<String>) -> Self {
        Self::AuthorizationDenied {
            reason: reason.into(),
        }
    }

    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::Conflict {
            reason: reason.into(),
        }
    }

    pub fn invalid_transition(reason: impl Into<String>) -> Self {
        Self::InvalidTransition {
            reason: reason.into(),
        }
    }

    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn configuration(what: impl Into<String>) -> Self {
        Self::Configuration { what: what.into() }
    }
}
