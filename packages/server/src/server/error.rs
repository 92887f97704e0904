//! Bridge between domain errors and HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::common::DomainError;

/// HTTP-facing error for route handlers.
///
/// Domain errors convert via `From`, so handlers can return
/// `Result<_, ApiError>` and use `?` on service calls. Server-side faults
/// keep their detail in the logs and answer with a generic body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// 400 with a caller-visible message (webhook parse/verification path).
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::NotAuthenticated => {
                Self::new(StatusCode::UNAUTHORIZED, "UNAUTHENTICATED", err.to_string())
            }
            DomainError::ActorNotFound => {
                Self::new(StatusCode::UNAUTHORIZED, "UNAUTHENTICATED", err.to_string())
            }
            DomainError::NotFound { .. } => {
                Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string())
            }
            DomainError::AuthorizationDenied { .. } => {
                Self::new(StatusCode::FORBIDDEN, "FORBIDDEN", err.to_string())
            }
            DomainError::Conflict { .. } => {
                Self::new(StatusCode::CONFLICT, "CONFLICT", err.to_string())
            }
            DomainError::InvalidTransition { .. } => {
                Self::new(StatusCode::CONFLICT, "INVALID_TRANSITION", err.to_string())
            }
            DomainError::InvalidArgument { .. } => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_ARGUMENT",
                err.to_string(),
            ),
            DomainError::Configuration { .. } | DomainError::Store(_) => {
                tracing::error!(error = %err, "Request failed with server-side error");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "Internal server error",
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            code: self.code,
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}
