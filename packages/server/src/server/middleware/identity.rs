//! Identity resolution middleware.
//!
//! The identity provider sits in front of this service and hands us a
//! verified subject in the Authorization header. This middleware resolves
//! the mirrored user row for that subject and stores an [`AuthContext`] in
//! the request extensions.
//!
//! Note: it does NOT block requests. Handlers decide whether an actor is
//! required.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::common::DomainError;
use crate::domains::identity::effects::queries::current_user;
use crate::domains::identity::models::User;
use crate::kernel::ServerDeps;

/// Per-request identity: the external subject presented by the caller and
/// the mirrored user row, when one exists.
#[derive(Clone, Debug, Default)]
pub struct AuthContext {
    pub subject: Option<String>,
    pub user: Option<User>,
}

impl AuthContext {
    /// The mirrored user, or the matching 401: anonymous callers are not
    /// authenticated, authenticated callers without a mirrored row are
    /// unknown here.
    pub fn require_actor(&self) -> Result<User, DomainError> {
        if self.subject.is_none() {
            return Err(DomainError::NotAuthenticated);
        }
        self.user.clone().ok_or(DomainError::ActorNotFound)
    }
}

/// Resolves the caller's identity and attaches it to the request.
pub async fn resolve_identity(
    State(deps): State<Arc<ServerDeps>>,
    mut request: Request,
    next: Next,
) -> Response {
    let subject = bearer_subject(&request);
    let user = current_user(&deps, subject.as_deref()).await.ok().flatten();
    request.extensions_mut().insert(AuthContext { subject, user });
    next.run(request).await
}

fn bearer_subject(request: &Request) -> Option<String> {
    let header = request.headers().get(AUTHORIZATION)?;
    let value = header.to_str().ok()?;
    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
