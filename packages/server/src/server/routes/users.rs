//! User directory routes.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query, State},
    Json,
};

use crate::common::pagination::{Page, PageArgs};
use crate::domains::identity::effects::queries::{
    list_all_users, list_users_lite, UserDirectoryEntry, UserLite,
};
use crate::domains::identity::models::User;
use crate::kernel::ServerDeps;
use crate::server::error::ApiError;
use crate::server::middleware::AuthContext;

/// The caller's mirrored user row, or null for anonymous callers.
pub async fn me_handler(Extension(auth): Extension<AuthContext>) -> Json<Option<User>> {
    Json(auth.user)
}

pub async fn list_users_handler(
    State(deps): State<Arc<ServerDeps>>,
) -> Result<Json<Vec<UserDirectoryEntry>>, ApiError> {
    Ok(Json(list_all_users(&deps).await?))
}

pub async fn users_page_handler(
    State(deps): State<Arc<ServerDeps>>,
    Query(args): Query<PageArgs>,
) -> Result<Json<Page<UserLite>>, ApiError> {
    Ok(Json(list_users_lite(&deps, args).await?))
}
