//! Read endpoints over the user mirror.

use serde::Serialize;

use crate::common::pagination::{build_page, Page, PageArgs};
use crate::common::{DomainError, UserId};
use crate::domains::identity::models::User;
use crate::kernel::ServerDeps;

/// Directory row for pickers: id plus a display label.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLite {
    pub id: UserId,
    pub label: String,
}

/// Directory row for the full listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDirectoryEntry {
    pub id: UserId,
    pub email: String,
    pub nickname: Option<String>,
}

/// Resolves the calling account, if any. An asserted identity without a
/// mirror row resolves to `None` (sync lag or a deleted account).
pub async fn current_user(
    deps: &ServerDeps,
    external_id: Option<&str>,
) -> Result<Option<User>, DomainError> {
    match external_id {
        Some(subject) => Ok(deps.users.find_by_external_id(subject).await?),
        None => Ok(None),
    }
}

/// Ascending page of `{ id, label }` rows for user pickers.
pub async fn list_users_lite(
    deps: &ServerDeps,
    args: PageArgs,
) -> Result<Page<UserLite>, DomainError> {
    let validated = args.validate().map_err(DomainError::invalid_argument)?;
    let users = deps
        .users
        .list_page(validated.cursor, validated.fetch_limit())
        .await?;
    let rows: Vec<UserLite> = users
        .into_iter()
        .map(|user| UserLite {
            id: user.id,
            label: user.label(),
        })
        .collect();
    Ok(build_page(rows, &validated, |row| row.id.into_uuid()))
}

/// Every user, trimmed to directory fields, oldest first.
pub async fn list_all_users(deps: &ServerDeps) -> Result<Vec<UserDirectoryEntry>, DomainError> {
    let users = deps.users.list().await?;
    Ok(users
        .into_iter()
        .map(|user| UserDirectoryEntry {
            id: user.id,
            email: user.email,
            nickname: user.nickname,
        })
        .collect())
}
