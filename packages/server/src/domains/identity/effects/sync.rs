//! Webhook-driven user synchronization.
//!
//! The identity provider is the source of truth; these functions keep the
//! local mirror in step with its `created`/`updated`/`deleted` deliveries.
//! Deliveries can arrive twice or out of order, so both entry points are
//! idempotent.

use tracing::{info, warn};

use crate::common::DomainError;
use crate::domains::identity::models::{User, UserAttributes};
use crate::kernel::ServerDeps;
use crate::store::StoreError;

/// Creates or fully overwrites the mirror row keyed on the external id.
pub async fn upsert_user(deps: &ServerDeps, attrs: UserAttributes) -> Result<User, DomainError> {
    if let Some(existing) = deps.users.find_by_external_id(&attrs.external_id).await? {
        let user = deps.users.patch(existing.id, attrs).await?;
        info!(
            user_id = %user.id,
            external_id = %user.external_id,
            "Updated user from identity provider"
        );
        return Ok(user);
    }

    match deps.users.insert(attrs.clone()).await {
        Ok(user) => {
            info!(
                user_id = %user.id,
                external_id = %user.external_id,
                "Created user from identity provider"
            );
            Ok(user)
        }
        // Concurrent delivery inserted first; degrade to the patch path.
        Err(StoreError::Duplicate { .. }) => {
            let existing = deps
                .users
                .find_by_external_id(&attrs.external_id)
                .await?
                .ok_or_else(|| DomainError::not_found("User"))?;
            let user = deps.users.patch(existing.id, attrs).await?;
            info!(user_id = %user.id, "Updated user after losing insert race");
            Ok(user)
        }
        Err(e) => Err(e.into()),
    }
}

/// Removes the mirror row for a deleted account. Unknown external ids are
/// logged and ignored.
pub async fn delete_user(deps: &ServerDeps, external_id: &str) -> Result<(), DomainError> {
    match deps.users.find_by_external_id(external_id).await? {
        Some(user) => {
            deps.users.delete(user.id).await?;
            info!(user_id = %user.id, external_id, "Deleted user from identity provider");
            Ok(())
        }
        None => {
            warn!(external_id, "Can't delete user, there is none for this external id");
            Ok(())
        }
    }
}
