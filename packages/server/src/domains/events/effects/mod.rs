// Effects (side effects) for the events domain
//
// Thin orchestrators over the stores; policy decisions come from
// common::auth with the caller's roster role fetched here.

pub mod analytics;
pub mod event_operations;
pub mod queries;
pub mod roster;
pub mod sale;

use crate::common::{DomainError, EventId, Role, UserId};
use crate::kernel::ServerDeps;

/// The participant-row role the user holds in this event, if any.
pub(crate) async fn roster_role(
    deps: &ServerDeps,
    event: EventId,
    user: UserId,
) -> Result<Option<Role>, DomainError> {
    Ok(deps
        .participants
        .find_by_event_and_user(event, user)
        .await?
        .map(|p| p.role))
}
