//! Roster management: adding users by email and removing them with the
//! last-organizer safeguard.

use tracing::info;

use crate::common::auth::{ensure_event_organizer, is_event_organizer};
use crate::common::{DomainError, EventId, ParticipantId, Role, UserId};
use crate::domains::events::effects::roster_role;
use crate::domains::events::models::ParticipantAttributes;
use crate::domains::identity::models::User;
use crate::kernel::ServerDeps;
use crate::store::StoreError;

/// Adds the user with the given email to the event roster.
pub async fn add_participant(
    deps: &ServerDeps,
    actor: &User,
    event_id: EventId,
    email: &str,
    role: Role,
) -> Result<ParticipantId, DomainError> {
    let event = deps
        .events
        .get(event_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Event"))?;

    let my_role = roster_role(deps, event_id, actor.id).await?;
    ensure_event_organizer(
        actor,
        event.admin_id,
        my_role,
        "Only event organizers can add users to the event.",
    )?;

    let user_to_add = deps
        .users
        .find_by_email(email)
        .await?
        .ok_or_else(|| DomainError::not_found(format!("User with email {email}")))?;

    if deps
        .participants
        .find_by_event_and_user(event_id, user_to_add.id)
        .await?
        .is_some()
    {
        return Err(DomainError::conflict("User is already part of this event."));
    }

    match deps
        .participants
        .insert(ParticipantAttributes {
            event_id,
            user_id: user_to_add.id,
            role,
        })
        .await
    {
        Ok(participant) => {
            info!(
                event_id = %event_id,
                user_id = %user_to_add.id,
                role = %role,
                "Participant added to event"
            );
            Ok(participant.id)
        }
        Err(StoreError::Duplicate { .. }) => {
            Err(DomainError::conflict("User is already part of this event."))
        }
        Err(cause) => Err(cause.into()),
    }
}

/// Removes a user from the roster. Self-removal is always allowed; removing
/// someone else takes an organizer. The event admin cannot be removed while
/// no other Administrator-role participant remains.
pub async fn remove_participant(
    deps: &ServerDeps,
    actor: &User,
    event_id: EventId,
    user_id_to_remove: UserId,
) -> Result<(), DomainError> {
    let event = deps
        .events
        .get(event_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Event"))?;

    if actor.id != user_id_to_remove {
        let my_role = roster_role(deps, event_id, actor.id).await?;
        if !is_event_organizer(actor, event.admin_id, my_role) {
            return Err(DomainError::denied(
                "You do not have permission to remove this user from the event.",
            ));
        }
    }

    if user_id_to_remove == event.admin_id {
        let other_admins = deps
            .participants
            .count_role_others(event_id, Role::Administrator, user_id_to_remove)
            .await?;
        if other_admins == 0 {
            return Err(DomainError::conflict(
                "Cannot remove the last organizer/admin of the event.",
            ));
        }
    }

    let entry = deps
        .participants
        .find_by_event_and_user(event_id, user_id_to_remove)
        .await?
        .ok_or_else(|| {
            DomainError::conflict("User is not part of this event or already removed.")
        })?;

    deps.participants.delete(entry.id).await?;
    info!(event_id = %event_id, user_id = %user_id_to_remove, "Participant removed from event");
    Ok(())
}
