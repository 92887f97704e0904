//! Event creation and self-signup.

use tracing::{error, info};

use crate::common::{DomainError, EventId, Role};
use crate::domains::events::models::{
    CreateEvent, EventAttributes, EventParticipant, ParticipantAttributes, UNSET_LOCATION,
};
use crate::domains::identity::models::User;
use crate::kernel::ServerDeps;
use crate::store::StoreError;

const ALREADY_SIGNED_UP: &str =
    "User is already an organizer for this event. Cannot change role to participant.";

/// Creates an event with the caller as its admin and seats the creator on
/// the roster with the top organizer role.
pub async fn create(
    deps: &ServerDeps,
    actor: &User,
    input: CreateEvent,
) -> Result<EventId, DomainError> {
    if input.end_time <= input.start_time {
        return Err(DomainError::invalid_argument(
            "endTime must be after startTime",
        ));
    }

    let location = match input.location {
        Some(location) if !location.trim().is_empty() => location,
        _ => UNSET_LOCATION.to_string(),
    };

    let event = deps
        .events
        .insert(EventAttributes {
            name: input.name,
            description: input.description,
            start_time: input.start_time,
            end_time: input.end_time,
            location,
            admin_id: actor.id,
        })
        .await?;

    // No cross-collection transaction in the store; compensate by hand when
    // seating the creator fails so no adminless event survives.
    let seated = deps
        .participants
        .insert(ParticipantAttributes {
            event_id: event.id,
            user_id: actor.id,
            role: Role::BoardOfDirectors,
        })
        .await;
    if let Err(cause) = seated {
        if let Err(cleanup) = deps.events.delete(event.id).await {
            error!(
                event_id = %event.id,
                error = %cleanup,
                "Failed to roll back event after the creator could not be seated"
            );
        }
        return Err(cause.into());
    }

    info!(event_id = %event.id, admin_id = %actor.id, "Event created");
    Ok(event.id)
}

/// Self-signup. Joins the caller to the roster as a Guest; callers already
/// on the roster are refused rather than demoted.
pub async fn participate(
    deps: &ServerDeps,
    actor: &User,
    event_id: EventId,
) -> Result<EventParticipant, DomainError> {
    if deps.events.get(event_id).await?.is_none() {
        return Err(DomainError::not_found("Event"));
    }

    if deps
        .participants
        .find_by_event_and_user(event_id, actor.id)
        .await?
        .is_some()
    {
        return Err(DomainError::conflict(ALREADY_SIGNED_UP));
    }

    match deps
        .participants
        .insert(ParticipantAttributes {
            event_id,
            user_id: actor.id,
            role: Role::Guest,
        })
        .await
    {
        Ok(participant) => {
            info!(event_id = %event_id, user_id = %actor.id, "User joined event as guest");
            Ok(participant)
        }
        Err(StoreError::Duplicate { .. }) => Err(DomainError::conflict(ALREADY_SIGNED_UP)),
        Err(cause) => Err(cause.into()),
    }
}
