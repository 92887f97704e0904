//! Authorization policy.
//!
//! All authorization decisions live here as pure predicates plus `ensure_*`
//! wrappers that turn a denial into a typed error. Policy functions decide,
//! they never fetch: callers load whatever rows the decision needs (owner
//! ids, the actor's participant role) and pass them in. A failed check is
//! always an error, never a silent no-op.

use crate::common::entity_ids::UserId;
use crate::common::error::DomainError;
use crate::common::types::Role;

/// Roles that count as event organizers.
///
/// Used uniformly by every roster and sale-listing check. The event's
/// recorded admin is always treated as an organizer in addition to
/// participants holding one of these roles.
pub const ORGANIZER_ROLES: [Role; 2] = [Role::Administrator, Role::BoardOfDirectors];

/// Anything that can act: exposes the local user id and membership role.
pub trait Actor {
    fn actor_id(&self) -> UserId;
    fn actor_role(&self) -> Role;
}

/// True when the actor owns the resource.
pub fn can_act_on_own_resource(actor: &impl Actor, owner_id: UserId) -> bool {
    actor.actor_id() == owner_id
}

/// True when the actor holds the global administrator role.
pub fn is_administrator(actor: &impl Actor) -> bool {
    actor.actor_role() == Role::Administrator
}

/// True when a participant role grants organizer powers.
pub fn is_organizer_tier(role: Role) -> bool {
    ORGANIZER_ROLES.contains(&role)
}

/// True when the actor organizes the event: either their participant row
/// carries an organizer-tier role, or they are the event's recorded admin.
pub fn is_event_organizer(
    actor: &impl Actor,
    event_admin_id: UserId,
    participant_role: Option<Role>,
) -> bool {
    participant_role.is_some_and(is_organizer_tier) || actor.actor_id() == event_admin_id
}

/// Owner or administrator may proceed; anyone else is denied.
pub fn ensure_owner_or_admin(
    actor: &impl Actor,
    owner_id: UserId,
    denial: &str,
) -> Result<(), DomainError> {
    if can_act_on_own_resource(actor, owner_id) || is_administrator(actor) {
        Ok(())
    } else {
        Err(DomainError::denied(denial))
    }
}

/// Only administrators may proceed.
pub fn ensure_administrator(actor: &impl Actor, denial: &str) -> Result<(), DomainError> {
    if is_administrator(actor) {
        Ok(())
    } else {
        Err(DomainError::denied(denial))
    }
}

/// Only event organizers (or the event admin) may proceed.
pub fn ensure_event_organizer(
    actor: &impl Actor,
    event_admin_id: UserId,
    participant_role: Option<Role>,
    denial: &str,
) -> Result<(), DomainError> {
    if is_event_organizer(actor, event_admin_id, participant_role) {
        Ok(())
    } else {
        Err(DomainError::denied(denial))
    }
}
