//! Event roster entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{EventId, ParticipantId, Role, UserId};

/// Membership of one user in one event's roster. At most one row per
/// (event, user) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventParticipant {
    pub id: ParticipantId,
    pub event_id: EventId,
    pub user_id: UserId,
    /// Role held within this event, independent of the account role.
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl EventParticipant {
    pub fn new(attrs: ParticipantAttributes) -> Self {
        Self {
            id: ParticipantId::new(),
            event_id: attrs.event_id,
            user_id: attrs.user_id,
            role: attrs.role,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParticipantAttributes {
    pub event_id: EventId,
    pub user_id: UserId,
    pub role: Role,
}
