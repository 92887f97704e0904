//! Event model - one sale or meetup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{EventId, UserId};

/// Placeholder shown until an organizer fills the venue in.
pub const UNSET_LOCATION: &str = "A déterminer";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: String,
    /// The creator. Keeps full control of the event even without a
    /// participant row.
    pub admin_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn new(attrs: EventAttributes) -> Self {
        Self {
            id: EventId::new(),
            name: attrs.name,
            description: attrs.description,
            start_time: attrs.start_time,
            end_time: attrs.end_time,
            location: attrs.location,
            admin_id: attrs.admin_id,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventAttributes {
    pub name: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: String,
    pub admin_id: UserId,
}

/// Request body for event creation. The admin is the calling user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    pub name: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Empty or missing falls back to [`UNSET_LOCATION`].
    #[serde(default)]
    pub location: Option<String>,
}
