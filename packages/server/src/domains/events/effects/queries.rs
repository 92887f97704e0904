//! Event read models: listings, detail views, and the caller's events.

use serde::Serialize;

use crate::common::{DomainError, EventId, Role};
use crate::domains::events::models::{Event, EventParticipant, EventProduct};
use crate::domains::identity::models::User;
use crate::kernel::ServerDeps;

/// Roster row joined with the member's display name.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDetail {
    #[serde(flatten)]
    pub participant: EventParticipant,
    pub user_name: String,
}

/// Listing joined with product display fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedProductDetail {
    #[serde(flatten)]
    pub listing: EventProduct,
    pub product_name: String,
    pub product_description: String,
    pub original_price: f64,
}

/// Full event view: the event row plus joined roster and listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    #[serde(flatten)]
    pub event: Event,
    pub participants: Vec<ParticipantDetail>,
    pub products: Vec<ListedProductDetail>,
}

/// An event enriched with the caller's roster role.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventWithRole {
    #[serde(flatten)]
    pub event: Event,
    pub role: Role,
}

/// Every event, newest first.
pub async fn list_events(deps: &ServerDeps) -> Result<Vec<Event>, DomainError> {
    Ok(deps.events.list().await?)
}

/// One event with its joined roster and listings, or `None` when it does
/// not exist. Vanished join targets degrade to placeholder fields.
pub async fn get_details(
    deps: &ServerDeps,
    event_id: EventId,
) -> Result<Option<EventDetails>, DomainError> {
    let event = match deps.events.get(event_id).await? {
        Some(event) => event,
        None => return Ok(None),
    };

    let participants = deps.participants.list_by_event(event_id).await?;
    let mut participant_details = Vec::with_capacity(participants.len());
    for participant in participants {
        let user = deps.users.get(participant.user_id).await?;
        let user_name = user
            .map(|u| u.label())
            .unwrap_or_else(|| "Unknown User".to_string());
        participant_details.push(ParticipantDetail {
            participant,
            user_name,
        });
    }

    let listings = deps.event_products.list_by_event(event_id).await?;
    let mut products = Vec::with_capacity(listings.len());
    for listing in listings {
        let product = deps.products.get(listing.product_id).await?;
        products.push(ListedProductDetail {
            product_name: product
                .as_ref()
                .map(|p| p.product_name.clone())
                .unwrap_or_else(|| "Unknown Product".to_string()),
            product_description: product
                .as_ref()
                .map(|p| p.description.clone())
                .unwrap_or_default(),
            original_price: product.as_ref().map(|p| p.purchase_price).unwrap_or(0.0),
            listing,
        });
    }

    Ok(Some(EventDetails {
        event,
        participants: participant_details,
        products,
    }))
}

/// The events the caller sits on the roster of, each with their role.
/// Participations whose event row vanished are skipped.
pub async fn get_my_events(
    deps: &ServerDeps,
    actor: &User,
) -> Result<Vec<EventWithRole>, DomainError> {
    let participations = deps.participants.list_by_user(actor.id).await?;
    let mut events = Vec::with_capacity(participations.len());
    for participation in participations {
        if let Some(event) = deps.events.get(participation.event_id).await? {
            events.push(EventWithRole {
                event,
                role: participation.role,
            });
        }
    }
    Ok(events)
}
