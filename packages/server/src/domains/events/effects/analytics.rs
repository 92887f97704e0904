//! Per-event sale analytics, derived on read from listings and the roster.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::common::auth::ensure_event_organizer;
use crate::common::{DomainError, EventId, Role, Status, UserId};
use crate::domains::events::effects::roster_role;
use crate::domains::identity::models::User;
use crate::kernel::ServerDeps;

/// Compact roster entry for the analytics view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantSummary {
    pub user_id: UserId,
    pub role: Role,
    pub nickname: String,
}

/// Sale totals plus roster summary for one event.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventAnalytics {
    pub event_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub total_value_on_sale: f64,
    pub total_value_sold: f64,
    pub products_on_sale_count: usize,
    pub products_sold_count: usize,
    pub participant_count: usize,
    pub participants: Vec<ParticipantSummary>,
    /// Milliseconds until the event ends, floored at zero.
    pub time_remaining: i64,
}

/// Computes the analytics view for one event. Organizer only; listings in
/// states other than On Sale or Sold do not count toward any total.
pub async fn get_event_analytics(
    deps: &ServerDeps,
    actor: &User,
    event_id: EventId,
) -> Result<EventAnalytics, DomainError> {
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
        "Only event organizers or the event admin can view analytics.",
    )?;

    let listings = deps.event_products.list_by_event(event_id).await?;
    let mut total_value_on_sale = 0.0;
    let mut total_value_sold = 0.0;
    let mut products_on_sale_count = 0;
    let mut products_sold_count = 0;
    for listing in &listings {
        match listing.status {
            Status::OnSale => {
                products_on_sale_count += 1;
                total_value_on_sale += listing.sale_price.unwrap_or(0.0);
            }
            Status::Sold => {
                products_sold_count += 1;
                total_value_sold += listing.sale_price.unwrap_or(0.0);
            }
            _ => {}
        }
    }

    let participants = deps.participants.list_by_event(event_id).await?;
    let mut participant_summaries = Vec::with_capacity(participants.len());
    for participant in &participants {
        let user = deps.users.get(participant.user_id).await?;
        participant_summaries.push(ParticipantSummary {
            user_id: participant.user_id,
            role: participant.role,
            nickname: user.map(|u| u.label()).unwrap_or_else(|| "Unknown".to_string()),
        });
    }

    let time_remaining = (event.end_time - Utc::now()).num_milliseconds().max(0);

    Ok(EventAnalytics {
        event_name: event.name,
        start_time: event.start_time,
        end_time: event.end_time,
        total_value_on_sale,
        total_value_sold,
        products_on_sale_count,
        products_sold_count,
        participant_count: participants.len(),
        participants: participant_summaries,
        time_remaining,
    })
}
