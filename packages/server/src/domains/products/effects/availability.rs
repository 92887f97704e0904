//! Owner-driven availability toggle against an event sale.
//!
//! Organizers manage listings; the owner's toggle only ever withdraws an
//! `On Sale` listing to `Reserved` or refuses on `Sold`. Everything else is
//! an informational no-op, kept for parity with the organizer-driven flow.

use tracing::info;

use crate::common::{DomainError, EventId, ProductId, Status};
use crate::domains::events::models::EventProduct;
use crate::domains::events::sale_state::{AvailabilityAction, SaleState};
use crate::domains::identity::models::User;
use crate::kernel::ServerDeps;

/// Applies the owner's availability wish for one product at one event.
///
/// Returns the patched listing when the call changed anything, `None` for
/// the no-op outcomes.
pub async fn set_availability_for_event(
    deps: &ServerDeps,
    actor: &User,
    product_id: ProductId,
    event_id: EventId,
    available: bool,
) -> Result<Option<EventProduct>, DomainError> {
    let product = deps.products.get(product_id).await?;
    let owned = product
        .as_ref()
        .is_some_and(|p| p.owner_user_id == actor.id);
    if !owned {
        return Err(DomainError::denied(
            "Product not found or user does not own this product.",
        ));
    }

    if deps.events.get(event_id).await?.is_none() {
        return Err(DomainError::not_found("Event"));
    }

    let listing = deps
        .event_products
        .find_by_event_and_product(event_id, product_id)
        .await?;

    match SaleState::of(listing.as_ref()).availability_action(available) {
        AvailabilityAction::RefuseSold => {
            let reason = if available {
                "Cannot make a sold product available again through this action."
            } else {
                "Cannot make a sold product unavailable."
            };
            Err(DomainError::invalid_transition(reason))
        }
        AvailabilityAction::MarkReserved => match listing {
            Some(listing) => {
                let updated = deps
                    .event_products
                    .patch_status(listing.id, Status::Reserved)
                    .await?;
                info!(
                    user = %actor.label(),
                    product_id = %product_id,
                    event_id = %event_id,
                    "Owner withdrew listing to Reserved"
                );
                Ok(Some(updated))
            }
            // MarkReserved implies an existing On Sale row.
            None => Ok(None),
        },
        AvailabilityAction::Ignore => {
            let current = listing
                .as_ref()
                .map(|ep| ep.status.as_str())
                .unwrap_or("not listed");
            info!(
                user = %actor.label(),
                product_id = %product_id,
                event_id = %event_id,
                current_status = current,
                available,
                "Availability request left the listing untouched"
            );
            Ok(None)
        }
    }
}
