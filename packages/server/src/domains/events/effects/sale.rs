//! Sale listing management, the organizer-facing side of the event sale.

use tracing::info;

use crate::common::auth::ensure_event_organizer;
use crate::common::{DomainError, EventId, EventProductId, ProductId, Status};
use crate::domains::events::effects::roster_role;
use crate::domains::events::models::{EventProduct, EventProductAttributes};
use crate::domains::identity::models::User;
use crate::kernel::ServerDeps;
use crate::store::StoreError;

/// Lists a product for sale at an event. Upserts: an existing listing is
/// reset to On Sale at the new price, whatever state it was in.
pub async fn add_product_to_sale(
    deps: &ServerDeps,
    actor: &User,
    event_id: EventId,
    product_id: ProductId,
    sale_price: f64,
) -> Result<EventProduct, DomainError> {
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
        "Only event organizers can add products to the event sale.",
    )?;

    if deps.products.get(product_id).await?.is_none() {
        return Err(DomainError::not_found("Product"));
    }

    let existing = deps
        .event_products
        .find_by_event_and_product(event_id, product_id)
        .await?;
    let listing = match existing {
        Some(listing) => {
            deps.event_products
                .patch_listing(listing.id, Status::OnSale, Some(sale_price))
                .await?
        }
        None => {
            let inserted = deps
                .event_products
                .insert(EventProductAttributes {
                    event_id,
                    product_id,
                    status: Status::OnSale,
                    sale_price: Some(sale_price),
                })
                .await;
            match inserted {
                Ok(listing) => listing,
                // A concurrent call won the insert; patch the row it made.
                Err(StoreError::Duplicate { .. }) => {
                    let row = deps
                        .event_products
                        .find_by_event_and_product(event_id, product_id)
                        .await?
                        .ok_or_else(|| DomainError::not_found("Event product"))?;
                    deps.event_products
                        .patch_listing(row.id, Status::OnSale, Some(sale_price))
                        .await?
                }
                Err(cause) => return Err(cause.into()),
            }
        }
    };

    info!(
        event_id = %event_id,
        product_id = %product_id,
        sale_price,
        "Product listed for event sale"
    );
    Ok(listing)
}

/// Organizer patch of a listing's status. The patch is unconditional; the
/// sold-state guard applies only to the owner availability toggle.
pub async fn update_product_status(
    deps: &ServerDeps,
    actor: &User,
    event_product_id: EventProductId,
    status: Status,
) -> Result<EventProduct, DomainError> {
    let listing = deps
        .event_products
        .get(event_product_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Event product"))?;
    let event = deps
        .events
        .get(listing.event_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Event"))?;

    let my_role = roster_role(deps, listing.event_id, actor.id).await?;
    ensure_event_organizer(
        actor,
        event.admin_id,
        my_role,
        "Only event organizers can update product status.",
    )?;

    let updated = deps
        .event_products
        .patch_status(event_product_id, status)
        .await?;
    info!(event_product_id = %event_product_id, status = %status, "Listing status updated");
    Ok(updated)
}

/// Delists a product from the event sale. Legal from any listing state.
pub async fn remove_product_from_sale(
    deps: &ServerDeps,
    actor: &User,
    event_product_id: EventProductId,
) -> Result<(), DomainError> {
    let listing = deps
        .event_products
        .get(event_product_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Event product"))?;
    let event = deps
        .events
        .get(listing.event_id)
        .await?
        .ok_or_else(|| DomainError::not_found("Associated event"))?;

    let my_role = roster_role(deps, listing.event_id, actor.id).await?;
    ensure_event_organizer(
        actor,
        event.admin_id,
        my_role,
        "Only event organizers or the event admin can remove products from the event sale.",
    )?;

    deps.event_products.delete(event_product_id).await?;
    info!(
        event_product_id = %event_product_id,
        event_id = %listing.event_id,
        "Listing removed from event sale"
    );
    Ok(())
}
