//! Product operations - CRUD and directory reads.

use serde::Serialize;
use tracing::info;

use crate::common::auth::{ensure_administrator, ensure_owner_or_admin, is_administrator};
use crate::common::pagination::{build_page, Page, PageArgs};
use crate::common::{DomainError, EventId, ProductId, ProductType, Status, UserId};
use crate::domains::events::models::EventProduct;
use crate::domains::identity::models::User;
use crate::domains::products::models::{CreateProduct, Product, ProductPatch};
use crate::kernel::ServerDeps;

/// Registers a product. The owner is the caller unless an administrator
/// names a target user.
pub async fn create(
    deps: &ServerDeps,
    actor: &User,
    input: CreateProduct,
) -> Result<ProductId, DomainError> {
    let owner = input.target_user_id.unwrap_or(actor.id);
    if owner != actor.id && !is_administrator(actor) {
        return Err(DomainError::denied(
            "You cannot create products for someone else",
        ));
    }

    let product = deps.products.insert(input.into_attributes(owner)).await?;
    info!(product_id = %product.id, owner_user_id = %owner, "Product created");
    Ok(product.id)
}

/// Unrestricted single-row read.
pub async fn get_by_id(deps: &ServerDeps, id: ProductId) -> Result<Option<Product>, DomainError> {
    Ok(deps.products.get(id).await?)
}

/// Every product, oldest first.
pub async fn list(deps: &ServerDeps) -> Result<Vec<Product>, DomainError> {
    Ok(deps.products.list().await?)
}

pub async fn list_by_status(
    deps: &ServerDeps,
    status: Status,
) -> Result<Vec<Product>, DomainError> {
    Ok(deps.products.list_by_status(status).await?)
}

/// Products whose type list contains the given type.
pub async fn list_by_type(
    deps: &ServerDeps,
    product_type: ProductType,
) -> Result<Vec<Product>, DomainError> {
    Ok(deps.products.list_by_type(product_type).await?)
}

/// Newest-first page of the caller's inventory scope.
///
/// Administrators with no explicit target browse the whole inventory;
/// everyone else is scoped to an owner. A provided target wins as-is.
pub async fn list_paginated(
    deps: &ServerDeps,
    actor: &User,
    args: PageArgs,
    target_user_id: Option<UserId>,
) -> Result<Page<Product>, DomainError> {
    let validated = args.validate().map_err(DomainError::invalid_argument)?;

    let owner = match target_user_id {
        Some(target) => Some(target),
        None if is_administrator(actor) => None,
        None => Some(actor.id),
    };

    let rows = match owner {
        Some(owner) => {
            deps.products
                .page_by_owner(owner, validated.cursor, validated.fetch_limit())
                .await?
        }
        None => {
            deps.products
                .page_all(validated.cursor, validated.fetch_limit())
                .await?
        }
    };
    Ok(build_page(rows, &validated, |p| p.id.into_uuid()))
}

/// The caller's own products, newest first.
pub async fn list_mine(deps: &ServerDeps, actor: &User) -> Result<Vec<Product>, DomainError> {
    Ok(deps.products.list_by_owner(actor.id).await?)
}

/// Patches a product. Ownership transfer is administrator-only; an empty
/// patch succeeds without touching the row.
pub async fn update(
    deps: &ServerDeps,
    actor: &User,
    id: ProductId,
    patch: ProductPatch,
) -> Result<ProductId, DomainError> {
    let product = deps
        .products
        .get(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Product"))?;
    ensure_owner_or_admin(actor, product.owner_user_id, "You cannot update this product")?;

    if patch.owner_user_id.is_some() {
        ensure_administrator(actor, "Only administrators can change the ownerUserId")?;
    }

    if patch.is_empty() {
        return Ok(id);
    }

    deps.products.patch(id, &patch).await?;
    info!(product_id = %id, "Product updated");
    Ok(id)
}

/// Deletes a product and sweeps its sale listings from every event.
pub async fn remove(
    deps: &ServerDeps,
    actor: &User,
    id: ProductId,
) -> Result<ProductId, DomainError> {
    let product = deps
        .products
        .get(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Product"))?;
    ensure_owner_or_admin(actor, product.owner_user_id, "You cannot delete this product")?;

    let delisted = deps.event_products.delete_by_product(id).await?;
    deps.products.delete(id).await?;
    info!(product_id = %id, delisted, "Product deleted");
    Ok(id)
}

/// On-sale listing joined with its product's display fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleListingItem {
    #[serde(flatten)]
    pub listing: EventProduct,
    pub product_name: String,
    pub product_description: String,
    pub original_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<UserId>,
}

/// Everything currently `On Sale` at an event, joined with product display
/// fields. Listings whose product vanished keep a placeholder name.
pub async fn list_for_event_sale(
    deps: &ServerDeps,
    event_id: EventId,
) -> Result<Vec<SaleListingItem>, DomainError> {
    let listings = deps
        .event_products
        .list_by_event_and_status(event_id, Status::OnSale)
        .await?;

    let mut items = Vec::with_capacity(listings.len());
    for listing in listings {
        let product = deps.products.get(listing.product_id).await?;
        items.push(SaleListingItem {
            product_name: product
                .as_ref()
                .map(|p| p.product_name.clone())
                .unwrap_or_else(|| "Unknown Product".to_string()),
            product_description: product
                .as_ref()
                .map(|p| p.description.clone())
                .unwrap_or_default(),
            original_price: product.as_ref().map(|p| p.purchase_price).unwrap_or(0.0),
            owner_id: product.as_ref().map(|p| p.owner_user_id),
            listing,
        });
    }
    Ok(items)
}
