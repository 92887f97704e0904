//! Product inventory routes.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::common::pagination::{Page, PageArgs};
use crate::common::{DomainError, EventId, ProductId, ProductType, Status, UserId};
use crate::domains::events::models::EventProduct;
use crate::domains::products::effects::availability::set_availability_for_event;
use crate::domains::products::effects::product_operations as products;
use crate::domains::products::models::{CreateProduct, Product, ProductPatch};
use crate::kernel::ServerDeps;
use crate::server::error::ApiError;
use crate::server::middleware::AuthContext;

#[derive(Serialize)]
pub struct ProductIdResponse {
    pub id: ProductId,
}

/// Optional index filters; at most one is applied, status first.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    pub status: Option<Status>,
    pub product_type: Option<ProductType>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPageQuery {
    pub page_size: Option<i32>,
    pub cursor: Option<String>,
    pub target_user_id: Option<UserId>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRequest {
    pub event_id: EventId,
    pub available: bool,
}

pub async fn create_product_handler(
    State(deps): State<Arc<ServerDeps>>,
    Extension(auth): Extension<AuthContext>,
    Json(input): Json<CreateProduct>,
) -> Result<(StatusCode, Json<ProductIdResponse>), ApiError> {
    let actor = auth.require_actor()?;
    let id = products::create(&deps, &actor, input).await?;
    Ok((StatusCode::CREATED, Json(ProductIdResponse { id })))
}

pub async fn list_products_handler(
    State(deps): State<Arc<ServerDeps>>,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let items = match (query.status, query.product_type) {
        (Some(status), _) => products::list_by_status(&deps, status).await?,
        (None, Some(product_type)) => products::list_by_type(&deps, product_type).await?,
        (None, None) => products::list(&deps).await?,
    };
    Ok(Json(items))
}

pub async fn get_product_handler(
    State(deps): State<Arc<ServerDeps>>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>, ApiError> {
    let product = products::get_by_id(&deps, id)
        .await?
        .ok_or_else(|| DomainError::not_found("Product"))?;
    Ok(Json(product))
}

pub async fn update_product_handler(
    State(deps): State<Arc<ServerDeps>>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<ProductId>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<ProductIdResponse>, ApiError> {
    let actor = auth.require_actor()?;
    let id = products::update(&deps, &actor, id, patch).await?;
    Ok(Json(ProductIdResponse { id }))
}

pub async fn delete_product_handler(
    State(deps): State<Arc<ServerDeps>>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<ProductId>,
) -> Result<Json<ProductIdResponse>, ApiError> {
    let actor = auth.require_actor()?;
    let id = products::remove(&deps, &actor, id).await?;
    Ok(Json(ProductIdResponse { id }))
}

pub async fn my_products_handler(
    State(deps): State<Arc<ServerDeps>>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let actor = auth.require_actor()?;
    Ok(Json(products::list_mine(&deps, &actor).await?))
}

pub async fn products_page_handler(
    State(deps): State<Arc<ServerDeps>>,
    Extension(auth): Extension<AuthContext>,
    Query(query): Query<ProductPageQuery>,
) -> Result<Json<Page<Product>>, ApiError> {
    let actor = auth.require_actor()?;
    let args = PageArgs::new(query.page_size, query.cursor);
    let page = products::list_paginated(&deps, &actor, args, query.target_user_id).await?;
    Ok(Json(page))
}

/// Owner availability toggle. The body names the event; the response is
/// the patched listing, or null when nothing changed.
pub async fn product_availability_handler(
    State(deps): State<Arc<ServerDeps>>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<ProductId>,
    Json(request): Json<AvailabilityRequest>,
) -> Result<Json<Option<EventProduct>>, ApiError> {
    let actor = auth.require_actor()?;
    let updated =
        set_availability_for_event(&deps, &actor, id, request.event_id, request.available).await?;
    Ok(Json(updated))
}
