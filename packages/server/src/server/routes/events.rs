//! Event, roster, and sale listing routes.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::common::{
    DomainError, EventId, EventProductId, ParticipantId, ProductId, Role, Status, UserId,
};
use crate::domains::events::effects::analytics::{get_event_analytics, EventAnalytics};
use crate::domains::events::effects::event_operations;
use crate::domains::events::effects::queries::{self, EventDetails, EventWithRole};
use crate::domains::events::effects::roster;
use crate::domains::events::effects::sale;
use crate::domains::events::models::{CreateEvent, Event, EventParticipant, EventProduct};
use crate::domains::products::effects::product_operations::{list_for_event_sale, SaleListingItem};
use crate::kernel::ServerDeps;
use crate::server::error::ApiError;
use crate::server::middleware::AuthContext;

#[derive(Serialize)]
pub struct EventIdResponse {
    pub id: EventId,
}

#[derive(Serialize)]
pub struct ParticipantIdResponse {
    pub id: ParticipantId,
}

#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddParticipantRequest {
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSaleItemRequest {
    pub product_id: ProductId,
    pub sale_price: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateListingStatusRequest {
    pub status: Status,
}

pub async fn create_event_handler(
    State(deps): State<Arc<ServerDeps>>,
    Extension(auth): Extension<AuthContext>,
    Json(input): Json<CreateEvent>,
) -> Result<(StatusCode, Json<EventIdResponse>), ApiError> {
    let actor = auth.require_actor()?;
    let id = event_operations::create(&deps, &actor, input).await?;
    Ok((StatusCode::CREATED, Json(EventIdResponse { id })))
}

pub async fn list_events_handler(
    State(deps): State<Arc<ServerDeps>>,
) -> Result<Json<Vec<Event>>, ApiError> {
    Ok(Json(queries::list_events(&deps).await?))
}

pub async fn event_details_handler(
    State(deps): State<Arc<ServerDeps>>,
    Path(id): Path<EventId>,
) -> Result<Json<EventDetails>, ApiError> {
    let details = queries::get_details(&deps, id)
        .await?
        .ok_or_else(|| DomainError::not_found("Event"))?;
    Ok(Json(details))
}

pub async fn my_events_handler(
    State(deps): State<Arc<ServerDeps>>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Vec<EventWithRole>>, ApiError> {
    let actor = auth.require_actor()?;
    Ok(Json(queries::get_my_events(&deps, &actor).await?))
}

pub async fn add_participant_handler(
    State(deps): State<Arc<ServerDeps>>,
    Extension(auth): Extension<AuthContext>,
    Path(event_id): Path<EventId>,
    Json(request): Json<AddParticipantRequest>,
) -> Result<(StatusCode, Json<ParticipantIdResponse>), ApiError> {
    let actor = auth.require_actor()?;
    let id = roster::add_participant(&deps, &actor, event_id, &request.email, request.role).await?;
    Ok((StatusCode::CREATED, Json(ParticipantIdResponse { id })))
}

pub async fn remove_participant_handler(
    State(deps): State<Arc<ServerDeps>>,
    Extension(auth): Extension<AuthContext>,
    Path((event_id, user_id)): Path<(EventId, UserId)>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let actor = auth.require_actor()?;
    roster::remove_participant(&deps, &actor, event_id, user_id).await?;
    Ok(Json(SuccessResponse { success: true }))
}

pub async fn participate_handler(
    State(deps): State<Arc<ServerDeps>>,
    Extension(auth): Extension<AuthContext>,
    Path(event_id): Path<EventId>,
) -> Result<(StatusCode, Json<EventParticipant>), ApiError> {
    let actor = auth.require_actor()?;
    let participant = event_operations::participate(&deps, &actor, event_id).await?;
    Ok((StatusCode::CREATED, Json(participant)))
}

/// Lists a product On Sale at the event, or re-lists an existing row at
/// the new price.
pub async fn add_sale_item_handler(
    State(deps): State<Arc<ServerDeps>>,
    Extension(auth): Extension<AuthContext>,
    Path(event_id): Path<EventId>,
    Json(request): Json<AddSaleItemRequest>,
) -> Result<Json<EventProduct>, ApiError> {
    let actor = auth.require_actor()?;
    let listing =
        sale::add_product_to_sale(&deps, &actor, event_id, request.product_id, request.sale_price)
            .await?;
    Ok(Json(listing))
}

pub async fn event_sale_items_handler(
    State(deps): State<Arc<ServerDeps>>,
    Path(event_id): Path<EventId>,
) -> Result<Json<Vec<SaleListingItem>>, ApiError> {
    Ok(Json(list_for_event_sale(&deps, event_id).await?))
}

pub async fn update_listing_status_handler(
    State(deps): State<Arc<ServerDeps>>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<EventProductId>,
    Json(request): Json<UpdateListingStatusRequest>,
) -> Result<Json<EventProduct>, ApiError> {
    let actor = auth.require_actor()?;
    let listing = sale::update_product_status(&deps, &actor, id, request.status).await?;
    Ok(Json(listing))
}

pub async fn remove_sale_item_handler(
    State(deps): State<Arc<ServerDeps>>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<EventProductId>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let actor = auth.require_actor()?;
    sale::remove_product_from_sale(&deps, &actor, id).await?;
    Ok(Json(SuccessResponse { success: true }))
}

pub async fn event_analytics_handler(
    State(deps): State<Arc<ServerDeps>>,
    Extension(auth): Extension<AuthContext>,
    Path(event_id): Path<EventId>,
) -> Result<Json<EventAnalytics>, ApiError> {
    let actor = auth.require_actor()?;
    Ok(Json(get_event_analytics(&deps, &actor, event_id).await?))
}
