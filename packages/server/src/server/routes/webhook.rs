//! Identity provider webhook endpoint.
//!
//! Clerk delivers user lifecycle events signed with svix headers. The
//! delivery is verified against the configured secret before the payload
//! is trusted; verification failures and malformed payloads answer 400
//! without touching the store.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::HeaderMap, http::StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::common::{DomainError, Role};
use crate::domains::identity::effects::sync::{delete_user, upsert_user};
use crate::domains::identity::models::UserAttributes;
use crate::kernel::ServerDeps;
use crate::server::error::ApiError;

#[derive(Deserialize)]
struct RawIdentityEvent {
    #[serde(rename = "type")]
    event_type: String,
    data: Value,
}

#[derive(Deserialize)]
struct ClerkUserData {
    id: String,
    #[serde(default)]
    email_addresses: Vec<ClerkEmailAddress>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    phone_numbers: Vec<ClerkPhoneNumber>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    public_metadata: Value,
}

#[derive(Deserialize)]
struct ClerkEmailAddress {
    email_address: String,
}

#[derive(Deserialize)]
struct ClerkPhoneNumber {
    phone_number: String,
}

pub async fn clerk_webhook_handler(
    State(deps): State<Arc<ServerDeps>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let verifier = deps
        .webhook_verifier
        .as_ref()
        .ok_or_else(|| DomainError::configuration("CLERK_WEBHOOK_SECRET is not set"))?;

    if let Err(cause) = verifier.verify(&body, &headers) {
        tracing::warn!(error = %cause, "Rejected webhook delivery with bad signature");
        return Err(ApiError::bad_request("Error occurred"));
    }

    let event: RawIdentityEvent =
        serde_json::from_slice(&body).map_err(|_| ApiError::bad_request("Error occurred"))?;

    match event.event_type.as_str() {
        "user.created" | "user.updated" => {
            let attrs = normalize_user_payload(event.data)
                .ok_or_else(|| ApiError::bad_request("Invalid event data"))?;
            upsert_user(&deps, attrs).await?;
        }
        "user.deleted" => {
            let external_id = event
                .data
                .get("id")
                .and_then(Value::as_str)
                .ok_or_else(|| ApiError::bad_request("Invalid event data"))?;
            delete_user(&deps, external_id).await?;
        }
        other => {
            tracing::info!(event_type = other, "Ignored unhandled identity webhook event");
        }
    }

    Ok(StatusCode::OK)
}

/// Maps a Clerk user payload onto our user attributes. The primary email
/// address is required; every other field is optional. An unrecognized
/// role hint in the public metadata falls back to Guest.
fn normalize_user_payload(data: Value) -> Option<UserAttributes> {
    let data: ClerkUserData = serde_json::from_value(data).ok()?;
    let role = data
        .public_metadata
        .get("role")
        .and_then(Value::as_str)
        .and_then(|value| value.parse::<Role>().ok())
        .unwrap_or_default();
    let email = data.email_addresses.into_iter().next()?.email_address;
    Some(UserAttributes {
        external_id: data.id,
        email,
        nickname: data.username,
        first_name: data.first_name,
        last_name: data.last_name,
        phone_number: data
            .phone_numbers
            .into_iter()
            .next()
            .map(|p| p.phone_number),
        image_url: data.image_url,
        role,
    })
}
