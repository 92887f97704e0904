//! Sale listing: one product offered at one event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{EventId, EventProductId, ProductId, Status};

/// Listing of a product in an event's sale. At most one row per
/// (event, product) pair; re-listing patches the existing row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventProduct {
    pub id: EventProductId,
    pub event_id: EventId,
    pub product_id: ProductId,
    pub status: Status,
    /// Asking price at this event, independent of the product's own prices.
    pub sale_price: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl EventProduct {
    pub fn new(attrs: EventProductAttributes) -> Self {
        Self {
            id: EventProductId::new(),
            event_id: attrs.event_id,
            product_id: attrs.product_id,
            status: attrs.status,
            sale_price: attrs.sale_price,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventProductAttributes {
    pub event_id: EventId,
    pub product_id: ProductId,
    pub status: Status,
    pub sale_price: Option<f64>,
}
