//! In-memory store engine.
//!
//! One `BTreeMap<Uuid, row>` per collection behind a single `RwLock`, so a
//! write takes the whole store. Uniqueness checks run inside `insert` under
//! the write lock, which is what makes the Duplicate contract race-free.
//! BTreeMap iteration order is id order, and ids are v7, so ascending
//! iteration is creation order and `.rev()` is newest first.

use std::collections::BTreeMap;
use std::ops::Bound;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::common::{
    EventId, EventProductId, ParticipantId, ProductId, ProductType, Role, Status, UserId,
};
use crate::domains::events::models::{
    Event, EventAttributes, EventParticipant, EventProduct, EventProductAttributes,
    ParticipantAttributes,
};
use crate::domains::identity::models::{User, UserAttributes};
use crate::domains::products::models::{Product, ProductAttributes, ProductPatch};
use crate::store::{
    EventParticipantStore, EventProductStore, EventStore, ProductStore, StoreError, UserStore,
};

#[derive(Default)]
struct Collections {
    users: BTreeMap<Uuid, User>,
    products: BTreeMap<Uuid, Product>,
    events: BTreeMap<Uuid, Event>,
    participants: BTreeMap<Uuid, EventParticipant>,
    event_products: BTreeMap<Uuid, EventProduct>,
}

/// Process-local store implementing every repository trait.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ascending slice of `map` strictly after `cursor`, at most `limit` rows.
fn scan_asc<T: Clone>(map: &BTreeMap<Uuid, T>, cursor: Option<Uuid>, limit: usize) -> Vec<T> {
    match cursor {
        Some(after) => map
            .range((Bound::Excluded(after), Bound::Unbounded))
            .take(limit)
            .map(|(_, row)| row.clone())
            .collect(),
        None => map.values().take(limit).cloned().collect(),
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn get(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(id.as_uuid()).cloned())
    }

    async fn find_by_external_id(&self, external_id: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .values()
            .find(|u| u.external_id == external_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, attrs: UserAttributes) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;
        if inner
            .users
            .values()
            .any(|u| u.external_id == attrs.external_id)
        {
            return Err(StoreError::duplicate("users.external_id"));
        }
        let user = User::new(attrs);
        inner.users.insert(user.id.into_uuid(), user.clone());
        Ok(user)
    }

    async fn patch(&self, id: UserId, attrs: UserAttributes) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;
        let user = inner
            .users
            .get_mut(id.as_uuid())
            .ok_or(StoreError::missing("user"))?;
        user.overwrite(attrs);
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner
            .users
            .remove(id.as_uuid())
            .map(|_| ())
            .ok_or(StoreError::missing("user"))
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().cloned().collect())
    }

    async fn list_page(&self, cursor: Option<Uuid>, limit: usize) -> Result<Vec<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(scan_asc(&inner.users, cursor, limit))
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.products.get(id.as_uuid()).cloned())
    }

    async fn insert(&self, attrs: ProductAttributes) -> Result<Product, StoreError> {
        let mut inner = self.inner.write().await;
        let product = Product::new(attrs);
        inner
            .products
            .insert(product.id.into_uuid(), product.clone());
        Ok(product)
    }

    async fn patch(&self, id: ProductId, patch: &ProductPatch) -> Result<Product, StoreError> {
        let mut inner = self.inner.write().await;
        let product = inner
            .products
            .get_mut(id.as_uuid())
            .ok_or(StoreError::missing("product"))?;
        patch.apply(product);
        Ok(product.clone())
    }

    async fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner
            .products
            .remove(id.as_uuid())
            .map(|_| ())
            .ok_or(StoreError::missing("product"))
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.products.values().cloned().collect())
    }

    async fn list_by_status(&self, status: Status) -> Result<Vec<Product>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .products
            .values()
            .filter(|p| p.status == status)
            .cloned()
            .collect())
    }

    async fn list_by_type(&self, product_type: ProductType) -> Result<Vec<Product>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .products
            .values()
            .filter(|p| p.product_type.contains(&product_type))
            .cloned()
            .collect())
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Product>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .products
            .values()
            .rev()
            .filter(|p| p.owner_user_id == owner)
            .cloned()
            .collect())
    }

    async fn page_all(
        &self,
        cursor: Option<Uuid>,
        limit: usize,
    ) -> Result<Vec<Product>, StoreError> {
        let inner = self.inner.read().await;
        let page = match cursor {
            Some(before) => inner
                .products
                .range(..before)
                .rev()
                .take(limit)
                .map(|(_, p)| p.clone())
                .collect(),
            None => inner.products.values().rev().take(limit).cloned().collect(),
        };
        Ok(page)
    }

    async fn page_by_owner(
        &self,
        owner: UserId,
        cursor: Option<Uuid>,
        limit: usize,
    ) -> Result<Vec<Product>, StoreError> {
        let inner = self.inner.read().await;
        let page = match cursor {
            Some(before) => inner
                .products
                .range(..before)
                .rev()
                .filter(|(_, p)| p.owner_user_id == owner)
                .take(limit)
                .map(|(_, p)| p.clone())
                .collect(),
            None => inner
                .products
                .values()
                .rev()
                .filter(|p| p.owner_user_id == owner)
                .take(limit)
                .cloned()
                .collect(),
        };
        Ok(page)
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn get(&self, id: EventId) -> Result<Option<Event>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.events.get(id.as_uuid()).cloned())
    }

    async fn insert(&self, attrs: EventAttributes) -> Result<Event, StoreError> {
        let mut inner = self.inner.write().await;
        let event = Event::new(attrs);
        inner.events.insert(event.id.into_uuid(), event.clone());
        Ok(event)
    }

    async fn delete(&self, id: EventId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner
            .events
            .remove(id.as_uuid())
            .map(|_| ())
            .ok_or(StoreError::missing("event"))
    }

    async fn list(&self) -> Result<Vec<Event>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.events.values().rev().cloned().collect())
    }
}

#[async_trait]
impl EventParticipantStore for MemoryStore {
    async fn get(&self, id: ParticipantId) -> Result<Option<EventParticipant>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.participants.get(id.as_uuid()).cloned())
    }

    async fn find_by_event_and_user(
        &self,
        event: EventId,
        user: UserId,
    ) -> Result<Option<EventParticipant>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .participants
            .values()
            .find(|p| p.event_id == event && p.user_id == user)
            .cloned())
    }

    async fn insert(&self, attrs: ParticipantAttributes) -> Result<EventParticipant, StoreError> {
        let mut inner = self.inner.write().await;
        if inner
            .participants
            .values()
            .any(|p| p.event_id == attrs.event_id && p.user_id == attrs.user_id)
        {
            return Err(StoreError::duplicate("event_participants.event_user"));
        }
        let participant = EventParticipant::new(attrs);
        inner
            .participants
            .insert(participant.id.into_uuid(), participant.clone());
        Ok(participant)
    }

    async fn delete(&self, id: ParticipantId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner
            .participants
            .remove(id.as_uuid())
            .map(|_| ())
            .ok_or(StoreError::missing("event participant"))
    }

    async fn list_by_event(&self, event: EventId) -> Result<Vec<EventParticipant>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .participants
            .values()
            .filter(|p| p.event_id == event)
            .cloned()
            .collect())
    }

    async fn list_by_user(&self, user: UserId) -> Result<Vec<EventParticipant>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .participants
            .values()
            .filter(|p| p.user_id == user)
            .cloned()
            .collect())
    }

    async fn count_role_others(
        &self,
        event: EventId,
        role: Role,
        excluded: UserId,
    ) -> Result<usize, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .participants
            .values()
            .filter(|p| p.event_id == event && p.role == role && p.user_id != excluded)
            .count())
    }
}

#[async_trait]
impl EventProductStore for MemoryStore {
    async fn get(&self, id: EventProductId) -> Result<Option<EventProduct>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.event_products.get(id.as_uuid()).cloned())
    }

    async fn find_by_event_and_product(
        &self,
        event: EventId,
        product: ProductId,
    ) -> Result<Option<EventProduct>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .event_products
            .values()
            .find(|ep| ep.event_id == event && ep.product_id == product)
            .cloned())
    }

    async fn insert(&self, attrs: EventProductAttributes) -> Result<EventProduct, StoreError> {
        let mut inner = self.inner.write().await;
        if inner
            .event_products
            .values()
            .any(|ep| ep.event_id == attrs.event_id && ep.product_id == attrs.product_id)
        {
            return Err(StoreError::duplicate("event_products.event_product"));
        }
        let listing = EventProduct::new(attrs);
        inner
            .event_products
            .insert(listing.id.into_uuid(), listing.clone());
        Ok(listing)
    }

    async fn patch_status(
        &self,
        id: EventProductId,
        status: Status,
    ) -> Result<EventProduct, StoreError> {
        let mut inner = self.inner.write().await;
        let listing = inner
            .event_products
            .get_mut(id.as_uuid())
            .ok_or(StoreError::missing("event product"))?;
        listing.status = status;
        Ok(listing.clone())
    }

    async fn patch_listing(
        &self,
        id: EventProductId,
        status: Status,
        sale_price: Option<f64>,
    ) -> Result<EventProduct, StoreError> {
        let mut inner = self.inner.write().await;
        let listing = inner
            .event_products
            .get_mut(id.as_uuid())
            .ok_or(StoreError::missing("event product"))?;
        listing.status = status;
        listing.sale_price = sale_price;
        Ok(listing.clone())
    }

    async fn delete(&self, id: EventProductId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner
            .event_products
            .remove(id.as_uuid())
            .map(|_| ())
            .ok_or(StoreError::missing("event product"))
    }

    async fn delete_by_product(&self, product: ProductId) -> Result<usize, StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.event_products.len();
        inner.event_products.retain(|_, ep| ep.product_id != product);
        Ok(before - inner.event_products.len())
    }

    async fn list_by_event(&self, event: EventId) -> Result<Vec<EventProduct>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .event_products
            .values()
            .filter(|ep| ep.event_id == event)
            .cloned()
            .collect())
    }

    async fn list_by_event_and_status(
        &self,
        event: EventId,
        status: Status,
    ) -> Result<Vec<EventProduct>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .event_products
            .values()
            .filter(|ep| ep.event_id == event && ep.status == status)
            .cloned()
            .collect())
    }
}
