//! Repository traits over the document store.
//!
//! Effects talk to storage through these traits only, mirroring the kernel's
//! trait-per-external-service layout. Each trait covers one collection and
//! its index reads; uniqueness rules live behind `insert` so check-then-act
//! races surface as [`StoreError::Duplicate`] instead of corrupt data.
//!
//! Scan directions are part of the contract: user reads are ascending
//! (oldest first), product and event reads are descending where the
//! original views show newest first. Ids are UUID v7, so id order is
//! creation order.

use async_trait::async_trait;
use thiserror::Error;
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

pub mod memory;

pub use memory::MemoryStore;

/// Storage failures surfaced by the repository traits.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An insert violated a unique index.
    #[error("unique index violation: {constraint}")]
    Duplicate { constraint: &'static str },

    /// A patch or delete addressed a row that no longer exists.
    #[error("missing row: {what}")]
    Missing { what: &'static str },

    /// The storage engine itself failed.
    #[error("{0}")]
    Internal(String),
}

impl StoreError {
    pub fn duplicate(constraint: &'static str) -> Self {
        Self::Duplicate { constraint }
    }

    pub fn missing(what: &'static str) -> Self {
        Self::Missing { what }
    }
}

/// Users collection. Rows are written only by the identity sync flow.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get(&self, id: UserId) -> Result<Option<User>, StoreError>;

    /// Lookup on the unique `users.external_id` index.
    async fn find_by_external_id(&self, external_id: &str) -> Result<Option<User>, StoreError>;

    /// Lookup on the email index; first match wins.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Rejects a second row with the same external id.
    async fn insert(&self, attrs: UserAttributes) -> Result<User, StoreError>;

    /// Full attribute overwrite; id and creation time are kept.
    async fn patch(&self, id: UserId, attrs: UserAttributes) -> Result<User, StoreError>;

    async fn delete(&self, id: UserId) -> Result<(), StoreError>;

    /// Every user, oldest first.
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// Ascending scan of up to `limit` rows strictly after `cursor`.
    async fn list_page(&self, cursor: Option<Uuid>, limit: usize) -> Result<Vec<User>, StoreError>;
}

/// Products collection.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    async fn insert(&self, attrs: ProductAttributes) -> Result<Product, StoreError>;

    /// Applies the present patch fields and returns the updated row.
    async fn patch(&self, id: ProductId, patch: &ProductPatch) -> Result<Product, StoreError>;

    async fn delete(&self, id: ProductId) -> Result<(), StoreError>;

    /// Every product, oldest first.
    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    /// Index read on status, oldest first.
    async fn list_by_status(&self, status: Status) -> Result<Vec<Product>, StoreError>;

    /// Products whose type list contains `product_type`, oldest first.
    async fn list_by_type(&self, product_type: ProductType) -> Result<Vec<Product>, StoreError>;

    /// One owner's products, newest first.
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Product>, StoreError>;

    /// Descending scan of up to `limit` rows strictly before `cursor`.
    async fn page_all(&self, cursor: Option<Uuid>, limit: usize)
        -> Result<Vec<Product>, StoreError>;

    /// Descending per-owner scan of up to `limit` rows strictly before
    /// `cursor`.
    async fn page_by_owner(
        &self,
        owner: UserId,
        cursor: Option<Uuid>,
        limit: usize,
    ) -> Result<Vec<Product>, StoreError>;
}

/// Events collection.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn get(&self, id: EventId) -> Result<Option<Event>, StoreError>;

    async fn insert(&self, attrs: EventAttributes) -> Result<Event, StoreError>;

    async fn delete(&self, id: EventId) -> Result<(), StoreError>;

    /// Every event, newest first.
    async fn list(&self) -> Result<Vec<Event>, StoreError>;
}

/// Event rosters. One row per (event, user) pair.
#[async_trait]
pub trait EventParticipantStore: Send + Sync {
    async fn get(&self, id: ParticipantId) -> Result<Option<EventParticipant>, StoreError>;

    /// Lookup on the unique (event, user) index.
    async fn find_by_event_and_user(
        &self,
        event: EventId,
        user: UserId,
    ) -> Result<Option<EventParticipant>, StoreError>;

    /// Rejects a second row for the same (event, user) pair.
    async fn insert(&self, attrs: ParticipantAttributes) -> Result<EventParticipant, StoreError>;

    async fn delete(&self, id: ParticipantId) -> Result<(), StoreError>;

    /// Roster of one event, oldest first.
    async fn list_by_event(&self, event: EventId) -> Result<Vec<EventParticipant>, StoreError>;

    /// Every event membership of one user, oldest first.
    async fn list_by_user(&self, user: UserId) -> Result<Vec<EventParticipant>, StoreError>;

    /// Rows for `event` holding exactly `role`, excluding `excluded`.
    /// Backs the last-organizer safeguard.
    async fn count_role_others(
        &self,
        event: EventId,
        role: Role,
        excluded: UserId,
    ) -> Result<usize, StoreError>;
}

/// Sale listings. One row per (event, product) pair.
#[async_trait]
pub trait EventProductStore: Send + Sync {
    async fn get(&self, id: EventProductId) -> Result<Option<EventProduct>, StoreError>;

    /// Lookup on the unique (event, product) index.
    async fn find_by_event_and_product(
        &self,
        event: EventId,
        product: ProductId,
    ) -> Result<Option<EventProduct>, StoreError>;

    /// Rejects a second row for the same (event, product) pair.
    async fn insert(&self, attrs: EventProductAttributes) -> Result<EventProduct, StoreError>;

    /// Status-only patch, returning the updated row.
    async fn patch_status(
        &self,
        id: EventProductId,
        status: Status,
    ) -> Result<EventProduct, StoreError>;

    /// Listing upsert's patch half: status and sale price together.
    async fn patch_listing(
        &self,
        id: EventProductId,
        status: Status,
        sale_price: Option<f64>,
    ) -> Result<EventProduct, StoreError>;

    async fn delete(&self, id: EventProductId) -> Result<(), StoreError>;

    /// Removes every listing of one product, returning how many went.
    /// Backs the delete cascade.
    async fn delete_by_product(&self, product: ProductId) -> Result<usize, StoreError>;

    /// Listings of one event, oldest first.
    async fn list_by_event(&self, event: EventId) -> Result<Vec<EventProduct>, StoreError>;

    /// Listings of one event in one status, oldest first.
    async fn list_by_event_and_status(
        &self,
        event: EventId,
        status: Status,
    ) -> Result<Vec<EventProduct>, StoreError>;
}
