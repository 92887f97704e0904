//! Typed ID definitions for all domain entities.
//!
//! This module defines type aliases for each domain entity, providing
//! compile-time type safety for ID usage throughout the application.
//!
//! # Example
//!
//! ```rust
//! use server_core::common::{EventId, ProductId, UserId};
//!
//! // These are incompatible types - compiler prevents mixing them up
//! let user_id: UserId = UserId::new();
//! let product_id: ProductId = ProductId::new();
//!
//! // This would be a compile error:
//! // let wrong: EventId = user_id;
//! ```

// Re-export the core Id type and version markers
pub use super::id::{Id, V4, V7};

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for User entities (synced from the identity provider).
pub struct User;

/// Marker type for Product entities (collectibles in an inventory).
pub struct Product;

/// Marker type for Event entities (sale events).
pub struct Event;

/// Marker type for EventParticipant entities (event roster rows).
pub struct EventParticipant;

/// Marker type for EventProduct entities (sale listing rows).
pub struct EventProduct;

/// Marker type for Collection groupings referenced by products.
pub struct Collection;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for User entities.
pub type UserId = Id<User>;

/// Typed ID for Product entities.
pub type ProductId = Id<Product>;

/// Typed ID for Event entities.
pub type EventId = Id<Event>;

/// Typed ID for EventParticipant entities.
pub type ParticipantId = Id<EventParticipant>;

/// Typed ID for EventProduct entities.
pub type EventProductId = Id<EventProduct>;

/// Typed ID for Collection groupings.
pub type CollectionId = Id<Collection>;
