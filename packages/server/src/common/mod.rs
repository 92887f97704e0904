//! Shared types used across domains.

pub mod auth;
pub mod entity_ids;
pub mod error;
pub mod id;
pub mod pagination;
pub mod types;

pub use entity_ids::*;
pub use error::DomainError;
pub use types::{Condition, ProductType, Role, Status};
