// Collectible Inventory & Event Sales - API Core
//
// This crate provides the backend API for managing collectible inventories
// and selling them at club events. Architecture follows domain-driven design:
// domains own models and effects, the kernel wires infrastructure.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;
pub mod store;

pub use config::*;
