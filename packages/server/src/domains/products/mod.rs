// Products domain - the collectible inventory
//
// Responsibilities:
// - Product CRUD with per-owner scoping
// - Directory reads (status, type, cursor pagination)
// - Owner-driven availability toggling against event sales

pub mod effects;
pub mod models;

pub use models::*;
