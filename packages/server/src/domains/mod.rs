//! Domain modules - one bounded context per directory.

pub mod events;
pub mod identity;
pub mod products;
