// Request middleware
pub mod identity;

pub use identity::*;
