// Identity domain - local mirror of the identity provider's accounts
//
// Responsibilities:
// - Webhook-driven sync (created/updated/deleted deliveries)
// - Current-user resolution for request auth
// - User directory queries (admin listing, lite labels for pickers)

pub mod effects;
pub mod models;

pub use models::*;
