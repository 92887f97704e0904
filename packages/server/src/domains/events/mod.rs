// Events domain - sale events, their rosters, and their listings
//
// Responsibilities:
// - Event creation (creator becomes the event admin and first organizer)
// - Roster management (add by email / remove with safeguards / self-signup)
// - Sale listings (On Sale upsert, status changes, removal)
// - Read models (details with joins, per-user events, analytics)

pub mod effects;
pub mod models;
pub mod sale_state;

pub use models::*;
