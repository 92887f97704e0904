// HTTP routes
pub mod events;
pub mod health;
pub mod products;
pub mod users;
pub mod webhook;

pub use events::*;
pub use health::*;
pub use products::*;
pub use users::*;
pub use webhook::*;
