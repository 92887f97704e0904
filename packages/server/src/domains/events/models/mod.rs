pub mod event;
pub mod event_product;
pub mod participant;

pub use event::*;
pub use event_product::*;
pub use participant::*;
