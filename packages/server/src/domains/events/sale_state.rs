//! Sale listing lifecycle.
//!
//! A listing starts `On Sale` when an organizer adds the product to an
//! event. Organizer paths are deliberately unrestricted: the listing upsert
//! moves any state back to `On Sale`, a status patch may set anything, and
//! removal is legal from any state. Only the owner's availability toggle is
//! constrained here, with `Sold` terminal for it in both directions.

use crate::common::Status;
use crate::domains::events::models::EventProduct;

/// Listing state as seen by the owner availability toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleState {
    /// No listing row exists for the (event, product) pair.
    Absent,
    OnSale,
    Reserved,
    Sold,
    /// Any other status an organizer set by hand.
    Other(Status),
}

/// What the owner availability toggle should do for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityAction {
    /// Patch the listing to `Reserved`.
    MarkReserved,
    /// Informational no-op; the listing (or its absence) already matches,
    /// or only an organizer may move it from here.
    Ignore,
    /// The listing is `Sold`; the owner path must refuse.
    RefuseSold,
}

impl SaleState {
    pub fn of(listing: Option<&EventProduct>) -> Self {
        match listing {
            None => SaleState::Absent,
            Some(ep) => match ep.status {
                Status::OnSale => SaleState::OnSale,
                Status::Reserved => SaleState::Reserved,
                Status::Sold => SaleState::Sold,
                other => SaleState::Other(other),
            },
        }
    }

    /// Owner availability toggle outcome for this state.
    pub fn availability_action(self, available: bool) -> AvailabilityAction {
        match (self, available) {
            (SaleState::Sold, _) => AvailabilityAction::RefuseSold,
            (SaleState::OnSale, false) => AvailabilityAction::MarkReserved,
            _ => AvailabilityAction::Ignore,
        }
    }
}
