// Effects (side effects) for the identity domain
//
// Thin service functions over the user store. Sync is driven by the
// webhook route; queries back the directory endpoints.

pub mod queries;
pub mod sync;
