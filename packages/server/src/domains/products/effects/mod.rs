// Effects (side effects) for the products domain
//
// Thin service functions: authorization decisions come from common::auth,
// storage goes through the repository traits.

pub mod availability;
pub mod product_operations;
