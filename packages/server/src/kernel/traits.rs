// Trait definitions for dependency injection
//
// These are infrastructure traits only - no business logic.

use anyhow::Result;
use axum::http::HeaderMap;

/// Verifies signed webhook deliveries from the identity provider.
///
/// Implementations check the delivery's signature headers against the
/// shared signing secret. The production adapter wraps svix; tests inject
/// stubs that accept or reject everything.
pub trait BaseWebhookVerifier: Send + Sync {
    /// Ok only when `payload` matches the signature carried in `headers`.
    fn verify(&self, payload: &[u8], headers: &HeaderMap) -> Result<()>;
}
