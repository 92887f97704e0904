//! Server dependencies for effects (using traits for testability)
//!
//! This module provides the central dependency container used by all domain
//! effects. Storage collections and external services sit behind trait
//! abstractions so tests can swap them out.

use std::sync::Arc;

use anyhow::Result;
use axum::http::HeaderMap;
use svix::webhooks::Webhook;

use crate::kernel::traits::BaseWebhookVerifier;
use crate::store::{
    EventParticipantStore, EventProductStore, EventStore, MemoryStore, ProductStore, UserStore,
};

// =============================================================================
// Svix Adapter (implements BaseWebhookVerifier trait)
// =============================================================================

/// Wrapper around svix's Webhook that implements BaseWebhookVerifier
pub struct SvixAdapter(Webhook);

impl SvixAdapter {
    pub fn new(secret: &str) -> Result<Self> {
        let webhook =
            Webhook::new(secret).map_err(|e| anyhow::anyhow!("invalid webhook secret: {e}"))?;
        Ok(Self(webhook))
    }
}

impl BaseWebhookVerifier for SvixAdapter {
    fn verify(&self, payload: &[u8], headers: &HeaderMap) -> Result<()> {
        self.0
            .verify(payload, headers)
            .map_err(|e| anyhow::anyhow!("webhook signature rejected: {e}"))
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to effects (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    pub users: Arc<dyn UserStore>,
    pub products: Arc<dyn ProductStore>,
    pub events: Arc<dyn EventStore>,
    pub participants: Arc<dyn EventParticipantStore>,
    pub event_products: Arc<dyn EventProductStore>,
    /// Webhook signature verifier (optional: environments without a signing
    /// secret refuse identity deliveries)
    pub webhook_verifier: Option<Arc<dyn BaseWebhookVerifier>>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        users: Arc<dyn UserStore>,
        products: Arc<dyn ProductStore>,
        events: Arc<dyn EventStore>,
        participants: Arc<dyn EventParticipantStore>,
        event_products: Arc<dyn EventProductStore>,
        webhook_verifier: Option<Arc<dyn BaseWebhookVerifier>>,
    ) -> Self {
        Self {
            users,
            products,
            events,
            participants,
            event_products,
            webhook_verifier,
        }
    }

    /// Wire every collection onto one shared in-memory engine.
    pub fn with_memory_store(webhook_verifier: Option<Arc<dyn BaseWebhookVerifier>>) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store,
            webhook_verifier,
        )
    }
}
