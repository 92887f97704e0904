// TestDependencies - mock implementations for testing
//
// Provides stand-ins that can be injected into ServerDeps for tests.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use axum::http::HeaderMap;

use super::{BaseWebhookVerifier, ServerDeps};
use crate::store::MemoryStore;

// =============================================================================
// Mock Webhook Verifier
// =============================================================================

pub struct MockWebhookVerifier {
    accept: bool,
    calls: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MockWebhookVerifier {
    /// Verifier that accepts every delivery.
    pub fn accepting() -> Self {
        Self {
            accept: true,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Verifier that rejects every delivery.
    pub fn rejecting() -> Self {
        Self {
            accept: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// How many payloads were submitted for verification.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// The most recent payload submitted for verification.
    pub fn last_payload(&self) -> Option<Vec<u8>> {
        self.calls.lock().unwrap().last().cloned()
    }
}

impl BaseWebhookVerifier for MockWebhookVerifier {
    fn verify(&self, payload: &[u8], _headers: &HeaderMap) -> Result<()> {
        self.calls.lock().unwrap().push(payload.to_vec());
        if self.accept {
            Ok(())
        } else {
            Err(anyhow::anyhow!("signature rejected"))
        }
    }
}

// =============================================================================
// TestDependencies - Builder for test dependencies
// =============================================================================

pub struct TestDependencies {
    pub store: Arc<MemoryStore>,
    pub webhook_verifier: Option<Arc<MockWebhookVerifier>>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
            webhook_verifier: None,
        }
    }

    /// Install a mock webhook verifier.
    ///
    /// Keep a clone of the returned Arc (the field stays public) when the
    /// test needs to assert on recorded calls afterwards.
    pub fn mock_webhook_verifier(mut self, verifier: MockWebhookVerifier) -> Self {
        self.webhook_verifier = Some(Arc::new(verifier));
        self
    }

    /// Convert into ServerDeps for handing to effects or the router.
    pub fn into_deps(self) -> ServerDeps {
        let verifier = self
            .webhook_verifier
            .map(|v| v as Arc<dyn BaseWebhookVerifier>);
        ServerDeps::new(
            self.store.clone(),
            self.store.clone(),
            self.store.clone(),
            self.store.clone(),
            self.store,
            verifier,
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
