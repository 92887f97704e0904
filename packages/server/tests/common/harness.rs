//! Test harness over the in-memory store.
//!
//! Every test gets a fresh store, so tests are fully isolated and run
//! without external infrastructure.

use std::sync::Arc;

use axum::Router;
use server_core::kernel::test_dependencies::MockWebhookVerifier;
use server_core::kernel::{ServerDeps, TestDependencies};
use server_core::server::build_app;
use test_context::AsyncTestContext;

/// Test harness holding the dependency graph under test.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let app = ctx.app();
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    pub deps: Arc<ServerDeps>,
    /// Handle onto the installed mock verifier, when one was requested.
    pub webhook_verifier: Option<Arc<MockWebhookVerifier>>,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new()
    }

    async fn teardown(self) {
        // The in-memory store is dropped with the harness
    }
}

impl TestHarness {
    /// Creates a harness without a webhook verifier (deliveries answer
    /// with a configuration error, like a server missing its secret).
    pub fn new() -> Self {
        init_test_tracing();
        let deps = Arc::new(TestDependencies::new().into_deps());
        Self {
            deps,
            webhook_verifier: None,
        }
    }

    /// Creates a harness with the given mock verifier installed, keeping
    /// a handle for call assertions.
    pub fn with_webhook_verifier(verifier: MockWebhookVerifier) -> Self {
        init_test_tracing();
        let mut dependencies = TestDependencies::new();
        let verifier = Arc::new(verifier);
        dependencies.webhook_verifier = Some(verifier.clone());
        Self {
            deps: Arc::new(dependencies.into_deps()),
            webhook_verifier: Some(verifier),
        }
    }

    /// Axum router over this harness's dependencies, for HTTP-level tests.
    pub fn app(&self) -> Router {
        build_app(self.deps.clone(), &[])
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize tracing so RUST_LOG works during test runs. try_init keeps
/// repeated harness construction from panicking.
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
