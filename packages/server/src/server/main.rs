// Main entry point for the inventory API server

use std::sync::Arc;

use anyhow::{Context, Result};
use server_core::kernel::{BaseWebhookVerifier, ServerDeps, SvixAdapter};
use server_core::{server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Merch Inventory & Event Sales API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Webhook signature verification is optional at startup; without the
    // secret every delivery is answered with a configuration error.
    let webhook_verifier: Option<Arc<dyn BaseWebhookVerifier>> = match &config.clerk_webhook_secret
    {
        Some(secret) => {
            let adapter = SvixAdapter::new(secret).context("Invalid CLERK_WEBHOOK_SECRET")?;
            Some(Arc::new(adapter))
        }
        None => {
            tracing::warn!("CLERK_WEBHOOK_SECRET is not set; webhook deliveries will be refused");
            None
        }
    };

    // Build application
    let deps = Arc::new(ServerDeps::with_memory_store(webhook_verifier));
    let app = build_app(deps, &config.allowed_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
