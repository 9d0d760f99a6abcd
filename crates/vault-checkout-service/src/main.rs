//! Vault-Checkout Service - backend proxy for the PayPal vaulting demo.
//!
//! This is the main entry point for the vault-checkout service.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vault_checkout_service::{create_router, AppState, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,vault_checkout_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Vault-Checkout Service");

    // Load configuration from environment
    let config = ServiceConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        env = %config.env,
        base_url = %config.base_url,
        api_base_url = %config.api_base_url,
        credentials_configured = %config.has_credentials(),
        "Service configuration loaded"
    );

    // Build app state (warns when merchant credentials are absent)
    let state = AppState::new(config.clone());

    // Create the router
    let app = create_router(state);
    tracing::info!("Router configured with all API endpoints");

    // Start HTTP server
    tracing::info!(listen_addr = %config.listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
