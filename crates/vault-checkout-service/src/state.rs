//! Application state.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::error::ApiError;
use crate::paypal::PaypalClient;

/// Application state shared across handlers.
///
/// Fixed at startup; no mutable state crosses requests.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: ServiceConfig,

    /// PayPal client, present only when both merchant credentials are
    /// configured.
    pub paypal: Option<Arc<PaypalClient>>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: ServiceConfig) -> Self {
        let paypal = config
            .client_id
            .as_ref()
            .zip(config.client_secret.as_ref())
            .map(|(id, secret)| {
                Arc::new(PaypalClient::new(config.api_base_url.clone(), id, secret))
            });

        if paypal.is_none() {
            tracing::warn!(
                "Missing PAYPAL_CLIENT_ID or PAYPAL_CLIENT_SECRET. Set them in environment variables."
            );
        }

        Self { config, paypal }
    }

    /// The PayPal client, or a gateway error when credentials were never
    /// configured.
    pub fn paypal(&self) -> Result<&Arc<PaypalClient>, ApiError> {
        self.paypal
            .as_ref()
            .ok_or_else(|| ApiError::Gateway("PayPal credentials are not configured".into()))
    }
}
