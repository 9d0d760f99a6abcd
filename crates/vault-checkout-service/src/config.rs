//! Service configuration.

use vault_checkout_core::Environment;

/// Service configuration loaded from environment variables.
///
/// Constructed once at startup and handed to [`crate::AppState`]; handlers
/// never read the process environment themselves.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: `"0.0.0.0:{port}"`).
    pub listen_addr: String,

    /// Public merchant client id (`PAYPAL_CLIENT_ID`).
    pub client_id: Option<String>,

    /// Merchant client secret (`PAYPAL_CLIENT_SECRET`); never exposed to
    /// the browser.
    pub client_secret: Option<String>,

    /// PayPal environment selector (`PAYPAL_ENV`, default sandbox).
    pub env: Environment,

    /// Externally reachable base URL of this service, used for the
    /// return/cancel URLs attached to orders (`BASE_URL`).
    pub base_url: String,

    /// PayPal REST API base URL. Derived from `env` unless overridden via
    /// `PAYPAL_API_BASE` (tests point this at a mock server).
    pub api_base_url: String,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let env = Environment::parse(&std::env::var("PAYPAL_ENV").unwrap_or_default());

        Self {
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or_else(|_| format!("0.0.0.0:{port}")),
            client_id: std::env::var("PAYPAL_CLIENT_ID").ok().filter(|s| !s.is_empty()),
            client_secret: std::env::var("PAYPAL_CLIENT_SECRET")
                .ok()
                .filter(|s| !s.is_empty()),
            env,
            base_url: std::env::var("BASE_URL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| format!("http://localhost:{port}")),
            api_base_url: std::env::var("PAYPAL_API_BASE")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| env.api_base_url().to_string()),
        }
    }

    /// URL the provider redirects the payer back to after approval.
    #[must_use]
    pub fn return_url(&self) -> String {
        format!("{}/return", self.base_url.trim_end_matches('/'))
    }

    /// URL the provider redirects the payer to on cancellation.
    #[must_use]
    pub fn cancel_url(&self) -> String {
        format!("{}/cancel", self.base_url.trim_end_matches('/'))
    }

    /// Whether both merchant credentials are present.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.client_id.is_some() && self.client_secret.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(base_url: &str) -> ServiceConfig {
        ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            client_id: Some("cid".into()),
            client_secret: Some("secret".into()),
            env: Environment::Sandbox,
            base_url: base_url.into(),
            api_base_url: Environment::Sandbox.api_base_url().into(),
        }
    }

    #[test]
    fn redirect_urls_tolerate_trailing_slash() {
        let config = test_config("https://shop.example/");
        assert_eq!(config.return_url(), "https://shop.example/return");
        assert_eq!(config.cancel_url(), "https://shop.example/cancel");
    }
}
