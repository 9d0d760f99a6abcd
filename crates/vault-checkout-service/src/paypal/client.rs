//! PayPal API client implementation.

use reqwest::Client;
use serde_json::Value;

use super::types::{OrderBody, TokenRequest, TokenResponse};

/// Error type for PayPal operations.
#[derive(Debug, thiserror::Error)]
pub enum PaypalError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The orders API rejected a call. Status and body are relayed to the
    /// browser unchanged.
    #[error("PayPal API error: {status}")]
    Api {
        /// Upstream HTTP status code.
        status: u16,
        /// Upstream JSON error body, forwarded verbatim.
        body: Value,
    },

    /// The OAuth token exchange failed.
    #[error("Failed to get access token: {status} {body}")]
    Token {
        /// Upstream HTTP status code.
        status: u16,
        /// Upstream response body as text.
        body: String,
    },
}

/// PayPal REST API client.
///
/// Holds the merchant credentials and the environment's API base URL.
/// Access tokens are exchanged fresh on every operation; nothing is
/// cached.
#[derive(Debug, Clone)]
pub struct PaypalClient {
    client: Client,
    api_base: String,
    client_id: String,
    client_secret: String,
}

impl PaypalClient {
    /// Create a new PayPal client.
    ///
    /// # Arguments
    ///
    /// * `api_base` - REST API base URL (e.g. `"https://api-m.sandbox.paypal.com"`)
    /// * `client_id` - Merchant client id
    /// * `client_secret` - Merchant client secret
    #[must_use]
    pub fn new(
        api_base: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        // No request timeout: a slow provider call holds its request open.
        let client = Client::new();

        Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Exchange the merchant credentials for a fresh access token.
    ///
    /// With [`TokenRequest::id_token`] the exchange also yields an identity
    /// token, bound to the given customer id when one is present.
    pub async fn get_access_token(
        &self,
        request: &TokenRequest,
    ) -> Result<TokenResponse, PaypalError> {
        let mut params: Vec<(&str, &str)> = vec![("grant_type", "client_credentials")];
        if request.with_id_token {
            params.push(("response_type", "id_token"));
        }
        if let Some(customer_id) = request.customer_id.as_deref() {
            params.push(("options[customer_id]", customer_id));
        }

        let response = self
            .client
            .post(format!("{}/v1/oauth2/token", self.api_base))
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PaypalError::Token {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }

    /// Create an order.
    ///
    /// Exchanges a fresh access token, then submits the order with a
    /// timestamp-derived `PayPal-Request-Id` idempotency marker. The
    /// upstream order object is returned verbatim.
    pub async fn create_order(&self, order: &OrderBody) -> Result<Value, PaypalError> {
        let token = self.get_access_token(&TokenRequest::default()).await?;
        let request_id = format!("req-{}", chrono::Utc::now().timestamp_millis());

        let response = self
            .client
            .post(format!("{}/v2/checkout/orders", self.api_base))
            .bearer_auth(&token.access_token)
            .header("PayPal-Request-Id", request_id)
            .json(order)
            .send()
            .await?;

        Self::forward_response(response).await
    }

    /// Capture a previously created order.
    ///
    /// Exchanges a fresh access token and submits a capture with an empty
    /// body. The upstream capture object (including any vault/customer
    /// payload) is returned verbatim.
    pub async fn capture_order(&self, order_id: &str) -> Result<Value, PaypalError> {
        let token = self.get_access_token(&TokenRequest::default()).await?;

        let response = self
            .client
            .post(format!(
                "{}/v2/checkout/orders/{}/capture",
                self.api_base, order_id
            ))
            .bearer_auth(&token.access_token)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        Self::forward_response(response).await
    }

    /// Pass an orders-API response through, keeping status and body intact
    /// on rejection.
    async fn forward_response(response: reqwest::Response) -> Result<Value, PaypalError> {
        let status = response.status();
        let body: Value = response.json().await?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(PaypalError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }
}
