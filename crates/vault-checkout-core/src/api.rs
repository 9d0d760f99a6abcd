//! Wire types for the backend proxy's own HTTP surface.

use serde::{Deserialize, Serialize};

use crate::environment::Environment;

/// Default order amount when the client sends none.
pub const DEFAULT_AMOUNT: &str = "1200";

/// Default order currency when the client sends none.
pub const DEFAULT_CURRENCY: &str = "JPY";

/// Public configuration handed to the browser (`GET /api/config`).
///
/// `client_id` is absent when the merchant credentials were never
/// configured; the client treats that as a fatal initialization error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// The public merchant client id, if configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// The PayPal environment the proxy is pointed at.
    pub env: Environment,
}

/// Identity token response (`GET /api/id-token`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdTokenResponse {
    /// The identity token issued by the provider, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
}

/// Order creation parameters (`POST /api/orders` body).
///
/// Both fields default when absent; the whole body may be omitted.
/// Amounts are strings because that is what the provider's order API
/// takes; the proxy forwards them unvalidated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderParams {
    /// Order amount, e.g. `"1200"`.
    #[serde(default = "default_amount")]
    pub amount: String,
    /// ISO currency code, e.g. `"JPY"`.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_amount() -> String {
    DEFAULT_AMOUNT.to_string()
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for OrderParams {
    fn default() -> Self {
        Self {
            amount: default_amount(),
            currency: default_currency(),
        }
    }
}

/// The subset of the upstream order object the client reads back from
/// order creation. The full object is still forwarded verbatim; unknown
/// fields are simply ignored on the client side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Upstream order id, consumed by capture.
    pub id: String,
    /// Upstream order status, e.g. `"CREATED"`.
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_params_default_when_fields_absent() {
        let params: OrderParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.amount, DEFAULT_AMOUNT);
        assert_eq!(params.currency, DEFAULT_CURRENCY);
    }

    #[test]
    fn order_params_keep_explicit_values() {
        let params: OrderParams =
            serde_json::from_str(r#"{"amount":"500","currency":"USD"}"#).unwrap();
        assert_eq!(params.amount, "500");
        assert_eq!(params.currency, "USD");
    }

    #[test]
    fn client_config_omits_missing_client_id() {
        let config = ClientConfig {
            client_id: None,
            env: Environment::Sandbox,
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json, serde_json::json!({"env": "sandbox"}));
    }

    #[test]
    fn order_summary_ignores_extra_fields() {
        let summary: OrderSummary = serde_json::from_str(
            r#"{"id":"O1","status":"CREATED","links":[{"rel":"self"}]}"#,
        )
        .unwrap();
        assert_eq!(summary.id, "O1");
        assert_eq!(summary.status, "CREATED");
    }
}
