//! PayPal API request and response types.

use serde::{Deserialize, Serialize};
use vault_checkout_core::OrderParams;

/// Parameters for an OAuth credential exchange.
#[derive(Debug, Clone, Default)]
pub struct TokenRequest {
    /// Request an identity token alongside the access token
    /// (`response_type=id_token`).
    pub with_id_token: bool,
    /// Bind the identity token to a vaulted customer
    /// (`options[customer_id]`). Only sent when non-empty.
    pub customer_id: Option<String>,
}

impl TokenRequest {
    /// An identity-token exchange, optionally bound to a customer id.
    ///
    /// An empty or whitespace-only customer id is treated as absent.
    #[must_use]
    pub fn id_token(customer_id: &str) -> Self {
        let customer_id = customer_id.trim();
        Self {
            with_id_token: true,
            customer_id: (!customer_id.is_empty()).then(|| customer_id.to_string()),
        }
    }
}

/// Response from `/v1/oauth2/token`.
///
/// Fields the demo never reads (scope, expiry, token type) are dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Bearer credential for subsequent API calls.
    pub access_token: String,
    /// Identity token, present when `response_type=id_token` was sent.
    #[serde(default)]
    pub id_token: Option<String>,
}

/// Order creation body for `/v2/checkout/orders`.
#[derive(Debug, Clone, Serialize)]
pub struct OrderBody {
    /// Always `"CAPTURE"` in this demo.
    pub intent: &'static str,
    /// Exactly one purchase unit carrying the order amount.
    pub purchase_units: Vec<PurchaseUnit>,
    /// Vault attributes and redirect context.
    pub payment_source: PaymentSource,
}

/// A single purchase unit carrying the order amount.
#[derive(Debug, Clone, Serialize)]
pub struct PurchaseUnit {
    /// Order amount.
    pub amount: Amount,
}

/// Order amount.
#[derive(Debug, Clone, Serialize)]
pub struct Amount {
    /// ISO currency code.
    pub currency_code: String,
    /// Amount as a string, per the checkout API.
    pub value: String,
}

/// Payment source wrapper.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentSource {
    /// PayPal wallet source.
    pub paypal: PaypalSource,
}

/// PayPal payment source with vault attributes and redirect context.
#[derive(Debug, Clone, Serialize)]
pub struct PaypalSource {
    /// Vaulting attributes.
    pub attributes: SourceAttributes,
    /// Payer experience context.
    pub experience_context: ExperienceContext,
}

/// Payment source attributes.
#[derive(Debug, Clone, Serialize)]
pub struct SourceAttributes {
    /// Vaulting instruction.
    pub vault: VaultInstruction,
}

/// Vaulting instruction attached to every order this demo creates.
#[derive(Debug, Clone, Serialize)]
pub struct VaultInstruction {
    /// When to vault; always `"ON_SUCCESS"`.
    pub store_in_vault: &'static str,
    /// Who initiates reuse; always `"MERCHANT"`.
    pub usage_type: &'static str,
    /// Payer type; always `"CONSUMER"`.
    pub customer_type: &'static str,
}

impl Default for VaultInstruction {
    fn default() -> Self {
        Self {
            store_in_vault: "ON_SUCCESS",
            usage_type: "MERCHANT",
            customer_type: "CONSUMER",
        }
    }
}

/// Payer experience context (redirect URLs and locale).
#[derive(Debug, Clone, Serialize)]
pub struct ExperienceContext {
    /// Redirect target after approval.
    pub return_url: String,
    /// Redirect target on cancellation.
    pub cancel_url: String,
    /// Fixed demo locale.
    pub locale: &'static str,
}

impl OrderBody {
    /// Build a capture-intent order that vaults the instrument on success.
    #[must_use]
    pub fn vault_on_success(params: &OrderParams, return_url: String, cancel_url: String) -> Self {
        Self {
            intent: "CAPTURE",
            purchase_units: vec![PurchaseUnit {
                amount: Amount {
                    currency_code: params.currency.clone(),
                    value: params.amount.clone(),
                },
            }],
            payment_source: PaymentSource {
                paypal: PaypalSource {
                    attributes: SourceAttributes {
                        vault: VaultInstruction::default(),
                    },
                    experience_context: ExperienceContext {
                        return_url,
                        cancel_url,
                        locale: "ja-JP",
                    },
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn order_body_shape_matches_checkout_api() {
        let body = OrderBody::vault_on_success(
            &OrderParams::default(),
            "https://shop.example/return".into(),
            "https://shop.example/cancel".into(),
        );

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "intent": "CAPTURE",
                "purchase_units": [{"amount": {"currency_code": "JPY", "value": "1200"}}],
                "payment_source": {
                    "paypal": {
                        "attributes": {
                            "vault": {
                                "store_in_vault": "ON_SUCCESS",
                                "usage_type": "MERCHANT",
                                "customer_type": "CONSUMER"
                            }
                        },
                        "experience_context": {
                            "return_url": "https://shop.example/return",
                            "cancel_url": "https://shop.example/cancel",
                            "locale": "ja-JP"
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn token_request_drops_blank_customer_id() {
        assert_eq!(TokenRequest::id_token("").customer_id, None);
        assert_eq!(TokenRequest::id_token("  ").customer_id, None);
        assert_eq!(
            TokenRequest::id_token(" C1 ").customer_id,
            Some("C1".to_string())
        );
    }
}
