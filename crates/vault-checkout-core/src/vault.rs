//! Vault payload inspection over raw capture responses.
//!
//! The proxy forwards capture responses verbatim, so the vault payload is
//! extracted from a `serde_json::Value` rather than deserialized into a
//! full capture type.

use serde_json::Value;

/// Pick the vault payload out of a capture response, if present.
///
/// Walks `payment_source.paypal.attributes.vault`.
#[must_use]
pub fn vault_data(capture: &Value) -> Option<&Value> {
    capture
        .get("payment_source")?
        .get("paypal")?
        .get("attributes")?
        .get("vault")
}

/// What a capture response says about vaulting.
///
/// These are the three branches the approval handler acts on: a vaulted
/// instrument with a customer id to persist, a vaulted instrument whose
/// customer id will arrive later out-of-band, or no vault data at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultOutcome {
    /// The instrument was vaulted and a customer id was returned.
    Saved {
        /// The vaulted customer id to persist for future visits.
        customer_id: String,
    },
    /// Vault data is present but carries no customer id yet.
    SavedPendingCustomer,
    /// The capture response carries no vault data.
    NotPresent,
}

impl VaultOutcome {
    /// Classify a raw capture response.
    #[must_use]
    pub fn from_capture(capture: &Value) -> Self {
        let Some(vault) = vault_data(capture) else {
            return Self::NotPresent;
        };

        match vault
            .get("customer")
            .and_then(|c| c.get("id"))
            .and_then(Value::as_str)
        {
            Some(id) => Self::Saved {
                customer_id: id.to_string(),
            },
            None => Self::SavedPendingCustomer,
        }
    }
}
