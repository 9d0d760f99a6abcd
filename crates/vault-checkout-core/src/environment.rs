//! PayPal environment selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// PayPal environment (sandbox or live).
///
/// The environment decides which REST API base URL the proxy talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Sandbox environment (the default).
    #[default]
    Sandbox,
    /// Live environment for production traffic.
    Live,
}

impl Environment {
    /// Parse an environment selector string.
    ///
    /// Only the exact string `"live"` selects the live environment;
    /// anything else (including the empty string) falls back to sandbox.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s == "live" {
            Self::Live
        } else {
            Self::Sandbox
        }
    }

    /// The environment name as it appears on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sandbox => "sandbox",
            Self::Live => "live",
        }
    }

    /// The REST API base URL for this environment.
    #[must_use]
    pub const fn api_base_url(self) -> &'static str {
        match self {
            Self::Sandbox => "https://api-m.sandbox.paypal.com",
            Self::Live => "https://api-m.paypal.com",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
