//! Provider SDK script descriptor.

use url::Url;

/// Base URL of the provider's JS SDK.
pub const SDK_URL: &str = "https://www.paypal.com/sdk/js";

/// Description of the `<script>` tag that loads the provider SDK.
///
/// The identity token travels as the `data-user-id-token` attribute, not
/// a query parameter; everything else is a fixed demo parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkScript {
    client_id: String,
    id_token: String,
}

impl SdkScript {
    /// Describe the SDK script for the given client id and identity token.
    #[must_use]
    pub fn new(client_id: impl Into<String>, id_token: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            id_token: id_token.into(),
        }
    }

    /// The script `src` URL.
    ///
    /// # Panics
    ///
    /// Never panics in practice; [`SDK_URL`] is a valid base URL.
    #[must_use]
    pub fn src(&self) -> String {
        let params = [
            ("client-id", self.client_id.as_str()),
            ("components", "buttons"),
            ("vault", "true"),
            ("intent", "capture"),
            ("currency", "JPY"),
            ("locale", "ja_JP"),
            // For sandbox consistency
            ("buyer-country", "JP"),
        ];

        Url::parse_with_params(SDK_URL, params)
            .expect("static SDK base URL is valid")
            .to_string()
    }

    /// Value for the `data-user-id-token` script attribute.
    #[must_use]
    pub fn user_id_token(&self) -> &str {
        &self.id_token
    }
}
