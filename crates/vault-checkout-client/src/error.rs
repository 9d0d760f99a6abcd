//! Client error types.

/// Errors that can occur when driving the checkout flow.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-success status. The message is the
    /// server-supplied `error` field when present, or a generic fallback.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Server-supplied message or fallback.
        message: String,
    },

    /// The configuration response carried no client id; the merchant
    /// credentials were never set.
    #[error("PAYPAL_CLIENT_ID が未設定です")]
    MissingClientId,

    /// The identity token exchange returned no token.
    #[error("id_token 取得に失敗しました")]
    MissingIdToken,

    /// Reading or writing the local customer id store failed.
    #[error("customer id store error: {0}")]
    Store(#[from] std::io::Error),
}
