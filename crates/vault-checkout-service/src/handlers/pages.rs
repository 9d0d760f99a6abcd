//! Static return/cancel pages the provider redirects the payer to.

use axum::response::Html;

/// Confirmation page after the payer approves.
pub async fn return_page() -> Html<&'static str> {
    Html("<h1>Return</h1><p>承認ありがとうございました。このウィンドウを閉じてください。</p>")
}

/// Page shown when the payer cancels.
pub async fn cancel_page() -> Html<&'static str> {
    Html("<h1>Cancelled</h1><p>支払いがキャンセルされました。</p>")
}
