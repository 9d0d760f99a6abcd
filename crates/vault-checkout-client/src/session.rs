//! The checkout session: the page's lifecycle as a sequential async flow.

use serde_json::Value;

use vault_checkout_core::{vault_data, OrderParams, VaultOutcome};

use crate::api::BackendApi;
use crate::error::ClientError;
use crate::sdk::SdkScript;
use crate::store::CustomerIdStore;

/// Which label the payment button should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonLabel {
    /// First-visit label.
    Default,
    /// Returning payer with a saved wallet.
    SavedWallet,
}

impl ButtonLabel {
    /// Display text for the label.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Default => "PayPalで決済",
            Self::SavedWallet => "💾 保存済みウォレットで決済",
        }
    }
}

/// Everything the original page displayed, as data.
///
/// The embedding UI renders these however it likes; the session never
/// touches a display directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutEvent {
    /// Progress or outcome message.
    Status(String),
    /// Error message.
    Error(String),
    /// The payment button label changed.
    ButtonLabel(ButtonLabel),
    /// The known customer id changed (shown as the returning-payer hint).
    CustomerId(String),
    /// Raw capture payload, for display.
    CapturePayload(Value),
    /// Vault payload embedded in a capture, for display.
    VaultPayload(Value),
}

/// A checkout session.
///
/// Holds the single piece of client state — the vaulted customer id —
/// in memory, initialized from the store at construction and persisted
/// back when a capture returns a new one. The async methods map one to
/// one onto the page lifecycle and the SDK button callbacks.
pub struct CheckoutSession<S: CustomerIdStore> {
    api: BackendApi,
    store: S,
    customer_id: Option<String>,
    order_params: OrderParams,
    sink: Box<dyn FnMut(CheckoutEvent) + Send>,
}

impl<S: CustomerIdStore> CheckoutSession<S> {
    /// Create a session, loading any stored customer id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn new(
        api: BackendApi,
        store: S,
        sink: impl FnMut(CheckoutEvent) + Send + 'static,
    ) -> Result<Self, ClientError> {
        let customer_id = store.load()?;

        Ok(Self {
            api,
            store,
            customer_id,
            order_params: OrderParams::default(),
            sink: Box::new(sink),
        })
    }

    /// Override the fixed demo order parameters.
    #[must_use]
    pub fn with_order_params(mut self, order_params: OrderParams) -> Self {
        self.order_params = order_params;
        self
    }

    /// The currently known customer id, if any.
    #[must_use]
    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_deref()
    }

    /// The label the payment button should show.
    #[must_use]
    pub fn button_label(&self) -> ButtonLabel {
        if self.customer_id.is_some() {
            ButtonLabel::SavedWallet
        } else {
            ButtonLabel::Default
        }
    }

    /// Initialize the page: fetch config, obtain a fresh identity token
    /// bound to any stored customer id, and describe the SDK script to
    /// load.
    ///
    /// Each step suspends on its network call and fails the whole
    /// initialization on error; the failure is reported once through the
    /// event sink before being returned.
    ///
    /// # Errors
    ///
    /// [`ClientError::MissingClientId`] when the backend has no
    /// credentials configured, [`ClientError::MissingIdToken`] when no
    /// identity token comes back, or any transport/API failure.
    pub async fn init(&mut self) -> Result<SdkScript, ClientError> {
        match self.try_init().await {
            Ok(script) => Ok(script),
            Err(err) => {
                self.emit(CheckoutEvent::Error(format!("初期化エラー: {err}")));
                Err(err)
            }
        }
    }

    async fn try_init(&mut self) -> Result<SdkScript, ClientError> {
        tracing::debug!(
            returning_payer = self.customer_id.is_some(),
            "Initializing checkout"
        );

        let config = self.api.get_config().await?;
        let client_id = config
            .client_id
            .filter(|id| !id.is_empty())
            .ok_or(ClientError::MissingClientId)?;

        // Always a fresh id_token, bound to the customer id if we have one.
        let bound_to = self.customer_id.clone().unwrap_or_default();
        let token = self.api.get_id_token(&bound_to).await?;
        let id_token = token
            .id_token
            .filter(|t| !t.is_empty())
            .ok_or(ClientError::MissingIdToken)?;

        let script = SdkScript::new(client_id, id_token);

        if let Some(customer_id) = self.customer_id.clone() {
            self.emit(CheckoutEvent::ButtonLabel(ButtonLabel::SavedWallet));
            self.emit(CheckoutEvent::CustomerId(customer_id));
        }

        Ok(script)
    }

    /// The SDK's `createOrder` callback: create an order and hand its id
    /// back to the SDK.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the creation; the caller
    /// routes it to [`CheckoutSession::on_error`], as the SDK would.
    pub async fn create_order(&mut self) -> Result<String, ClientError> {
        self.emit(CheckoutEvent::Status("注文作成中...".into()));

        let params = self.order_params.clone();
        let order = self.api.create_order(&params).await?;

        self.emit(CheckoutEvent::Status("注文作成完了".into()));
        Ok(order.id)
    }

    /// The SDK's `onApprove` callback: capture the approved order and act
    /// on any vault payload in the response.
    ///
    /// Stored state changes only when the vault payload carries a customer
    /// id; every other shape leaves the stored id untouched.
    ///
    /// # Errors
    ///
    /// Returns an error when the capture fails; the caller routes it to
    /// [`CheckoutSession::on_error`], as the SDK would.
    pub async fn on_approve(&mut self, order_id: &str) -> Result<(), ClientError> {
        self.emit(CheckoutEvent::Status("キャプチャ中...".into()));

        let capture = self.api.capture_order(order_id).await?;
        tracing::debug!(order_id = %order_id, "Capture completed");
        self.emit(CheckoutEvent::CapturePayload(capture.clone()));

        if let Some(vault) = vault_data(&capture) {
            self.emit(CheckoutEvent::VaultPayload(vault.clone()));
        }

        match VaultOutcome::from_capture(&capture) {
            VaultOutcome::Saved { customer_id } => {
                self.store.save(&customer_id)?;
                self.customer_id = Some(customer_id.clone());
                self.emit(CheckoutEvent::CustomerId(customer_id));
                self.emit(CheckoutEvent::Status("✅ 保存完了（戻り支払者有効）".into()));
            }
            VaultOutcome::SavedPendingCustomer => {
                self.emit(CheckoutEvent::Status(
                    "保存は完了しました（customer.id は後続 Webhook で届く場合あり）".into(),
                ));
            }
            VaultOutcome::NotPresent => {
                self.emit(CheckoutEvent::Status(
                    "保存情報はレスポンスに含まれていません（Webhook を確認してください）".into(),
                ));
            }
        }

        Ok(())
    }

    /// The SDK's `onError` callback.
    pub fn on_error(&mut self, message: &str) {
        self.emit(CheckoutEvent::Error(format!("エラー: {message}")));
    }

    /// The SDK's `onCancel` callback.
    pub fn on_cancel(&mut self) {
        self.emit(CheckoutEvent::Status("キャンセルされました".into()));
    }

    /// Clear the stored customer id, resetting to a first-visit state.
    ///
    /// A subsequent [`CheckoutSession::init`] requests an unbound identity
    /// token and the button label falls back to the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be cleared.
    pub fn clear_saved_customer(&mut self) -> Result<(), ClientError> {
        self.store.clear()?;
        self.customer_id = None;
        Ok(())
    }

    fn emit(&mut self, event: CheckoutEvent) {
        (self.sink)(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn session_with(store: MemoryStore) -> CheckoutSession<MemoryStore> {
        CheckoutSession::new(BackendApi::new("http://localhost:3000"), store, |_| {}).unwrap()
    }

    #[test]
    fn button_label_follows_stored_customer_id() {
        let session = session_with(MemoryStore::new());
        assert_eq!(session.button_label(), ButtonLabel::Default);
        assert_eq!(session.customer_id(), None);

        let mut store = MemoryStore::new();
        store.save("C1").unwrap();
        let mut session = session_with(store);
        assert_eq!(session.button_label(), ButtonLabel::SavedWallet);
        assert_eq!(session.customer_id(), Some("C1"));

        session.clear_saved_customer().unwrap();
        assert_eq!(session.button_label(), ButtonLabel::Default);
        assert_eq!(session.customer_id(), None);
    }

    #[test]
    fn label_texts_differ() {
        assert_ne!(ButtonLabel::Default.text(), ButtonLabel::SavedWallet.text());
    }
}
