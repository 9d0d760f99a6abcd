//! End-to-end checkout flow tests against a mocked backend.

use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vault_checkout_client::{
    BackendApi, ButtonLabel, CheckoutEvent, CheckoutSession, CustomerIdStore, FileStore,
    MemoryStore,
};

type Events = Arc<Mutex<Vec<CheckoutEvent>>>;

/// An event sink that records everything it is handed.
fn recording_sink() -> (Events, impl FnMut(CheckoutEvent) + Send + 'static) {
    let events: Events = Arc::new(Mutex::new(Vec::new()));
    let sink_events = Arc::clone(&events);
    (events, move |event| {
        sink_events.lock().unwrap().push(event);
    })
}

async fn mount_config(backend: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/config"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"clientId": "X", "env": "sandbox"})),
        )
        .mount(backend)
        .await;
}

async fn mount_id_token(backend: &MockServer, customer_id: &str, token: &str) {
    Mock::given(method("GET"))
        .and(path("/api/id-token"))
        .and(query_param("customerId", customer_id))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id_token": token})))
        .mount(backend)
        .await;
}

async fn mount_create_order(backend: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "O1", "status": "CREATED"})),
        )
        .mount(backend)
        .await;
}

async fn mount_capture(backend: &MockServer, body: Value) {
    Mock::given(method("POST"))
        .and(path("/api/orders/O1/capture"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(backend)
        .await;
}

fn capture_with_customer(customer_id: &str) -> Value {
    json!({
        "status": "COMPLETED",
        "payment_source": {
            "paypal": {
                "attributes": {
                    "vault": {"customer": {"id": customer_id}}
                }
            }
        }
    })
}

// ============================================================================
// First visit through capture, then reload
// ============================================================================

#[tokio::test]
async fn first_visit_persists_vaulted_customer_and_binds_reload() {
    let backend = MockServer::start().await;
    mount_config(&backend).await;
    mount_id_token(&backend, "", "T1").await;
    mount_create_order(&backend).await;
    mount_capture(&backend, capture_with_customer("C1")).await;

    let dir = tempfile::tempdir().unwrap();
    let store_path = dir.path().join("pp_customer_id");

    // First visit: no stored customer id.
    let (events, sink) = recording_sink();
    let mut session = CheckoutSession::new(
        BackendApi::new(backend.uri()),
        FileStore::new(&store_path),
        sink,
    )
    .unwrap();

    assert_eq!(session.button_label(), ButtonLabel::Default);

    let script = session.init().await.unwrap();
    assert!(script.src().contains("client-id=X"));
    assert_eq!(script.user_id_token(), "T1");

    let order_id = session.create_order().await.unwrap();
    assert_eq!(order_id, "O1");

    session.on_approve(&order_id).await.unwrap();
    assert_eq!(session.customer_id(), Some("C1"));
    assert_eq!(session.button_label(), ButtonLabel::SavedWallet);

    {
        let events = events.lock().unwrap();
        assert!(events.contains(&CheckoutEvent::CustomerId("C1".to_string())));
        assert!(events
            .iter()
            .any(|e| matches!(e, CheckoutEvent::VaultPayload(_))));
    }

    // Reload: a fresh session over the same store must bind the identity
    // token to the persisted customer id.
    Mock::given(method("GET"))
        .and(path("/api/id-token"))
        .and(query_param("customerId", "C1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id_token": "T2"})))
        .expect(1)
        .mount(&backend)
        .await;

    let (reload_events, sink) = recording_sink();
    let mut reloaded = CheckoutSession::new(
        BackendApi::new(backend.uri()),
        FileStore::new(&store_path),
        sink,
    )
    .unwrap();

    assert_eq!(reloaded.button_label(), ButtonLabel::SavedWallet);

    let script = reloaded.init().await.unwrap();
    assert_eq!(script.user_id_token(), "T2");

    let reload_events = reload_events.lock().unwrap();
    assert!(reload_events.contains(&CheckoutEvent::ButtonLabel(ButtonLabel::SavedWallet)));
    assert!(reload_events.contains(&CheckoutEvent::CustomerId("C1".to_string())));
}

// ============================================================================
// Captures that must not touch stored state
// ============================================================================

#[tokio::test]
async fn capture_with_pending_customer_keeps_stored_id() {
    let backend = MockServer::start().await;
    mount_capture(
        &backend,
        json!({
            "status": "COMPLETED",
            "payment_source": {
                "paypal": {"attributes": {"vault": {"status": "VAULTED"}}}
            }
        }),
    )
    .await;

    let mut store = MemoryStore::new();
    store.save("C0").unwrap();

    let (events, sink) = recording_sink();
    let mut session = CheckoutSession::new(BackendApi::new(backend.uri()), store, sink).unwrap();

    session.on_approve("O1").await.unwrap();

    assert_eq!(session.customer_id(), Some("C0"));
    let events = events.lock().unwrap();
    assert!(events
        .iter()
        .any(|e| matches!(e, CheckoutEvent::VaultPayload(_))));
    assert!(events.contains(&CheckoutEvent::Status(
        "保存は完了しました（customer.id は後続 Webhook で届く場合あり）".to_string()
    )));
    assert!(!events
        .iter()
        .any(|e| matches!(e, CheckoutEvent::CustomerId(_))));
}

#[tokio::test]
async fn capture_without_vault_keeps_stored_id() {
    let backend = MockServer::start().await;
    mount_capture(&backend, json!({"status": "COMPLETED"})).await;

    let mut store = MemoryStore::new();
    store.save("C0").unwrap();

    let (events, sink) = recording_sink();
    let mut session = CheckoutSession::new(BackendApi::new(backend.uri()), store, sink).unwrap();

    session.on_approve("O1").await.unwrap();

    assert_eq!(session.customer_id(), Some("C0"));
    let events = events.lock().unwrap();
    assert!(!events
        .iter()
        .any(|e| matches!(e, CheckoutEvent::VaultPayload(_))));
    assert!(events.contains(&CheckoutEvent::Status(
        "保存情報はレスポンスに含まれていません（Webhook を確認してください）".to_string()
    )));
}

// ============================================================================
// Clearing stored state
// ============================================================================

#[tokio::test]
async fn clearing_resets_to_first_visit() {
    let backend = MockServer::start().await;
    mount_config(&backend).await;

    // After clearing, the identity token request must carry an empty
    // customer id again.
    Mock::given(method("GET"))
        .and(path("/api/id-token"))
        .and(query_param("customerId", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id_token": "T1"})))
        .expect(1)
        .mount(&backend)
        .await;

    let mut store = MemoryStore::new();
    store.save("C1").unwrap();

    let (_events, sink) = recording_sink();
    let mut session = CheckoutSession::new(BackendApi::new(backend.uri()), store, sink).unwrap();
    assert_eq!(session.button_label(), ButtonLabel::SavedWallet);

    session.clear_saved_customer().unwrap();

    assert_eq!(session.customer_id(), None);
    assert_eq!(session.button_label(), ButtonLabel::Default);

    session.init().await.unwrap();
}

// ============================================================================
// Failure surfacing
// ============================================================================

#[tokio::test]
async fn create_order_failure_uses_server_message() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .mount(&backend)
        .await;

    let (events, sink) = recording_sink();
    let mut session =
        CheckoutSession::new(BackendApi::new(backend.uri()), MemoryStore::new(), sink).unwrap();

    let err = session.create_order().await.unwrap_err();
    assert_eq!(err.to_string(), "boom");

    // The SDK would route the thrown error to onError.
    session.on_error(&err.to_string());
    let events = events.lock().unwrap();
    assert!(events.contains(&CheckoutEvent::Error("エラー: boom".to_string())));
}

#[tokio::test]
async fn init_fails_when_client_id_is_missing() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"env": "sandbox"})))
        .mount(&backend)
        .await;

    let (events, sink) = recording_sink();
    let mut session =
        CheckoutSession::new(BackendApi::new(backend.uri()), MemoryStore::new(), sink).unwrap();

    let err = session.init().await.unwrap_err();
    assert!(matches!(
        err,
        vault_checkout_client::ClientError::MissingClientId
    ));

    let events = events.lock().unwrap();
    assert!(events
        .iter()
        .any(|e| matches!(e, CheckoutEvent::Error(msg) if msg.starts_with("初期化エラー:"))));
}

#[tokio::test]
async fn init_fails_when_id_token_is_missing() {
    let backend = MockServer::start().await;
    mount_config(&backend).await;
    Mock::given(method("GET"))
        .and(path("/api/id-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&backend)
        .await;

    let (_events, sink) = recording_sink();
    let mut session =
        CheckoutSession::new(BackendApi::new(backend.uri()), MemoryStore::new(), sink).unwrap();

    let err = session.init().await.unwrap_err();
    assert!(matches!(
        err,
        vault_checkout_client::ClientError::MissingIdToken
    ));
}
