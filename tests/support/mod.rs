use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use tokio::sync::RwLock;

use avx_backend::config::AppConfig;
use avx_backend::email::{EmailMessage, MailError, Mailer};
use avx_backend::razorpay::{GatewayError, PaymentGateway};
use avx_backend::store::{MemStore, Store};
use avx_backend::AppState;

pub const TEST_SESSION_SECRET: &str = "test-session-secret";
pub const TEST_RAZORPAY_SECRET: &str = "rzp_test_secret";
pub const TEST_ADMIN_EMAIL: &str = "owner@avx.example";

/// Captures outbound email so tests can assert on it.
#[derive(Default)]
pub struct RecordingMailer {
    sent: RwLock<Vec<EmailMessage>>,
    fail: RwLock<bool>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_fail(&self, fail: bool) {
        *self.fail.write().await = fail;
    }

    pub async fn sent_messages(&self) -> Vec<EmailMessage> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError> {
        if *self.fail.read().await {
            return Err(MailError::Api {
                status: 500,
                body: "relay down".to_string(),
            });
        }
        self.sent.write().await.push(message.clone());
        Ok(())
    }
}

/// Gateway stand-in: hands back a canned order object (or a scripted
/// failure) and records the amounts it was asked for.
pub struct ScriptedGateway {
    response: serde_json::Value,
    fail: bool,
    calls: RwLock<Vec<f64>>,
}

impl ScriptedGateway {
    pub fn succeeding(response: serde_json::Value) -> Self {
        Self {
            response,
            fail: false,
            calls: RwLock::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: serde_json::Value::Null,
            fail: true,
            calls: RwLock::new(Vec::new()),
        }
    }

    pub async fn requested_amounts(&self) -> Vec<f64> {
        self.calls.read().await.clone()
    }
}

#[async_trait]
impl PaymentGateway for ScriptedGateway {
    async fn create_order(&self, amount: f64) -> Result<serde_json::Value, GatewayError> {
        self.calls.write().await.push(amount);
        if self.fail {
            return Err(GatewayError::Api {
                status: 503,
                body: "gateway down".to_string(),
            });
        }
        Ok(self.response.clone())
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        mongo_uri: "mongodb://localhost:27017".to_string(),
        mongo_db: "avx_test".to_string(),
        session_secret: TEST_SESSION_SECRET.to_string(),
        admin_email: TEST_ADMIN_EMAIL.to_string(),
        admin_pass: "avx-admin-pass".to_string(),
        cookie_secure: false,
        razorpay_key: "rzp_test_key".to_string(),
        razorpay_secret: TEST_RAZORPAY_SECRET.to_string(),
        email_enabled: true,
        email_api_key: "relay-key".to_string(),
        email_from: "noreply@avx.example".to_string(),
        email_api_url: None,
        cors_origin: None,
        rate_limit_window_secs: 60,
        rate_limit_max: 20,
    }
}

pub fn build_state(
    store: Arc<MemStore>,
    mailer: Arc<RecordingMailer>,
    gateway: Arc<ScriptedGateway>,
) -> web::Data<AppState> {
    web::Data::new(AppState {
        store: store as Arc<dyn Store>,
        mailer: mailer as Arc<dyn Mailer>,
        gateway: gateway as Arc<dyn PaymentGateway>,
        config: Arc::new(test_config()),
    })
}

/// Default harness: empty store, recording mailer, gateway that echoes a
/// minimal created order.
pub fn build_default() -> (Arc<MemStore>, Arc<RecordingMailer>, Arc<ScriptedGateway>, web::Data<AppState>) {
    let store = Arc::new(MemStore::new());
    let mailer = Arc::new(RecordingMailer::new());
    let gateway = Arc::new(ScriptedGateway::succeeding(serde_json::json!({
        "id": "order_MkxI2vBIhgp4BX",
        "entity": "order",
        "amount": 499900,
        "currency": "INR",
        "status": "created"
    })));
    let state = build_state(store.clone(), mailer.clone(), gateway.clone());
    (store, mailer, gateway, state)
}

/// Lets detached notification tasks run before asserting on them.
pub async fn settle() {
    tokio::time::sleep(std::time::Duration::from_millis(25)).await;
}
