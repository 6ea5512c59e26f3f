// src/razorpay.rs
//
// Client for the Razorpay Orders API (https://api.razorpay.com).
// Authorization: HTTP basic auth with key id / key secret.

use async_trait::async_trait;
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;
use thiserror::Error;
use uuid::Uuid;

const RAZORPAY_API_BASE: &str = "https://api.razorpay.com";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("gateway api error status={status} body={body}")]
    Api { status: u16, body: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Creates gateway-side payment orders. The handlers only ever see this
/// trait; tests script it.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// `amount` is in major currency units. The gateway order is created
    /// for the equivalent minor units and returned verbatim.
    async fn create_order(&self, amount: f64) -> Result<serde_json::Value, GatewayError>;
}

#[derive(Debug, Serialize)]
struct CreateOrderBody {
    /// Minor units (paise).
    amount: i64,
    currency: &'static str,
    receipt: String,
}

pub struct RazorpayClient {
    client: reqwest::Client,
    key_id: String,
    key_secret: String,
}

impl RazorpayClient {
    pub fn new(key_id: String, key_secret: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            key_id,
            key_secret,
        }
    }
}

#[async_trait]
impl PaymentGateway for RazorpayClient {
    async fn create_order(&self, amount: f64) -> Result<serde_json::Value, GatewayError> {
        let req = CreateOrderBody {
            amount: to_minor_units(amount),
            currency: "INR",
            receipt: new_receipt(),
        };

        let resp = self
            .client
            .post(format!("{RAZORPAY_API_BASE}/v1/orders"))
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(&req)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(GatewayError::Api {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str::<serde_json::Value>(&body)
            .map_err(|e| GatewayError::InvalidResponse(format!("{e}; body={body}")))
    }
}

/// Rupees to paise. Rounded so float noise (2999.99 * 100 = 299998.99..)
/// cannot shave a paisa off.
fn to_minor_units(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

pub fn new_receipt() -> String {
    format!("avx_{}", Uuid::new_v4().simple())
}

/// HMAC-SHA256 in hex over `order_id|payment_id`, the signature Razorpay
/// checkout hands back after payment.
pub fn payment_signature(secret: &str, order_id: &str, payment_id: &str) -> String {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

pub fn verify_payment_signature(
    secret: &str,
    order_id: &str,
    payment_id: &str,
    signature: &str,
) -> bool {
    payment_signature(secret, order_id, payment_id) == signature
}
