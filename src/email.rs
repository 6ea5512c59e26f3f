// src/email.rs
//
// Outbound transactional email through an HTTP relay (Brevo-compatible).
// Authorization: `api-key` header.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

const DEFAULT_RELAY_URL: &str = "https://api.brevo.com/v3/smtp/email";

#[derive(Debug, Error)]
pub enum MailError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("relay api error status={status} body={body}")]
    Api { status: u16, body: String },
}

#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
    /// Display name on the From line; the address itself is fixed
    /// by configuration.
    pub from_name: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError>;
}

/// Fire-and-forget delivery on a detached task. Once the caller's writes
/// have committed, a failed send must not fail the request; it is logged
/// and dropped.
pub fn send_detached(mailer: std::sync::Arc<dyn Mailer>, message: EmailMessage) {
    tokio::spawn(async move {
        if let Err(e) = mailer.send(&message).await {
            tracing::warn!(to = %message.to, subject = %message.subject, "email send failed: {e}");
        }
    });
}

#[derive(Debug, Serialize)]
struct RelayParty {
    name: String,
    email: String,
}

#[derive(Debug, Serialize)]
struct RelayRecipient {
    email: String,
}

#[derive(Debug, Serialize)]
struct RelayRequest {
    sender: RelayParty,
    to: Vec<RelayRecipient>,
    subject: String,
    #[serde(rename = "htmlContent")]
    html_content: String,
}

pub struct RelayMailer {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    from_email: String,
}

impl RelayMailer {
    pub fn new(api_key: String, from_email: String, api_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.unwrap_or_else(|| DEFAULT_RELAY_URL.to_string()),
            api_key,
            from_email,
        }
    }
}

#[async_trait]
impl Mailer for RelayMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError> {
        let req = RelayRequest {
            sender: RelayParty {
                name: message.from_name.clone(),
                email: self.from_email.clone(),
            },
            to: vec![RelayRecipient {
                email: message.to.clone(),
            }],
            subject: message.subject.clone(),
            html_content: message.html.clone(),
        };

        let resp = self
            .client
            .post(&self.api_url)
            .header("api-key", &self.api_key)
            .json(&req)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(MailError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

/// Stands in when email is switched off; accepts and drops every message.
pub struct NoopMailer;

#[async_trait]
impl Mailer for NoopMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError> {
        tracing::debug!(to = %message.to, subject = %message.subject, "email disabled, dropping message");
        Ok(())
    }
}
