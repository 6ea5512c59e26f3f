pub mod api;
pub mod auth;
pub mod config;
pub mod docs;
pub mod email;
pub mod error;
pub mod models;
pub mod rate_limit;
pub mod razorpay;
pub mod store;
pub mod templates;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::email::Mailer;
use crate::razorpay::PaymentGateway;
use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub mailer: Arc<dyn Mailer>,
    pub gateway: Arc<dyn PaymentGateway>,
    pub config: Arc<AppConfig>,
}
