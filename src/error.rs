// src/error.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::email::MailError;
use crate::razorpay::GatewayError;
use crate::store::StoreError;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("invalid payment signature")]
    InvalidSignature,
    #[error("order not found")]
    OrderNotFound,
    #[error("lead not found")]
    LeadNotFound,
    #[error("rate limited")]
    RateLimited,
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),
    #[error("mail relay error: {0}")]
    Mail(#[from] MailError),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::InvalidSignature => StatusCode::BAD_REQUEST,
            ApiError::OrderNotFound | ApiError::LeadNotFound => StatusCode::NOT_FOUND,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Gateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::Store(_) | ApiError::Mail(_) | ApiError::Config(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Client bodies stay generic; the detail goes to the log.
        let message = match self {
            ApiError::Unauthorized => "Unauthorized",
            ApiError::InvalidSignature => "Invalid payment signature",
            ApiError::OrderNotFound => "Order not found",
            ApiError::LeadNotFound => "Lead not found",
            ApiError::RateLimited => "Too many requests, try again later.",
            ApiError::Gateway(e) => {
                tracing::error!("payment gateway error: {e}");
                "Payment gateway unavailable"
            }
            ApiError::Store(e) => {
                tracing::error!("storage error: {e}");
                "Something went wrong"
            }
            ApiError::Mail(e) => {
                tracing::error!("mail relay error: {e}");
                "Something went wrong"
            }
            ApiError::Config(e) => {
                tracing::error!("configuration error: {e}");
                "Something went wrong"
            }
            ApiError::Internal(e) => {
                tracing::error!("internal error: {e}");
                "Something went wrong"
            }
        };

        HttpResponse::build(self.status_code()).json(json!({
            "success": false,
            "message": message
        }))
    }
}
