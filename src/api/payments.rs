// src/api/payments.rs

use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::error::{ApiError, Result};
use crate::razorpay::verify_payment_signature;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    /// Major currency units.
    pub amount: f64,
}

/// Creates a gateway-side order and hands the gateway's own object back
/// to the checkout page untouched.
#[utoipa::path(
    post,
    path = "/create-order",
    tag = "payments",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Gateway order object"),
        (status = 502, description = "Gateway unavailable")
    )
)]
#[post("/create-order")]
pub async fn create_order(
    state: web::Data<AppState>,
    payload: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse> {
    let order = state.gateway.create_order(payload.amount).await?;
    Ok(HttpResponse::Ok().json(order))
}

/// Untrusted checkout callback fields, named as the gateway sends them.
#[derive(Debug, Deserialize, ToSchema)]
pub struct VerifyPaymentRequest {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
}

#[utoipa::path(
    post,
    path = "/verify-payment",
    tag = "payments",
    request_body = VerifyPaymentRequest,
    responses(
        (status = 200, description = "Order marked Paid"),
        (status = 400, description = "Signature mismatch"),
        (status = 404, description = "No order with that id"),
        (status = 500, description = "Server error")
    )
)]
#[post("/verify-payment")]
pub async fn verify_payment(
    state: web::Data<AppState>,
    payload: web::Json<VerifyPaymentRequest>,
) -> Result<HttpResponse> {
    let payload = payload.into_inner();

    let valid = verify_payment_signature(
        &state.config.razorpay_secret,
        &payload.razorpay_order_id,
        &payload.razorpay_payment_id,
        &payload.razorpay_signature,
    );
    if !valid {
        return Err(ApiError::InvalidSignature);
    }

    // Single conditional write; no read-modify-write window.
    let matched = state
        .store
        .mark_order_paid(&payload.razorpay_order_id, &payload.razorpay_payment_id)
        .await?;
    if !matched {
        return Err(ApiError::OrderNotFound);
    }

    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}
