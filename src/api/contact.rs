// src/api/contact.rs

use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::config::AppConfig;
use crate::email::{send_detached, EmailMessage};
use crate::error::Result;
use crate::models::{DemoRequest, Lead, Order};
use crate::templates;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Some front-end revisions omit this field.
    #[serde(default)]
    pub message: String,
    pub plan: String,
    pub amount: f64,
}

/// Order intake: one Pending order, one lead, two notifications.
/// The notifications run detached; the response does not wait on them.
#[utoipa::path(
    post,
    path = "/contact",
    tag = "intake",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Order and lead recorded"),
        (status = 500, description = "Server error")
    )
)]
#[post("/contact")]
pub async fn contact(
    state: web::Data<AppState>,
    payload: web::Json<ContactRequest>,
) -> Result<HttpResponse> {
    let payload = payload.into_inner();

    let order = Order::new(
        payload.plan,
        payload.name,
        payload.email,
        payload.phone,
        payload.message,
        payload.amount,
    );
    state.store.insert_order(&order).await?;

    let lead = Lead::new(
        order.name.clone(),
        order.email.clone(),
        order.phone.clone(),
        order.plan.clone(),
        order.message.clone(),
    );
    state.store.insert_lead(&lead).await?;

    for message in order_notifications(&state.config, &order) {
        send_detached(state.mailer.clone(), message);
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Order Saved + Emails Sent Successfully ✅",
        "orderId": order.order_id
    })))
}

pub fn order_notifications(config: &AppConfig, order: &Order) -> [EmailMessage; 2] {
    [
        EmailMessage {
            to: config.admin_email.clone(),
            subject: format!("📩 New Order Received - {}", order.order_id),
            html: templates::order_admin(
                &order.name,
                &order.email,
                &order.phone,
                &order.plan,
                order.amount,
                &order.order_id,
            ),
            from_name: "AVX Website".to_string(),
        },
        EmailMessage {
            to: order.email.clone(),
            subject: format!("✅ Order Confirmed - {}", order.order_id),
            html: templates::order_client(&order.name, &order.plan, order.amount, &order.order_id),
            from_name: "AVX Web Services".to_string(),
        },
    ]
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DemoRequestPayload {
    pub name: String,
    pub phone: String,
    pub business: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub requirement: String,
}

#[utoipa::path(
    post,
    path = "/demo-request",
    tag = "intake",
    request_body = DemoRequestPayload,
    responses(
        (status = 200, description = "Demo request recorded"),
        (status = 500, description = "Server error")
    )
)]
#[post("/demo-request")]
pub async fn demo_request(
    state: web::Data<AppState>,
    payload: web::Json<DemoRequestPayload>,
) -> Result<HttpResponse> {
    let payload = payload.into_inner();

    let demo = DemoRequest::new(
        payload.name,
        payload.phone,
        payload.business,
        payload.kind,
        payload.requirement,
    );
    state.store.insert_demo_request(&demo).await?;

    // The form collects no submitter email, so only the operator is told.
    send_detached(
        state.mailer.clone(),
        EmailMessage {
            to: state.config.admin_email.clone(),
            subject: format!("🎁 New Demo Request - {}", demo.name),
            html: templates::demo_alert(&demo.name, &demo.business),
            from_name: "AVX Website".to_string(),
        },
    );

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Demo Request Saved ✅"
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            mongo_uri: "mongodb://localhost".into(),
            mongo_db: "avx".into(),
            session_secret: "secret".into(),
            admin_email: "owner@avx.example".into(),
            admin_pass: "pass".into(),
            cookie_secure: false,
            razorpay_key: "rzp_test_key".into(),
            razorpay_secret: "rzp_test_secret".into(),
            email_enabled: true,
            email_api_key: "relay-key".into(),
            email_from: "noreply@avx.example".into(),
            email_api_url: None,
            cors_origin: None,
            rate_limit_window_secs: 60,
            rate_limit_max: 20,
        }
    }

    #[test]
    fn notifications_cover_operator_and_client() {
        let config = test_config();
        let order = Order::new(
            "Business".into(),
            "Asha".into(),
            "asha@example.com".into(),
            "917700000000".into(),
            "need a site".into(),
            4999.0,
        );

        let [to_admin, to_client] = order_notifications(&config, &order);

        assert_eq!(to_admin.to, "owner@avx.example");
        assert_eq!(
            to_admin.subject,
            format!("📩 New Order Received - {}", order.order_id)
        );
        assert_eq!(to_admin.from_name, "AVX Website");
        assert!(to_admin.html.contains("asha@example.com"));

        assert_eq!(to_client.to, "asha@example.com");
        assert_eq!(
            to_client.subject,
            format!("✅ Order Confirmed - {}", order.order_id)
        );
        assert_eq!(to_client.from_name, "AVX Web Services");
        assert!(to_client.html.contains(&order.order_id));
    }
}
