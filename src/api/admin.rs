// src/api/admin.rs
//
// Handlers behind the AdminAuth scope.

use actix_web::{delete, get, web, HttpResponse};
use serde_json::json;

use crate::email::EmailMessage;
use crate::error::{ApiError, Result};
use crate::AppState;

#[get("/orders")]
pub async fn list_orders(state: web::Data<AppState>) -> Result<HttpResponse> {
    let orders = state.store.list_orders(None).await?;
    Ok(HttpResponse::Ok().json(orders))
}

#[get("/leads")]
pub async fn list_leads(state: web::Data<AppState>) -> Result<HttpResponse> {
    let leads = state.store.list_leads(None).await?;
    Ok(HttpResponse::Ok().json(leads))
}

#[get("/demo")]
pub async fn list_demo_requests(state: web::Data<AppState>) -> Result<HttpResponse> {
    let demos = state.store.list_demo_requests(None).await?;
    Ok(HttpResponse::Ok().json(demos))
}

#[delete("/delete-lead/{id}")]
pub async fn delete_lead(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let deleted = state.store.delete_lead(&id).await?;
    if !deleted {
        return Err(ApiError::LeadNotFound);
    }
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}

/// Relay health check; sends synchronously so the outcome is real.
#[get("/test-email")]
pub async fn test_email(state: web::Data<AppState>) -> Result<HttpResponse> {
    let message = EmailMessage {
        to: state.config.admin_email.clone(),
        subject: "✅ AVX Email System Working".to_string(),
        html: "Congratulations! Your email system is working 🚀".to_string(),
        from_name: "AVX Web Services".to_string(),
    };
    state.mailer.send(&message).await?;
    Ok(HttpResponse::Ok().body("✅ Email Sent Successfully!"))
}
