// src/api/auth.rs

use actix_web::http::header;
use actix_web::{get, post, web, HttpResponse};
use bcrypt::{hash, verify, DEFAULT_COST};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::auth::{auth_cookie, clear_cookie, issue_token};
use crate::error::{ApiError, Result};
use crate::models::Admin;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Unknown email and wrong password are indistinguishable to the caller.
#[utoipa::path(
    post,
    path = "/admin/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token cookie set"),
        (status = 401, description = "Invalid credentials")
    )
)]
#[post("/admin/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    let admin = state
        .store
        .find_admin(&payload.email)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    let valid = verify(&payload.password, &admin.password)
        .map_err(|e| ApiError::Internal(format!("bcrypt verify: {e}")))?;
    if !valid {
        return Err(ApiError::Unauthorized);
    }

    let token = issue_token(&state.config.session_secret, &admin.email)
        .map_err(|e| ApiError::Internal(format!("token encode: {e}")))?;

    Ok(HttpResponse::Ok()
        .cookie(auth_cookie(token, state.config.cookie_secure))
        .json(json!({ "success": true })))
}

#[get("/logout")]
pub async fn logout(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Found()
        .append_header((header::LOCATION, "/admin-login.html"))
        .cookie(clear_cookie(state.config.cookie_secure))
        .finish()
}

/// One-time provisioning. Credentials come from configuration only; the
/// request carries nothing.
#[utoipa::path(
    get,
    path = "/create-admin",
    tag = "auth",
    responses(
        (status = 200, description = "Admin created, or already present")
    )
)]
#[get("/create-admin")]
pub async fn create_admin(state: web::Data<AppState>) -> Result<HttpResponse> {
    let existing = state.store.find_admin(&state.config.admin_email).await?;
    if existing.is_some() {
        return Ok(HttpResponse::Ok().body("⚠ Admin already exists"));
    }

    let password = hash(&state.config.admin_pass, DEFAULT_COST)
        .map_err(|e| ApiError::Internal(format!("bcrypt hash: {e}")))?;

    state
        .store
        .insert_admin(&Admin {
            email: state.config.admin_email.clone(),
            password,
        })
        .await?;

    Ok(HttpResponse::Ok().body("✅ Admin Created Successfully"))
}
