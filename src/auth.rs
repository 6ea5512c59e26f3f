// src/auth.rs

use actix_web::body::{EitherBody, MessageBody};
use actix_web::cookie::time::Duration as CookieDuration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, Error, HttpMessage, ResponseError};
use chrono::{Duration, Utc};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::task::{Context, Poll};

use crate::error::ApiError;
use crate::AppState;

pub const COOKIE_NAME: &str = "admin_token";

const TOKEN_TTL_HOURS: i64 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: usize,
}

pub fn issue_token(secret: &str, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(TOKEN_TTL_HOURS))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        sub: email.to_string(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
}

pub fn validate_token(secret: &str, token: &str) -> bool {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .is_ok()
}

/// Cookie lifetime matches the token lifetime.
pub fn auth_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build(COOKIE_NAME, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(CookieDuration::hours(TOKEN_TTL_HOURS))
        .finish()
}

pub fn clear_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build(COOKIE_NAME, "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(CookieDuration::ZERO)
        .finish()
}

/// Middleware for the admin scope:
/// - reads the `admin_token` cookie
/// - validates the JWT against the configured secret
/// - rejects with a uniform 401 on any failure
pub struct AdminAuth;

impl<S, B> Transform<S, ServiceRequest> for AdminAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AdminAuthInner<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminAuthInner { service }))
    }
}

pub struct AdminAuthInner<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AdminAuthInner<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let secret = req
            .app_data::<web::Data<AppState>>()
            .map(|state| state.config.session_secret.clone());

        let token = req.cookie(COOKIE_NAME).map(|c| c.value().to_string());

        match (secret, token) {
            (Some(secret), Some(token)) if validate_token(&secret, &token) => {
                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            }
            // Missing state, missing cookie, bad token: same 401.
            _ => {
                let response = ApiError::Unauthorized.error_response().map_into_right_body();
                Box::pin(async move { Ok(req.into_response(response)) })
            }
        }
    }
}
