// src/rate_limit.rs

use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, ResponseError};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::time::{Duration, Instant};

use crate::error::ApiError;

/// Above this many tracked callers, stale entries are swept on the next
/// check so the map cannot grow without bound.
const SWEEP_THRESHOLD: usize = 1024;

struct WindowSlot {
    started: Instant,
    count: u32,
}

/// Fixed-window counter per caller key. Counts reset when a key's window
/// elapses; there is no smoothing across the boundary.
pub struct FixedWindow {
    window: Duration,
    max: u32,
    state: Mutex<HashMap<String, WindowSlot>>,
}

impl FixedWindow {
    pub fn new(window: Duration, max: u32) -> Self {
        Self {
            window,
            max,
            state: Mutex::new(HashMap::new()),
        }
    }

    pub fn allow(&self, key: &str) -> bool {
        self.allow_at(key, Instant::now())
    }

    pub fn allow_at(&self, key: &str, now: Instant) -> bool {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        if state.len() > SWEEP_THRESHOLD {
            let window = self.window;
            state.retain(|_, slot| now.duration_since(slot.started) < window);
        }

        let slot = state.entry(key.to_string()).or_insert(WindowSlot {
            started: now,
            count: 0,
        });

        if now.duration_since(slot.started) >= self.window {
            slot.started = now;
            slot.count = 0;
        }

        if slot.count < self.max {
            slot.count += 1;
            true
        } else {
            false
        }
    }
}

/// Global limiter middleware; keys by peer IP and answers excess requests
/// with a uniform 429.
#[derive(Clone)]
pub struct RateLimit {
    window: Arc<FixedWindow>,
}

impl RateLimit {
    pub fn new(window: Arc<FixedWindow>) -> Self {
        Self { window }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RateLimitInner<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitInner {
            service,
            window: self.window.clone(),
        }))
    }
}

pub struct RateLimitInner<S> {
    service: S,
    window: Arc<FixedWindow>,
}

impl<S, B> Service<ServiceRequest> for RateLimitInner<S>
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
        let key = req
            .peer_addr()
            .map(|addr| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string());

        if self.window.allow(&key) {
            let fut = self.service.call(req);
            Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
        } else {
            let response = ApiError::RateLimited.error_response().map_into_right_body();
            Box::pin(async move { Ok(req.into_response(response)) })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_up_to_the_ceiling_then_blocks() {
        let window = FixedWindow::new(Duration::from_secs(60), 3);
        let now = Instant::now();
        assert!(window.allow_at("10.0.0.1", now));
        assert!(window.allow_at("10.0.0.1", now));
        assert!(window.allow_at("10.0.0.1", now));
        assert!(!window.allow_at("10.0.0.1", now));
    }

    #[test]
    fn callers_are_counted_independently() {
        let window = FixedWindow::new(Duration::from_secs(60), 1);
        let now = Instant::now();
        assert!(window.allow_at("10.0.0.1", now));
        assert!(!window.allow_at("10.0.0.1", now));
        assert!(window.allow_at("10.0.0.2", now));
    }

    #[test]
    fn window_rollover_resets_the_count() {
        let window = FixedWindow::new(Duration::from_secs(60), 2);
        let start = Instant::now();
        assert!(window.allow_at("10.0.0.1", start));
        assert!(window.allow_at("10.0.0.1", start));
        assert!(!window.allow_at("10.0.0.1", start));

        let later = start + Duration::from_secs(60);
        assert!(window.allow_at("10.0.0.1", later));
        assert!(window.allow_at("10.0.0.1", later));
        assert!(!window.allow_at("10.0.0.1", later));
    }

    #[test]
    fn requests_inside_the_window_share_one_count() {
        let window = FixedWindow::new(Duration::from_secs(60), 2);
        let start = Instant::now();
        assert!(window.allow_at("10.0.0.1", start));
        assert!(window.allow_at("10.0.0.1", start + Duration::from_secs(59)));
        assert!(!window.allow_at("10.0.0.1", start + Duration::from_secs(59)));
    }
}
