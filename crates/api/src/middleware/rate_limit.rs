//! Fixed-window per-IP rate limiting for the admin routes.
//!
//! Each client IP gets a counter that resets when its window elapses. The
//! limiter is process-local; a multi-instance deployment would need a shared
//! store, which is out of scope for a single-node service.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;
use crate::state::AppState;

struct WindowState {
    window_start: Instant,
    count: u32,
}

/// Fixed-window request counter keyed by client IP.
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    buckets: Mutex<HashMap<String, WindowState>>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            buckets: Mutex::new(HashMap::new()),
        }
    }

    /// Record one request for `key`. Returns `false` when the key has
    /// exhausted its budget for the current window.
    pub fn check(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut buckets = self
            .buckets
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // Drop stale entries so the map does not grow with one-off clients.
        buckets.retain(|_, w| now.duration_since(w.window_start) < self.window);

        let entry = buckets.entry(key.to_string()).or_insert(WindowState {
            window_start: now,
            count: 0,
        });
        if now.duration_since(entry.window_start) >= self.window {
            entry.window_start = now;
            entry.count = 0;
        }
        if entry.count >= self.max_requests {
            return false;
        }
        entry.count += 1;
        true
    }
}

/// Extract a client key from proxy headers.
///
/// Prefers the first hop of `x-forwarded-for`, then `x-real-ip`. Requests
/// with neither header share the `"unknown"` bucket.
fn client_key(headers: &axum::http::HeaderMap) -> String {
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }
    if let Some(real_ip) = headers.get("x-real-ip").and_then(|v| v.to_str().ok()) {
        let real_ip = real_ip.trim();
        if !real_ip.is_empty() {
            return real_ip.to_string();
        }
    }
    "unknown".to_string()
}

/// Axum middleware enforcing the admin rate limit.
///
/// Mount with `axum::middleware::from_fn_with_state` on the routers that
/// need protection.
pub async fn rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let key = client_key(request.headers());
    if state.rate_limiter.check(&key) {
        next.run(request).await
    } else {
        tracing::warn!(client = %key, "Rate limit exceeded");
        AppError::TooManyRequests.into_response()
    }
}
