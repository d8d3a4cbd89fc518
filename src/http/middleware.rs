//! Request middleware: structured logging and duration metrics.
//!
//! Order is significant. The logging middleware is the outer layer so it
//! observes the raw incoming request before anything else runs; the metrics
//! middleware wraps the innermost dispatch so the recorded duration covers
//! full handler execution.

use axum::extract::{ConnectInfo, Request};
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use std::net::SocketAddr;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use crate::observability::metrics;

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Per-request correlation identifier.
///
/// Derived from the wall-clock nanosecond timestamp at arrival. Unique
/// enough for log correlation, but NOT cryptographically unique: concurrent
/// requests at high rates can collide. This is a correlation aid, not a
/// security token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(pub u128);

impl RequestId {
    pub fn generate() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        Self(nanos)
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Logging middleware.
///
/// Emits a structured record for every incoming request before dispatch,
/// attaches the correlation id as a request extension, and echoes it back
/// in the `x-request-id` response header.
pub async fn logging_middleware(
    ConnectInfo(client_addr): ConnectInfo<SocketAddr>,
    mut request: Request,
    next: Next,
) -> Response {
    let request_id = RequestId::generate();
    let method = request.method().clone();
    let url = request.uri().clone();

    tracing::info!(
        method = %method,
        url = %url,
        request_id = %request_id,
        client_ip = %client_addr,
        "Incoming request"
    );

    request.extensions_mut().insert(request_id);

    let start = Instant::now();
    let mut response = next.run(request).await;
    let duration = start.elapsed();

    tracing::info!(
        method = %method,
        url = %url,
        request_id = %request_id,
        status = response.status().as_u16(),
        duration_ms = duration.as_millis() as u64,
        "Request processed"
    );

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(X_REQUEST_ID, value);
    }

    response
}

/// Metrics middleware.
///
/// Records one scrubbed histogram observation per completed request,
/// covering the full downstream handler execution.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let endpoint = request.uri().path().to_string();

    let start = Instant::now();
    let response = next.run(request).await;

    metrics::observe_request_duration(
        &method,
        &endpoint,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );

    response
}
