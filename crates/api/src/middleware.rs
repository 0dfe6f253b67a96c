use std::time::{Duration, Instant};

use axum::{middleware::Next, response::Response};

/// Log one line per request: method, path, status and latency.
pub async fn request_logging(req: axum::http::Request<axum::body::Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let latency_ms = millis(started.elapsed());
    if response.status().is_server_error() {
        tracing::error!(%method, %path, status, latency_ms, "request failed");
    } else if response.status().is_client_error() {
        tracing::warn!(%method, %path, status, latency_ms, "request rejected");
    } else {
        tracing::info!(%method, %path, status, latency_ms, "request served");
    }

    response
}

/// Whole milliseconds, saturating at `u64::MAX`.
fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
