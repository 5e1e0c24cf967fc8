//! Metrics collection and exposition.
//!
//! # Metrics
//! - `details_requests_total` (counter): requests by route, status
//! - `details_request_duration_seconds` (histogram): request latency by route
//!
//! Recording happens in `track_requests`, which wraps every route and the
//! fallback, so 404s and timeouts are counted alongside successes. Without an
//! installed exporter the macros are no-ops.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Route label for requests no route template matched.
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Install the Prometheus exporter with an HTTP scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint started"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to start metrics endpoint"),
    }
}

/// Record one handled request.
pub fn record_request(route: &str, status: u16, start: Instant) {
    metrics::counter!(
        "details_requests_total",
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    metrics::histogram!("details_request_duration_seconds", "route" => route.to_string())
        .record(start.elapsed().as_secs_f64());
}

/// Middleware labelling each request by its route template and final status.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_string());

    let response = next.run(request).await;

    record_request(&route, response.status().as_u16(), start);
    response
}
