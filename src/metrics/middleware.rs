//! Metrics Middleware Module
//!
//! Wraps every inbound request: starts a timer when the request arrives and
//! records a counter increment plus a latency observation once the response
//! is ready, whatever its status.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::metrics::HttpMetrics;

// == Track Metrics ==
/// Axum middleware instrumenting the full request lifecycle.
///
/// The route label is the matched route template when one exists (so
/// `/movies/:id` stays a single label value regardless of the id), falling
/// back to the raw request path for unmatched routes.
pub async fn track_metrics(
    State(metrics): State<Arc<HttpMetrics>>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let start = Instant::now();
    let response = next.run(request).await;
    let elapsed = start.elapsed().as_secs_f64();

    metrics.observe_request(&method, &route, response.status().as_u16(), elapsed);

    response
}
