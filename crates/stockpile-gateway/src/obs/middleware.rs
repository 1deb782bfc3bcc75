//! Request-tracking layer: counts every request and times the inner service.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use super::InventoryMetrics;

/// Endpoint label for requests that matched no route.
pub const UNMATCHED: &str = "unmatched";

pub async fn track_requests(
    State(metrics): State<Arc<InventoryMetrics>>,
    req: Request,
    next: Next,
) -> Response {
    metrics.requests.inc();

    let method = req.method().to_string();
    // route template, never the raw path: one series per route
    let endpoint = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED.to_owned());

    let start = Instant::now();
    let resp = next.run(req).await;
    let elapsed = start.elapsed();

    metrics
        .request_latency
        .observe(&[("method", &method), ("endpoint", &endpoint)], elapsed);
    tracing::trace!(%method, %endpoint, status = resp.status().as_u16(), ?elapsed, "request served");

    resp
}
