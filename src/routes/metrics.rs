//! Placeholder runtime counters; both values are always zero.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tracing::debug;

use crate::{MetricsResponse, ServerInfo};

// ---

pub fn router() -> Router<Arc<ServerInfo>> {
    // ---
    Router::new().route("/metrics", get(handler))
}

/// Handle `GET /metrics`. The counters are fixed placeholders.
async fn handler() -> Json<MetricsResponse> {
    // ---
    debug!("GET /metrics");
    Json(MetricsResponse::default())
}
