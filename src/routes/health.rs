// src/routes/health.rs
//! Liveness endpoint for the hostinfo service.
//!
//! This module defines the `/health` route used by container orchestrators
//! and load balancers to verify that the service is running. Besides the
//! fixed `healthy` status it reports how long the process has been up.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use tracing::debug;

use crate::{HealthResponse, ServerInfo};

/// Handle `GET /health`.
///
/// Uptime is measured against the monotonic start point captured with
/// [`ServerInfo`], so it only ever grows between calls.
async fn health(State(info): State<Arc<ServerInfo>>) -> Json<HealthResponse> {
    // ---
    let body = HealthResponse::from_info(&info);
    debug!("GET /health - uptime {}", body.uptime);
    Json(body)
}

/// Create a subrouter containing the `/health` route.
pub fn router() -> Router<Arc<ServerInfo>> {
    Router::new().route("/health", get(health))
}
