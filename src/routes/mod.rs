//! Route gateway for the `hostinfo-server` API.
//!
//! Each endpoint lives in a sibling module that exports a subrouter; this
//! gateway merges them, installs the not-found fallback and attaches the
//! shared [`ServerInfo`] state.

use std::sync::Arc;

use axum::{http::StatusCode, http::Uri, response::IntoResponse, Router};
use tracing::debug;

use crate::ServerInfo;

mod health;
mod home;
mod info;
mod metrics;

/// Body returned for any path without a route.
pub const NOT_FOUND_BODY: &str = "404 page not found";

// ---

pub fn router(info: Arc<ServerInfo>) -> Router {
    // ---
    Router::new()
        .merge(home::router())
        .merge(health::router())
        .merge(info::router())
        .merge(metrics::router())
        .fallback(not_found)
        .with_state(info)
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    // ---
    debug!("GET {} - no route", uri.path());
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}
